//! Resolver errors
//!
//! Validation failures are typed and reported to the caller; arithmetic
//! edge cases (roll clamp, empty loot pools) are policy inside the pipeline
//! and never surface here.

use thiserror::Error;

use crate::actor::ActorId;
use crate::monster::LocationId;
use crate::store::StoreError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("actor {} not found", .0.0)]
    ActorNotFound(ActorId),

    #[error("actor {} is knocked out and must be healed first", .0.0)]
    ActorKnockedOut(ActorId),

    #[error("not enough stamina: need {needed}, have {have}")]
    OutOfStamina { needed: u32, have: u32 },

    #[error("unknown location {}", .0.0)]
    UnknownLocation(LocationId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
