//! foray-core: encounter resolution engine
//!
//! This crate contains all resolver logic with no I/O dependencies.
//! It is designed to be pure and testable: the only mutable state flows
//! through the [`store::ActorStore`] seam, and external boost/status state
//! is injected through [`roll::BoostProvider`].
//!
//! Pipeline: encounter selection -> roll adjustment -> outcome computation
//! (pure) -> outcome application (the single mutating step) -> loot weighing.

pub mod actor;
pub mod config;
pub mod encounter;
pub mod error;
pub mod loot;
pub mod monster;
pub mod outcome;
pub mod resolve;
pub mod roll;
pub mod store;

mod rng;

pub use actor::{ActorId, ActorState, Buff, BuffCategory, Debuff};
pub use config::{ResolverConfig, ThresholdCurve};
pub use encounter::{Selection, eligible_monsters, select_encounter};
pub use error::ResolveError;
pub use loot::{LootAward, LootCandidate, select_loot};
pub use monster::{Job, JobFlags, LocationId, LocationSpec, MonsterSpec, ThreatLevel};
pub use outcome::{EncounterOutcome, apply_outcome, compute_outcome};
pub use resolve::{EncounterReport, Resolver};
pub use rng::EncounterRng;
pub use roll::{BoostProvider, NoBoost, RollBreakdown, adjust_roll};
pub use store::{ActorStore, MemoryStore, StoreError};
