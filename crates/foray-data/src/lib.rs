//! foray-data: Static reference data for the foray resolver
//!
//! Contains the monster roster, location registry, and loot table.

pub mod locations;
pub mod loot;
pub mod monsters;

pub use locations::{LOCATIONS, find_location, location_by_id};
pub use loot::LOOT;
pub use monsters::MONSTERS;
