//! Monster templates and eligibility
//!
//! Templates are immutable reference data. Functions accept `&[MonsterSpec]`
//! for the monster pool since foray-core cannot depend on foray-data (the
//! dependency runs the other way).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Unique identifier for location regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u16);

/// A named region with a quality tier (1..=3)
///
/// Higher tiers grant roll bonuses and extra loot draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSpec {
    pub id: LocationId,
    pub name: &'static str,
    pub tier: u8,
}

impl LocationSpec {
    pub const fn new(id: u16, name: &'static str, tier: u8) -> Self {
        Self {
            id: LocationId(id),
            name,
            tier,
        }
    }
}

bitflags! {
    /// Which jobs can run into a monster type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct JobFlags: u16 {
        const HUNTER    = 0x0001;
        const MERCENARY = 0x0002;
        const SCOUT     = 0x0004;
        const FORAGER   = 0x0008;
        const VILLAGER  = 0x0010;
    }
}

impl JobFlags {
    /// Every job
    pub const ANY: Self = Self::all();
}

/// An actor's job
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Job {
    Hunter,
    Mercenary,
    Scout,
    Forager,
    Villager,
}

impl Job {
    /// The eligibility bit this job occupies in a monster's mask.
    pub const fn flag(self) -> JobFlags {
        match self {
            Job::Hunter => JobFlags::HUNTER,
            Job::Mercenary => JobFlags::MERCENARY,
            Job::Scout => JobFlags::SCOUT,
            Job::Forager => JobFlags::FORAGER,
            Job::Villager => JobFlags::VILLAGER,
        }
    }
}

/// Threat level for an encounter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum ThreatLevel {
    #[default]
    Normal,
    /// Heightened threat: tier-weighted selection, top tiers escalate to raids
    BloodMoon,
}

/// Immutable monster template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterSpec {
    pub name: &'static str,
    /// Difficulty class, 1..=4
    pub tier: u8,
    /// Attack power; pushes the defense-success threshold up
    pub attack: i32,
    /// Defense power; pushes the attack-success threshold up
    pub defense: i32,
    /// Regions this monster roams
    pub locations: &'static [LocationId],
    /// Jobs that can run into it
    pub jobs: JobFlags,
}

impl MonsterSpec {
    pub const fn new(
        name: &'static str,
        tier: u8,
        attack: i32,
        defense: i32,
        locations: &'static [LocationId],
        jobs: JobFlags,
    ) -> Self {
        Self {
            name,
            tier,
            attack,
            defense,
            locations,
            jobs,
        }
    }

    /// Whether this monster roams `location`.
    pub fn roams(&self, location: LocationId) -> bool {
        self.locations.contains(&location)
    }

    /// Whether `job` can run into this monster.
    pub fn hunted_by(&self, job: Job) -> bool {
        self.jobs.contains(job.flag())
    }
}
