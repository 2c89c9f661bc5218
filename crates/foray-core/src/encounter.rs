//! Encounter selection
//!
//! Filters the monster pool by location and job, gates on the no-encounter
//! chance, then picks a monster - uniformly on a normal night, tier-weighted
//! under a blood moon. Pure over the supplied pool.

use crate::config::ResolverConfig;
use crate::monster::{Job, LocationId, MonsterSpec, ThreatLevel};
use crate::rng::EncounterRng;

/// What the selector decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Nothing found the actor this time
    NoEncounter,
    /// A monster turned up
    Encounter(&'a MonsterSpec),
    /// Blood-moon escalation: resolution is handed to external orchestration
    Raid(&'a MonsterSpec),
}

/// Monsters from `pool` eligible for this location/job pair.
pub fn eligible_monsters<'a>(
    pool: &'a [MonsterSpec],
    location: LocationId,
    job: Job,
) -> Vec<&'a MonsterSpec> {
    pool.iter()
        .filter(|m| m.roams(location) && m.hunted_by(job))
        .collect()
}

/// Decide whether a monster is encountered and which one.
///
/// An empty eligible pool always yields `NoEncounter`; otherwise the
/// no-encounter gate fires first, then the pick. Under a blood moon the pick
/// is weighted by tier and monsters at or above the raid tier escalate.
pub fn select_encounter<'a>(
    pool: &'a [MonsterSpec],
    location: LocationId,
    job: Job,
    threat: ThreatLevel,
    cfg: &ResolverConfig,
    rng: &mut EncounterRng,
) -> Selection<'a> {
    let eligible = eligible_monsters(pool, location, job);
    if eligible.is_empty() {
        return Selection::NoEncounter;
    }

    if rng.percent(cfg.no_encounter_percent) {
        return Selection::NoEncounter;
    }

    match threat {
        ThreatLevel::Normal => match rng.pick(&eligible) {
            Some(&m) => Selection::Encounter(m),
            None => Selection::NoEncounter,
        },
        ThreatLevel::BloodMoon => {
            // Zero-weighted tiers are never drawn; a pool of only those
            // behaves like no encounter.
            match rng.weighted(&eligible, |m| cfg.blood_moon_weight(m.tier)) {
                Some(&m) if m.tier >= cfg.raid_tier => Selection::Raid(m),
                Some(&m) => Selection::Encounter(m),
                None => Selection::NoEncounter,
            }
        }
    }
}
