//! Monster roster
//!
//! Immutable templates consumed by the encounter selector. Tier runs 1..=4;
//! tier-4 monsters only matter under a blood moon, where they escalate to
//! raid signals.

use foray_core::{JobFlags, MonsterSpec};

use crate::locations::{
    ASHEN_CALDERA, GLASS_TARN, MIRE_HOLLOW, SHATTERED_PEAK, WINDSWEPT_FIELD,
};

const FIELD_JOBS: JobFlags = JobFlags::HUNTER
    .union(JobFlags::SCOUT)
    .union(JobFlags::FORAGER)
    .union(JobFlags::VILLAGER);

const COMBAT_JOBS: JobFlags = JobFlags::HUNTER.union(JobFlags::MERCENARY).union(JobFlags::SCOUT);

pub static MONSTERS: &[MonsterSpec] = &[
    // Tier 1 - roadside nuisances
    MonsterSpec::new("Gray Wolf", 1, 2, 1, &[WINDSWEPT_FIELD, MIRE_HOLLOW], JobFlags::ANY),
    MonsterSpec::new("Marsh Rat", 1, 1, 0, &[MIRE_HOLLOW], FIELD_JOBS),
    MonsterSpec::new("Ember Slime", 1, 1, 0, &[ASHEN_CALDERA], JobFlags::ANY),
    MonsterSpec::new("Frost Slime", 1, 1, 0, &[GLASS_TARN], JobFlags::ANY),
    MonsterSpec::new("Volt Slime", 1, 1, 0, &[SHATTERED_PEAK], JobFlags::ANY),
    // Tier 2 - a real fight
    MonsterSpec::new("Moor Boar", 2, 3, 2, &[WINDSWEPT_FIELD, MIRE_HOLLOW], JobFlags::ANY),
    MonsterSpec::new("Cinder Jackal", 2, 4, 1, &[ASHEN_CALDERA], COMBAT_JOBS),
    MonsterSpec::new("Large Frost Slime", 2, 3, 2, &[GLASS_TARN], JobFlags::ANY),
    // Tier 3 - worth a story
    MonsterSpec::new("Basalt Golem", 3, 5, 5, &[ASHEN_CALDERA, SHATTERED_PEAK], COMBAT_JOBS),
    MonsterSpec::new("Elder Ember Slime", 3, 4, 2, &[ASHEN_CALDERA], JobFlags::ANY),
    MonsterSpec::new("Tarn Wraith", 3, 6, 3, &[GLASS_TARN], COMBAT_JOBS),
    // Tier 4 - blood-moon raid stock
    MonsterSpec::new("Crag Wyrm", 4, 8, 6, &[SHATTERED_PEAK], COMBAT_JOBS),
    MonsterSpec::new("Hollow King", 4, 9, 7, &[MIRE_HOLLOW, SHATTERED_PEAK], COMBAT_JOBS),
];
