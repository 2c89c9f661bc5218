//! Loot table
//!
//! Each row associates an item with the monsters that drop it, its rarity
//! ordinal (1 common .. 10 rarest), and the jobs allowed to receive it.
//! Element-coded slimes bypass this table entirely via the resolver's
//! species overrides.

use foray_core::{JobFlags, LootCandidate};

const TRACKER_JOBS: JobFlags = JobFlags::HUNTER.union(JobFlags::SCOUT);

pub static LOOT: &[LootCandidate] = &[
    // Gray Wolf
    LootCandidate::new("Wolf Pelt", 1, &["Gray Wolf"], JobFlags::ANY),
    LootCandidate::new("Sharp Fang", 4, &["Gray Wolf"], JobFlags::ANY),
    LootCandidate::new("Moonlit Claw", 8, &["Gray Wolf"], TRACKER_JOBS),
    // Marsh Rat
    LootCandidate::new("Rat Tail", 1, &["Marsh Rat"], JobFlags::ANY),
    LootCandidate::new("Murk Whisker", 5, &["Marsh Rat"], JobFlags::ANY),
    // Moor Boar
    LootCandidate::new("Bristle Hide", 2, &["Moor Boar"], JobFlags::ANY),
    LootCandidate::new("Curved Tusk", 5, &["Moor Boar"], JobFlags::ANY),
    // Cinder Jackal
    LootCandidate::new("Singed Fur", 2, &["Cinder Jackal"], JobFlags::ANY),
    LootCandidate::new("Cinder Core", 7, &["Cinder Jackal"], JobFlags::ANY),
    // Basalt Golem
    LootCandidate::new("Basalt Shard", 3, &["Basalt Golem"], JobFlags::ANY),
    LootCandidate::new("Geode Heart", 9, &["Basalt Golem"], JobFlags::ANY),
    // Tarn Wraith
    LootCandidate::new("Wisp Silk", 4, &["Tarn Wraith"], JobFlags::ANY),
    LootCandidate::new("Pale Lantern", 9, &["Tarn Wraith"], JobFlags::ANY),
    // Raid stock - loot normally unreachable, but the table stays complete
    LootCandidate::new("Wyrm Scale", 7, &["Crag Wyrm"], JobFlags::ANY),
    LootCandidate::new("Crown Fragment", 10, &["Hollow King"], JobFlags::ANY),
];
