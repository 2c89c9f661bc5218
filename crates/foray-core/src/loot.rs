//! Loot weighing
//!
//! Builds a candidate list for the defeated monster, draws one item by
//! inverse-rarity roulette, sizes the stack by rarity band, and rolls the
//! independent location-tier extras. An empty candidate list means no loot,
//! never an error.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::monster::{Job, JobFlags, MonsterSpec};
use crate::rng::EncounterRng;

/// Immutable loot table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootCandidate {
    pub item: &'static str,
    /// Rarity ordinal, 1 (common) ..= 10 (rarest)
    pub rarity: u8,
    /// Monsters this item drops from
    pub monsters: &'static [&'static str],
    /// Jobs allowed to receive it
    pub jobs: JobFlags,
}

impl LootCandidate {
    pub const fn new(
        item: &'static str,
        rarity: u8,
        monsters: &'static [&'static str],
        jobs: JobFlags,
    ) -> Self {
        Self {
            item,
            rarity,
            monsters,
            jobs,
        }
    }

    /// Whether this item drops from `monster_name`.
    pub fn drops_from(&self, monster_name: &str) -> bool {
        self.monsters.contains(&monster_name)
    }
}

/// One awarded stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootAward {
    pub item: String,
    pub quantity: u32,
}

/// Element-coded species that always yield their material instead of a
/// weighted draw. Matched by substring against the monster name.
const SPECIES_OVERRIDES: &[(&str, &str)] = &[
    ("Ember Slime", "Ember Residue"),
    ("Frost Slime", "Frost Residue"),
    ("Volt Slime", "Volt Residue"),
];

/// Deterministic substitution for element/size-coded species.
///
/// The size prefix scales the stack: "Elder" yields 3, "Large" 2, plain 1.
fn species_override(monster: &MonsterSpec) -> Option<LootAward> {
    for (pattern, item) in SPECIES_OVERRIDES {
        if monster.name.contains(pattern) {
            let quantity = if monster.name.starts_with("Elder") {
                3
            } else if monster.name.starts_with("Large") {
                2
            } else {
                1
            };
            return Some(LootAward {
                item: (*item).to_string(),
                quantity,
            });
        }
    }
    None
}

/// Stack size for a drawn item. Commons come in handfuls, rares come alone.
fn quantity_for_rarity(rarity: u8, rng: &mut EncounterRng) -> u32 {
    match rarity {
        0..=3 => rng.between(1, 3),
        4..=5 => rng.between(1, 2),
        _ => 1,
    }
}

/// One full weighted draw: item by inverse-rarity roulette, stack by band.
fn draw_one(
    candidates: &[&LootCandidate],
    cfg: &ResolverConfig,
    rng: &mut EncounterRng,
) -> Option<LootAward> {
    let picked = rng.weighted(candidates, |c| cfg.rarity_weight(c.rarity))?;
    Some(LootAward {
        item: picked.item.to_string(),
        quantity: quantity_for_rarity(picked.rarity, rng),
    })
}

/// Weigh out the loot for a defeated monster.
///
/// Higher-tier locations may append one or two extra independently-drawn
/// awards; those are separate draws, not bigger stacks.
pub fn select_loot(
    monster: &MonsterSpec,
    candidates: &[LootCandidate],
    job: Job,
    location_tier: u8,
    cfg: &ResolverConfig,
    rng: &mut EncounterRng,
) -> Vec<LootAward> {
    // Element-coded species short-circuit the weighted path entirely.
    if let Some(award) = species_override(monster) {
        return vec![award];
    }

    let filtered: Vec<&LootCandidate> = candidates
        .iter()
        .filter(|c| c.drops_from(monster.name) && c.jobs.contains(job.flag()))
        .collect();

    let mut awards = Vec::new();
    let Some(primary) = draw_one(&filtered, cfg, rng) else {
        return awards;
    };
    awards.push(primary);

    let mut extra_draws = 0;
    match location_tier {
        2 => {
            if rng.percent(cfg.tier2_extra_percent) {
                extra_draws += 1;
            }
        }
        t if t >= 3 => {
            if rng.percent(cfg.tier3_extra_percent) {
                extra_draws += 1;
            }
            if rng.percent(cfg.tier3_second_extra_percent) {
                extra_draws += 1;
            }
        }
        _ => {}
    }

    for _ in 0..extra_draws {
        if let Some(extra) = draw_one(&filtered, cfg, rng) {
            awards.push(extra);
        }
    }

    awards
}
