//! Resolver tuning tables
//!
//! Every balance knob in the pipeline lives here rather than inline in the
//! code: the modifier order is structural, the numbers are not. The whole
//! struct deserializes from JSON so a driver can load overrides.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one resolver instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Percent chance that an eligible pool still yields no encounter
    pub no_encounter_percent: u32,
    /// Per-tier selection weights used during a blood moon (index = tier - 1)
    pub blood_moon_tier_weights: [u32; 4],
    /// Monsters at or above this tier escalate to a raid during a blood moon
    pub raid_tier: u8,
    /// Upper bound of the random bonus granted by a tier-2 location
    pub tier2_bonus_max: u32,
    /// Upper bound of the random bonus granted by a tier-3 location
    pub tier3_bonus_max: u32,
    /// Percent of the running roll removed while a debuff is active
    pub debuff_penalty_percent: u32,
    /// Outcome threshold curve
    pub thresholds: ThresholdCurve,
    /// Loot weight per rarity (index = rarity - 1); common outweighs rare
    pub rarity_weights: [u32; 10],
    /// Percent chance of one extra loot draw at a tier-2 location
    pub tier2_extra_percent: u32,
    /// Percent chance of the first extra loot draw at a tier-3 location
    pub tier3_extra_percent: u32,
    /// Percent chance of a second, independent extra draw at tier 3
    pub tier3_second_extra_percent: u32,
    /// Stamina spent per foray, win or lose
    pub stamina_cost: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            no_encounter_percent: 25,
            blood_moon_tier_weights: [1, 2, 3, 4],
            raid_tier: 4,
            tier2_bonus_max: 10,
            tier3_bonus_max: 20,
            debuff_penalty_percent: 50,
            thresholds: ThresholdCurve::default(),
            rarity_weights: [20, 15, 12, 10, 8, 6, 4, 3, 2, 1],
            tier2_extra_percent: 30,
            tier3_extra_percent: 50,
            tier3_second_extra_percent: 25,
            stamina_cost: 1,
        }
    }
}

impl ResolverConfig {
    /// Loot weight for a rarity ordinal (1..=10); out-of-range clamps.
    pub fn rarity_weight(&self, rarity: u8) -> u32 {
        let idx = (rarity.clamp(1, 10) - 1) as usize;
        self.rarity_weights[idx]
    }

    /// Blood-moon selection weight for a monster tier (1..=4).
    pub fn blood_moon_weight(&self, tier: u8) -> u32 {
        let idx = (tier.clamp(1, 4) - 1) as usize;
        self.blood_moon_tier_weights[idx]
    }
}

/// Piecewise-linear threshold curve for outcome resolution.
///
/// The shape (compare adjusted roll + stat total against a tier-scaled
/// threshold) is structural; the coefficients are balance data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdCurve {
    pub attack_base: i32,
    pub attack_per_tier: i32,
    pub defense_base: i32,
    pub defense_per_tier: i32,
    pub damage_base: i32,
    pub damage_per_tier: i32,
    /// Hearts lost grow by one per this many points below the damage line
    pub damage_step: i32,
}

impl Default for ThresholdCurve {
    fn default() -> Self {
        Self {
            attack_base: 60,
            attack_per_tier: 10,
            defense_base: 90,
            defense_per_tier: 5,
            damage_base: 20,
            damage_per_tier: 10,
            damage_step: 10,
        }
    }
}

impl ThresholdCurve {
    /// Roll + attack total must reach this to land a winning strike.
    pub fn attack_threshold(&self, tier: u8) -> i32 {
        self.attack_base + self.attack_per_tier * tier as i32
    }

    /// Roll + defense total must reach this to shrug the encounter off.
    pub fn defense_threshold(&self, tier: u8) -> i32 {
        self.defense_base + self.defense_per_tier * tier as i32
    }

    /// Rolls strictly below this line take damage.
    pub fn damage_threshold(&self, tier: u8) -> i32 {
        self.damage_base + self.damage_per_tier * tier as i32
    }

    /// Hearts lost for a damaging roll against a monster of `tier`.
    ///
    /// Deeper below the damage line hurts more; always at least 1.
    pub fn hearts_lost(&self, tier: u8, roll: u32) -> u32 {
        let below = self.damage_threshold(tier) - roll as i32;
        if below <= 0 {
            return 0;
        }
        (1 + below / self.damage_step.max(1)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve_tiers() {
        let curve = ThresholdCurve::default();
        // tier 1: attack 70, defense 95, damage 30
        assert_eq!(curve.attack_threshold(1), 70);
        assert_eq!(curve.defense_threshold(1), 95);
        assert_eq!(curve.damage_threshold(1), 30);
        // tier 4: attack 100, defense 110, damage 60
        assert_eq!(curve.attack_threshold(4), 100);
        assert_eq!(curve.defense_threshold(4), 110);
        assert_eq!(curve.damage_threshold(4), 60);
    }

    #[test]
    fn test_hearts_lost_scales_with_depth() {
        let curve = ThresholdCurve::default();
        // tier 1 damage line is 30: roll 29 -> 1, roll 20 -> 2, roll 5 -> 3
        assert_eq!(curve.hearts_lost(1, 29), 1);
        assert_eq!(curve.hearts_lost(1, 20), 2);
        assert_eq!(curve.hearts_lost(1, 5), 3);
        // at or above the line -> no damage
        assert_eq!(curve.hearts_lost(1, 30), 0);
        assert_eq!(curve.hearts_lost(1, 95), 0);
    }

    #[test]
    fn test_rarity_weight_clamps() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.rarity_weight(1), 20);
        assert_eq!(cfg.rarity_weight(10), 1);
        // out-of-range ordinals clamp instead of panicking
        assert_eq!(cfg.rarity_weight(0), 20);
        assert_eq!(cfg.rarity_weight(200), 1);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let cfg = ResolverConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ResolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.no_encounter_percent, cfg.no_encounter_percent);
        assert_eq!(back.rarity_weights, cfg.rarity_weights);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // serde(default) lets an override file set only what it cares about
        let cfg: ResolverConfig = serde_json::from_str(r#"{"stamina_cost": 3}"#).unwrap();
        assert_eq!(cfg.stamina_cost, 3);
        assert_eq!(cfg.no_encounter_percent, 25);
    }
}
