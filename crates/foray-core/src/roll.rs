//! Roll adjustment
//!
//! Takes the caller's base d100 and applies the modifier chain in fixed
//! order: location-tier bonus, debuff penalty, boost adjustment, clamp.
//! The order is preserved for audit parity with recorded resolutions; the
//! numbers live in `ResolverConfig`. Pure arithmetic, no failure modes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::{ActorId, ActorState};
use crate::config::ResolverConfig;
use crate::rng::EncounterRng;

/// External boost/status lookup.
///
/// Injected as a trait so the adjuster can be exercised with fakes instead
/// of whatever service owns boost state.
pub trait BoostProvider {
    /// Adjust a raw roll for the actor. May move it either way; the
    /// adjuster clamps afterwards.
    fn adjust_roll(&self, actor: ActorId, raw: i32) -> i32;

    /// Whether the actor currently holds a fated-reroll grant.
    fn grants_reroll(&self, actor: ActorId) -> bool;
}

/// Provider for actors with nothing active.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBoost;

impl BoostProvider for NoBoost {
    fn adjust_roll(&self, _actor: ActorId, raw: i32) -> i32 {
        raw
    }

    fn grants_reroll(&self, _actor: ActorId) -> bool {
        false
    }
}

/// The roll progression trail for one adjustment pass.
///
/// Kept so callers can render how the base roll became the final one; only
/// `final_roll` feeds the outcome resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBreakdown {
    /// Caller-supplied base, uniform in [1, 100]
    pub base: u32,
    /// After the location-tier bonus
    pub after_location: i32,
    /// After the debuff penalty; the pre-boost value
    pub pre_boost: i32,
    /// After the boost adjustment, before clamping
    pub post_boost: i32,
    /// Clamped to [1, 100]; what the outcome resolver consumes
    pub final_roll: u32,
}

/// Apply the modifier chain to `base`.
pub fn adjust_roll(
    base: u32,
    actor: &ActorState,
    location_tier: u8,
    now: DateTime<Utc>,
    boost: &dyn BoostProvider,
    cfg: &ResolverConfig,
    rng: &mut EncounterRng,
) -> RollBreakdown {
    // 1. Location-tier bonus: tier 1 adds nothing, higher tiers add an
    //    increasing random bonus.
    let bonus = match location_tier {
        2 => rng.between(1, cfg.tier2_bonus_max),
        t if t >= 3 => rng.between(1, cfg.tier3_bonus_max),
        _ => 0,
    };
    let after_location = base as i32 + bonus as i32;

    // 2. Debuff penalty: scale the running roll down. Strictly worsens any
    //    roll the clamp doesn't already floor.
    let pre_boost = if actor.debuff_active(now) {
        let keep = 100 - cfg.debuff_penalty_percent.min(100) as i32;
        after_location * keep / 100
    } else {
        after_location
    };

    // 3. Externally supplied boost adjustment.
    let post_boost = boost.adjust_roll(actor.id, pre_boost);

    // 4. Clamp to the d100 domain.
    let final_roll = post_boost.clamp(1, 100) as u32;

    RollBreakdown {
        base,
        after_location,
        pre_boost,
        post_boost,
        final_roll,
    }
}
