//! Property tests for the arithmetic invariants.

use chrono::{Duration, Utc};
use foray_core::{
    ActorId, ActorState, BoostProvider, Debuff, EncounterRng, ResolverConfig, adjust_roll,
};
use proptest::prelude::*;

struct FixedBoost(i32);

impl BoostProvider for FixedBoost {
    fn adjust_roll(&self, _actor: ActorId, raw: i32) -> i32 {
        raw.saturating_add(self.0)
    }

    fn grants_reroll(&self, _actor: ActorId) -> bool {
        false
    }
}

proptest! {
    // The adjusted roll is clamped to [1, 100] no matter how extreme the
    // modifiers get.
    #[test]
    fn adjusted_roll_always_in_range(
        base in 1u32..=100,
        boost in any::<i32>(),
        tier in 1u8..=5,
        debuffed in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cfg = ResolverConfig::default();
        let mut rng = EncounterRng::new(seed);
        let now = Utc::now();
        let mut actor = ActorState::new(ActorId(1), 10, 5);
        if debuffed {
            actor.debuff = Some(Debuff {
                active: true,
                expires_at: now + Duration::hours(1),
            });
        }

        let breakdown = adjust_roll(base, &actor, tier, now, &FixedBoost(boost), &cfg, &mut rng);
        prop_assert!((1..=100).contains(&breakdown.final_roll));
    }

    // Hearts never go negative and the knockout flag trips exactly at zero,
    // for any damage sequence.
    #[test]
    fn hearts_never_negative(hits in proptest::collection::vec(0u32..=8, 1..40)) {
        let mut actor = ActorState::new(ActorId(1), 12, 5);
        for hit in hits {
            actor.take_damage(hit);
            prop_assert!(actor.hearts <= actor.max_hearts);
            prop_assert_eq!(actor.knocked_out, actor.hearts == 0);
        }
    }

    // An active debuff never improves the pre-boost roll.
    #[test]
    fn debuff_never_helps(base in 1u32..=100, tier in 1u8..=3, seed in any::<u64>()) {
        let cfg = ResolverConfig::default();
        let now = Utc::now();

        let clean = ActorState::new(ActorId(1), 10, 5);
        let mut cursed = clean.clone();
        cursed.debuff = Some(Debuff {
            active: true,
            expires_at: now + Duration::hours(1),
        });

        // Same seed so both sides draw the same location bonus
        let mut rng_a = EncounterRng::new(seed);
        let mut rng_b = EncounterRng::new(seed);
        let a = adjust_roll(base, &clean, tier, now, &foray_core::NoBoost, &cfg, &mut rng_a);
        let b = adjust_roll(base, &cursed, tier, now, &foray_core::NoBoost, &cfg, &mut rng_b);

        prop_assert!(b.pre_boost <= a.pre_boost);
        prop_assert!(b.final_roll <= a.final_roll);
    }
}
