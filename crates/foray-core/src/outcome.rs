//! Outcome resolution
//!
//! `compute_outcome` is pure: it turns the adjusted roll plus the
//! combatants' stats into an `EncounterOutcome` without touching anything.
//! `apply_outcome` is the only mutating step and runs exactly once per
//! resolution, which is what lets the fated reroll compute twice and apply
//! once with no compensating writes.

use serde::{Deserialize, Serialize};

use crate::actor::{ActorId, ActorState};
use crate::config::ResolverConfig;
use crate::monster::MonsterSpec;
use crate::store::{ActorStore, StoreError};

/// The resolved result of one encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    /// Nothing was encountered
    NoEncounter,

    /// Blood-moon escalation; resolution belongs to external orchestration
    RaidSignal { monster: String },

    /// The actor prevailed
    Victory {
        roll: u32,
        attack_success: bool,
        defense_success: bool,
        loot_permitted: bool,
    },

    /// The actor was hit but stands
    Damaged { roll: u32, hearts_lost: u32 },

    /// The hit emptied the heart pool
    KnockedOut { roll: u32, hearts_lost: u32 },
}

impl EncounterOutcome {
    /// Hearts this outcome will deduct when applied.
    pub fn hearts_lost(&self) -> u32 {
        match self {
            EncounterOutcome::Damaged { hearts_lost, .. }
            | EncounterOutcome::KnockedOut { hearts_lost, .. } => *hearts_lost,
            _ => 0,
        }
    }

    /// The adjusted roll that produced this outcome, if one was rolled.
    pub fn roll(&self) -> Option<u32> {
        match self {
            EncounterOutcome::Victory { roll, .. }
            | EncounterOutcome::Damaged { roll, .. }
            | EncounterOutcome::KnockedOut { roll, .. } => Some(*roll),
            _ => None,
        }
    }

    /// Whether the loot weigher runs for this outcome.
    pub fn permits_loot(&self) -> bool {
        matches!(
            self,
            EncounterOutcome::Victory {
                loot_permitted: true,
                ..
            }
        )
    }
}

/// Resolve the adjusted roll into an outcome. Pure.
///
/// Decision table, first match wins:
/// 1. roll + defense total clears the defense line -> victory, no loot
/// 2. roll + attack total clears the attack line -> victory with loot
/// 3. roll below the damage line, damage empties the pool -> knocked out
/// 4. roll below the damage line -> damaged
/// 5. otherwise -> victory with loot
///
/// An immune actor never takes the damage rows; they degrade to a lootless
/// victory. Hearts lost are capped at the actor's current pool so a pair of
/// computed outcomes can be compared by the damage each would really apply.
pub fn compute_outcome(
    actor: &ActorState,
    monster: &MonsterSpec,
    final_roll: u32,
    cfg: &ResolverConfig,
) -> EncounterOutcome {
    let curve = &cfg.thresholds;
    let roll = final_roll as i32;

    let defense_success =
        roll + actor.defense_total() > curve.defense_threshold(monster.tier) + monster.attack;
    let attack_success =
        roll + actor.attack_total() >= curve.attack_threshold(monster.tier) + monster.defense;

    if defense_success {
        return EncounterOutcome::Victory {
            roll: final_roll,
            attack_success,
            defense_success: true,
            loot_permitted: false,
        };
    }

    if attack_success {
        return EncounterOutcome::Victory {
            roll: final_roll,
            attack_success: true,
            defense_success: false,
            loot_permitted: true,
        };
    }

    if roll < curve.damage_threshold(monster.tier) {
        if actor.immune {
            return EncounterOutcome::Victory {
                roll: final_roll,
                attack_success: false,
                defense_success: false,
                loot_permitted: false,
            };
        }
        let hearts_lost = curve.hearts_lost(monster.tier, final_roll).min(actor.hearts);
        if hearts_lost >= actor.hearts {
            return EncounterOutcome::KnockedOut {
                roll: final_roll,
                hearts_lost,
            };
        }
        return EncounterOutcome::Damaged {
            roll: final_roll,
            hearts_lost,
        };
    }

    EncounterOutcome::Victory {
        roll: final_roll,
        attack_success: false,
        defense_success: false,
        loot_permitted: true,
    }
}

/// Apply an outcome to the actor's persistent record.
///
/// The single mutating step of a resolution. Knockout marking is idempotent
/// and a knocked-out actor takes no further damage at the store layer.
pub fn apply_outcome(
    store: &mut dyn ActorStore,
    actor: ActorId,
    outcome: &EncounterOutcome,
) -> Result<(), StoreError> {
    match outcome {
        EncounterOutcome::Damaged { hearts_lost, .. } => {
            store.apply_damage(actor, *hearts_lost)?;
            Ok(())
        }
        EncounterOutcome::KnockedOut { hearts_lost, .. } => {
            store.apply_damage(actor, *hearts_lost)?;
            store.set_knocked_out(actor)
        }
        _ => Ok(()),
    }
}
