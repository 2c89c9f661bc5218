//! The encounter pipeline
//!
//! Orchestrates one foray: validate the actor, spend stamina, select an
//! encounter, adjust the roll, compute the outcome (twice under a fated
//! reroll), apply it exactly once, then weigh out loot. Each resolution
//! runs to completion within one call; no state is touched before the
//! stamina gate passes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::config::ResolverConfig;
use crate::encounter::{Selection, select_encounter};
use crate::error::ResolveError;
use crate::loot::{LootAward, LootCandidate, select_loot};
use crate::monster::{Job, LocationId, LocationSpec, MonsterSpec, ThreatLevel};
use crate::outcome::{EncounterOutcome, apply_outcome, compute_outcome};
use crate::rng::EncounterRng;
use crate::roll::{BoostProvider, RollBreakdown, adjust_roll};
use crate::store::{ActorStore, StoreError};

/// Everything a caller needs to persist and render one resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterReport {
    pub actor: ActorId,
    /// Name of the encountered monster, if any
    pub monster: Option<String>,
    pub outcome: EncounterOutcome,
    /// Roll progression of the first resolution pass
    pub breakdown: Option<RollBreakdown>,
    /// Roll progression of the fated-reroll pass, when one ran
    pub reroll_breakdown: Option<RollBreakdown>,
    /// Whether the reroll pass is the one that was kept
    pub kept_reroll: bool,
    pub loot: Vec<LootAward>,
    pub stamina_spent: u32,
}

/// Reroll keep rule: strictly less damage wins; ties go to the higher roll.
fn keep_reroll(
    first: &EncounterOutcome,
    first_roll: u32,
    second: &EncounterOutcome,
    second_roll: u32,
) -> bool {
    second.hearts_lost() < first.hearts_lost()
        || (second.hearts_lost() == first.hearts_lost() && second_roll > first_roll)
}

/// The encounter resolver: immutable reference data plus tuning.
///
/// Holds no actor state; everything mutable flows through the injected
/// `ActorStore`, so one resolver serves any number of actors.
pub struct Resolver<'a> {
    pool: &'a [MonsterSpec],
    locations: &'a [LocationSpec],
    loot_table: &'a [LootCandidate],
    cfg: ResolverConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(
        pool: &'a [MonsterSpec],
        locations: &'a [LocationSpec],
        loot_table: &'a [LootCandidate],
        cfg: ResolverConfig,
    ) -> Self {
        Self {
            pool,
            locations,
            loot_table,
            cfg,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.cfg
    }

    fn location(&self, id: LocationId) -> Result<&LocationSpec, ResolveError> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .ok_or(ResolveError::UnknownLocation(id))
    }

    /// Resolve one foray for `actor_id` at `location` working as `job`.
    pub fn resolve(
        &self,
        store: &mut dyn ActorStore,
        boost: &dyn BoostProvider,
        rng: &mut EncounterRng,
        actor_id: ActorId,
        location: LocationId,
        job: Job,
        threat: ThreatLevel,
        now: DateTime<Utc>,
    ) -> Result<EncounterReport, ResolveError> {
        let location = *self.location(location)?;

        let actor = match store.get(actor_id) {
            Ok(actor) => actor,
            Err(StoreError::NotFound(id)) => return Err(ResolveError::ActorNotFound(id)),
            Err(err) => return Err(err.into()),
        };
        if actor.knocked_out {
            return Err(ResolveError::ActorKnockedOut(actor_id));
        }

        // Stamina gate: the foray costs whether or not anything shows up.
        let cost = self.cfg.stamina_cost;
        if !store.spend_stamina(actor_id, cost)? {
            return Err(ResolveError::OutOfStamina {
                needed: cost,
                have: actor.stamina,
            });
        }

        let monster = match select_encounter(self.pool, location.id, job, threat, &self.cfg, rng) {
            Selection::NoEncounter => {
                return Ok(EncounterReport {
                    actor: actor_id,
                    monster: None,
                    outcome: EncounterOutcome::NoEncounter,
                    breakdown: None,
                    reroll_breakdown: None,
                    kept_reroll: false,
                    loot: Vec::new(),
                    stamina_spent: cost,
                });
            }
            Selection::Raid(m) => {
                return Ok(EncounterReport {
                    actor: actor_id,
                    monster: Some(m.name.to_string()),
                    outcome: EncounterOutcome::RaidSignal {
                        monster: m.name.to_string(),
                    },
                    breakdown: None,
                    reroll_breakdown: None,
                    kept_reroll: false,
                    loot: Vec::new(),
                    stamina_spent: cost,
                });
            }
            Selection::Encounter(m) => m,
        };

        // First resolution pass. Computation is pure; nothing is applied yet.
        let first_bd = adjust_roll(
            rng.d100(),
            &actor,
            location.tier,
            now,
            boost,
            &self.cfg,
            rng,
        );
        let first = compute_outcome(&actor, monster, first_bd.final_roll, &self.cfg);

        // Fated reroll: only for damaging outcomes, only when granted. Keep
        // the outcome with less damage, tie-broken by the higher final roll.
        let mut reroll_bd = None;
        let mut kept_reroll = false;
        let outcome = if first.hearts_lost() > 0 && boost.grants_reroll(actor_id) {
            let second_bd = adjust_roll(
                rng.d100(),
                &actor,
                location.tier,
                now,
                boost,
                &self.cfg,
                rng,
            );
            let second = compute_outcome(&actor, monster, second_bd.final_roll, &self.cfg);
            let keep_second =
                keep_reroll(&first, first_bd.final_roll, &second, second_bd.final_roll);
            reroll_bd = Some(second_bd);
            if keep_second {
                kept_reroll = true;
                second
            } else {
                first
            }
        } else {
            first
        };

        // The single mutating step. A failure here surfaces as-is; with one
        // apply per resolution there is no partial reconciliation to unwind.
        apply_outcome(store, actor_id, &outcome)?;

        let loot = if outcome.permits_loot() {
            select_loot(monster, self.loot_table, job, location.tier, &self.cfg, rng)
        } else {
            Vec::new()
        };

        Ok(EncounterReport {
            actor: actor_id,
            monster: Some(monster.name.to_string()),
            outcome,
            breakdown: Some(first_bd),
            reroll_breakdown: reroll_bd,
            kept_reroll,
            loot,
            stamina_spent: cost,
        })
    }
}
