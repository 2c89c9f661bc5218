//! Actor state: hearts, stamina, statuses
//!
//! The one mutable record in the pipeline. Everything else (monsters, loot
//! tables, configs) is immutable reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Unique identifier for actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Effect category a temporary buff applies to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BuffCategory {
    Attack,
    Defense,
}

/// Temporary positive modifier granted by elixirs, gear procs, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub category: BuffCategory,
    pub magnitude: i32,
}

/// Persistent negative status with an expiry time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debuff {
    pub active: bool,
    pub expires_at: DateTime<Utc>,
}

impl Debuff {
    /// Whether the debuff still bites at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.active && now < self.expires_at
    }
}

/// Mutable per-actor state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    pub id: ActorId,

    /// Current hearts; 0 means knocked out
    pub hearts: u32,
    pub max_hearts: u32,

    /// Current stamina, spent once per foray
    pub stamina: u32,
    pub max_stamina: u32,

    /// Attack stat total (gear + training)
    pub attack: i32,

    /// Defense stat total
    pub defense: i32,

    /// Active temporary buff, if any
    pub buff: Option<Buff>,

    /// Active debuff, if any
    pub debuff: Option<Debuff>,

    /// Set exactly once when hearts reach 0; cleared only by healing
    pub knocked_out: bool,

    /// Immune actors never take damage (moderator characters)
    pub immune: bool,
}

impl ActorState {
    /// Create a fresh actor at full hearts and stamina.
    pub fn new(id: ActorId, max_hearts: u32, max_stamina: u32) -> Self {
        Self {
            id,
            hearts: max_hearts,
            max_hearts,
            stamina: max_stamina,
            max_stamina,
            attack: 0,
            defense: 0,
            buff: None,
            debuff: None,
            knocked_out: false,
            immune: false,
        }
    }

    /// Deduct hearts, flooring at 0, and trip the knockout flag when the
    /// pool empties. A knocked-out actor takes no further damage.
    ///
    /// Returns the hearts actually removed.
    pub fn take_damage(&mut self, hearts: u32) -> u32 {
        if self.knocked_out {
            return 0;
        }
        let lost = hearts.min(self.hearts);
        self.hearts -= lost;
        if self.hearts == 0 {
            self.knocked_out = true;
        }
        lost
    }

    /// Restore hearts, capped at the maximum. Healing above 0 hearts clears
    /// the knockout flag - knocked out is terminal until healed.
    pub fn heal(&mut self, hearts: u32) {
        self.hearts = (self.hearts + hearts).min(self.max_hearts);
        if self.hearts > 0 {
            self.knocked_out = false;
        }
    }

    /// Spend stamina if enough remains. Returns false without mutating when
    /// the pool is short.
    pub fn spend_stamina(&mut self, cost: u32) -> bool {
        if self.stamina < cost {
            return false;
        }
        self.stamina -= cost;
        true
    }

    /// Restore stamina, capped at the maximum.
    pub fn restore_stamina(&mut self, amount: u32) {
        self.stamina = (self.stamina + amount).min(self.max_stamina);
    }

    /// Magnitude of the active buff for `category`, or 0.
    pub fn buff_bonus(&self, category: BuffCategory) -> i32 {
        match self.buff {
            Some(b) if b.category == category => b.magnitude,
            _ => 0,
        }
    }

    /// Attack total including any attack buff.
    pub fn attack_total(&self) -> i32 {
        self.attack + self.buff_bonus(BuffCategory::Attack)
    }

    /// Defense total including any defense buff.
    pub fn defense_total(&self) -> i32 {
        self.defense + self.buff_bonus(BuffCategory::Defense)
    }

    /// Whether a debuff is biting at `now`.
    pub fn debuff_active(&self, now: DateTime<Utc>) -> bool {
        self.debuff.is_some_and(|d| d.is_active(now))
    }
}
