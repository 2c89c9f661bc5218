//! Actor persistence seam
//!
//! One resolution performs a handful of sequential read-modify-write calls
//! against this trait. Writes are last-writer-wins; callers that need
//! stronger guarantees serialize per-actor externally.

use std::collections::HashMap;

use thiserror::Error;

use crate::actor::{ActorId, ActorState};

/// Errors surfaced by a store backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("actor {} not found", .0.0)]
    NotFound(ActorId),

    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Actor-state repository
pub trait ActorStore {
    fn get(&self, actor: ActorId) -> Result<ActorState, StoreError>;

    fn put(&mut self, state: ActorState) -> Result<(), StoreError>;

    /// Deduct hearts (floors at 0, no-op when knocked out).
    /// Returns the hearts remaining.
    fn apply_damage(&mut self, actor: ActorId, hearts: u32) -> Result<u32, StoreError>;

    /// Idempotent knockout mark.
    fn set_knocked_out(&mut self, actor: ActorId) -> Result<(), StoreError>;

    /// Restore hearts, capped at max; revives a knocked-out actor.
    fn heal(&mut self, actor: ActorId, hearts: u32) -> Result<(), StoreError>;

    /// Spend stamina. Ok(false) means the pool was short and nothing changed.
    fn spend_stamina(&mut self, actor: ActorId, cost: u32) -> Result<bool, StoreError>;
}

/// HashMap-backed store for tests and drivers
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    actors: HashMap<ActorId, ActorState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an actor, replacing any previous state.
    pub fn insert(&mut self, state: ActorState) {
        self.actors.insert(state.id, state);
    }

    fn state_mut(&mut self, actor: ActorId) -> Result<&mut ActorState, StoreError> {
        self.actors.get_mut(&actor).ok_or(StoreError::NotFound(actor))
    }
}

impl ActorStore for MemoryStore {
    fn get(&self, actor: ActorId) -> Result<ActorState, StoreError> {
        self.actors
            .get(&actor)
            .cloned()
            .ok_or(StoreError::NotFound(actor))
    }

    fn put(&mut self, state: ActorState) -> Result<(), StoreError> {
        self.actors.insert(state.id, state);
        Ok(())
    }

    fn apply_damage(&mut self, actor: ActorId, hearts: u32) -> Result<u32, StoreError> {
        let state = self.state_mut(actor)?;
        state.take_damage(hearts);
        Ok(state.hearts)
    }

    fn set_knocked_out(&mut self, actor: ActorId) -> Result<(), StoreError> {
        let state = self.state_mut(actor)?;
        state.knocked_out = true;
        Ok(())
    }

    fn heal(&mut self, actor: ActorId, hearts: u32) -> Result<(), StoreError> {
        let state = self.state_mut(actor)?;
        state.heal(hearts);
        Ok(())
    }

    fn spend_stamina(&mut self, actor: ActorId, cost: u32) -> Result<bool, StoreError> {
        let state = self.state_mut(actor)?;
        Ok(state.spend_stamina(cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(hearts: u32, stamina: u32) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(ActorState::new(ActorId(1), hearts, stamina));
        store
    }

    #[test]
    fn test_get_missing_actor() {
        let store = MemoryStore::new();
        assert_eq!(
            store.get(ActorId(9)),
            Err(StoreError::NotFound(ActorId(9)))
        );
    }

    #[test]
    fn test_apply_damage_reports_remaining() {
        let mut store = store_with(10, 5);
        assert_eq!(store.apply_damage(ActorId(1), 4).unwrap(), 6);
        assert_eq!(store.apply_damage(ActorId(1), 9).unwrap(), 0);
        let state = store.get(ActorId(1)).unwrap();
        assert!(state.knocked_out);
    }

    #[test]
    fn test_damage_after_knockout_is_noop() {
        let mut store = store_with(2, 5);
        store.apply_damage(ActorId(1), 5).unwrap();
        assert_eq!(store.apply_damage(ActorId(1), 3).unwrap(), 0);
        assert_eq!(store.get(ActorId(1)).unwrap().hearts, 0);
    }

    #[test]
    fn test_heal_revives() {
        let mut store = store_with(2, 5);
        store.apply_damage(ActorId(1), 5).unwrap();
        store.heal(ActorId(1), 2).unwrap();
        let state = store.get(ActorId(1)).unwrap();
        assert_eq!(state.hearts, 2);
        assert!(!state.knocked_out);
    }

    #[test]
    fn test_spend_stamina_short_pool() {
        let mut store = store_with(10, 1);
        assert!(store.spend_stamina(ActorId(1), 1).unwrap());
        assert!(!store.spend_stamina(ActorId(1), 1).unwrap());
    }
}
