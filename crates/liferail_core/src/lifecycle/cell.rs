use std::sync::atomic::{AtomicU8, Ordering};

use super::State;

/// Single-word atomic snapshot of the current lifecycle state.
///
/// Intended use (adapter layer):
/// - the engine stores every state change here
/// - introspection reads `load()` without taking the transition lock
///
/// Readers get a consistent, possibly slightly stale state; they never block
/// behind an in-flight transition.
#[derive(Debug)]
pub struct StateCell {
    id: AtomicU8,
}

impl StateCell {
    pub const fn new(state: State) -> Self {
        Self {
            id: AtomicU8::new(state.id()),
        }
    }

    pub fn store(&self, state: State) {
        self.id.store(state.id(), Ordering::Release);
    }

    pub fn load(&self) -> State {
        // Only valid ids are ever stored; fall back to Unknown rather than panic.
        State::from_id(self.id.load(Ordering::Acquire)).unwrap_or(State::Unknown)
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new(State::Unknown)
    }
}
