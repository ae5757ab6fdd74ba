//! liferail_core::lifecycle
//!
//! Pure (transport-agnostic) lifecycle semantics for a managed component.
//! This module intentionally contains **no** transport code.
//!
//! Key ideas:
//! - Primary (stable) states + transition (intermediate) states, Unknown first
//! - Static catalog of declared edges used for guards and introspection
//! - Transition pipeline: guard -> entry event -> callback -> resolution event
//! - Error outcomes park the component in `ErrorProcessing`; recovery belongs
//!   to an external collaborator
//! - Adapter layer is responsible for request transport and event fan-out

mod catalog;
mod cell;
mod engine;
mod sequencer;
mod state;
mod transition;

pub use catalog::{available_states, available_transitions, TransitionDescription, TRANSITION_CATALOG};
pub use cell::StateCell;
pub use engine::{LifecycleCallbacks, TransitionEngine};
pub use sequencer::{EventSequencer, EventSink, TransitionEvent};
pub use state::{State, ALL_STATES};
pub use transition::{
    shutdown_request_id_for_state, transition_ids, Resolution, Transition, TransitionOutcome,
};
