//! liferail_node
//!
//! Adapter layer around `liferail_core`: a named component wrapper, the
//! request/response DTOs for the four inbound lifecycle operations, a
//! broadcast transition-event stream, and a single-flight service façade.
//! Transports map their own message types onto the DTOs here.

pub mod dtos;
pub mod error;

mod events;
pub use events::BroadcastSink;

mod node;
pub use node::LifecycleNode;

mod service;
pub use service::LifecycleService;

// Re-export core types that adapter users will commonly need
pub use liferail_core::error::{CoreError, Result};
pub use liferail_core::lifecycle::{
    LifecycleCallbacks, State, Transition, TransitionEvent, TransitionOutcome,
};
