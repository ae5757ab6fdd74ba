//! liferail_core: transport-agnostic lifecycle semantics for managed components.
//!
//! Design goals:
//! - Pure, testable logic (no transport deps).
//! - Explicit types; no macro wizardry.
//! - Small, stable public API surface.

pub mod error;

/// Lifecycle state machine: states, transition catalog, engine, event sequencer.
pub mod lifecycle;
