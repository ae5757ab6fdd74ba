//! liferail_harness
//!
//! Library surface for the harness binary: config parsing, the demo callback
//! implementation and the script-step mapping. Kept in a lib so the pieces
//! are testable without spawning the binary.

pub mod config;
pub mod demo;
