//! Transition-event fan-out.
//!
//! The engine emits into the sink synchronously, in state-change order; the
//! broadcast channel carries events to any number of subscribers.

use liferail_core::lifecycle::{EventSink, TransitionEvent};
use tokio::sync::broadcast;

/// `EventSink` over a tokio broadcast channel.
///
/// Sends never block; a lagging receiver drops old events instead of stalling
/// the transition. Send errors (no receivers) are ignored.
pub struct BroadcastSink {
    tx: broadcast::Sender<TransitionEvent>,
}

impl BroadcastSink {
    pub fn new(tx: broadcast::Sender<TransitionEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for BroadcastSink {
    fn emit(&mut self, event: TransitionEvent) {
        let _ = self.tx.send(event);
    }
}
