use std::time::Instant;

use super::State;

/// Record emitted for every engine-driven state change.
///
/// A non-trivial transition produces exactly two: entering the intermediate
/// state (carrying the requested transition id) and resolving out of it
/// (carrying the synthesized `on_<action>_*` id). Create produces one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionEvent {
    /// Monotonic nanoseconds; strictly increasing within one sequencer.
    pub timestamp_ns: u64,
    pub transition_id: u8,
    pub transition_label: &'static str,
    pub start_state: State,
    pub goal_state: State,
}

/// Destination for transition events.
///
/// Implementors fan events out to subscribers (e.g. a broadcast channel).
/// Delivery beyond the sink is not the core's concern.
pub trait EventSink: Send {
    fn emit(&mut self, event: TransitionEvent);
}

/// Builds and emits transition events in order.
///
/// One parameterized routine replaces per-transition event construction; the
/// engine calls it strictly before and strictly after each callback, so sink
/// order always matches state-change order.
pub struct EventSequencer {
    sink: Box<dyn EventSink>,
    anchor: Instant,
    last_stamp_ns: u64,
}

impl EventSequencer {
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Self {
            sink,
            anchor: Instant::now(),
            last_stamp_ns: 0,
        }
    }

    /// Stamp and emit one event.
    pub fn emit(
        &mut self,
        transition_id: u8,
        transition_label: &'static str,
        start_state: State,
        goal_state: State,
    ) {
        let timestamp_ns = self.stamp();
        self.sink.emit(TransitionEvent {
            timestamp_ns,
            transition_id,
            transition_label,
            start_state,
            goal_state,
        });
    }

    // Clamped to be strictly increasing so the stream never carries duplicate
    // stamps, even if the clock resolution is coarse.
    fn stamp(&mut self) -> u64 {
        let mut now = self.anchor.elapsed().as_nanos() as u64;
        if now <= self.last_stamp_ns {
            now = self.last_stamp_ns + 1;
        }
        self.last_stamp_ns = now;
        now
    }
}
