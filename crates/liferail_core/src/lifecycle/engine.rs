use std::sync::Arc;

use super::catalog;
use super::transition::transition_ids;
use super::{EventSequencer, EventSink, State, StateCell, Transition, TransitionOutcome};

/// Callbacks invoked during lifecycle transitions.
///
/// Implementors own resources and decide what Success/Failure/Error means.
/// Defaults report Success, so an implementor only overrides the hooks it
/// cares about.
pub trait LifecycleCallbacks {
    fn on_configure(&mut self) -> TransitionOutcome {
        TransitionOutcome::Success
    }
    fn on_cleanup(&mut self) -> TransitionOutcome {
        TransitionOutcome::Success
    }
    fn on_activate(&mut self) -> TransitionOutcome {
        TransitionOutcome::Success
    }
    fn on_deactivate(&mut self) -> TransitionOutcome {
        TransitionOutcome::Success
    }
    fn on_shutdown(&mut self) -> TransitionOutcome {
        TransitionOutcome::Success
    }
}

/// The lifecycle state machine proper.
///
/// Owns the single mutable current-state value. `&mut self` on every
/// transition entry point gives single-flight execution; the adapter layer
/// decides how concurrent requesters wait for the borrow.
///
/// Transition protocol (Configure/Cleanup/Activate/Deactivate/Shutdown):
/// 1. guard against the declared start state; a mismatch is a rejected
///    request: Failure, no state change, no event
/// 2. enter the intermediate state, emit the entry event
/// 3. run the callback to completion (no timeout; a hung callback wedges the
///    component in its intermediate state by contract)
/// 4. resolve the outcome to the next state
/// 5. emit the resolution event
/// 6. hand the raw outcome back to the caller
pub struct TransitionEngine {
    state: State,
    cell: Arc<StateCell>,
    callbacks: Box<dyn LifecycleCallbacks + Send>,
    sequencer: EventSequencer,
}

impl TransitionEngine {
    /// New engine parked in `Unknown`, emitting events into `sink`.
    pub fn new(callbacks: Box<dyn LifecycleCallbacks + Send>, sink: Box<dyn EventSink>) -> Self {
        Self {
            state: State::Unknown,
            cell: Arc::new(StateCell::new(State::Unknown)),
            callbacks,
            sequencer: EventSequencer::new(sink),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Shared lock-free snapshot of the current state, for concurrent readers.
    pub fn state_cell(&self) -> Arc<StateCell> {
        Arc::clone(&self.cell)
    }

    /// Dispatch a wire transition id.
    ///
    /// Unrecognized ids are rejected requests: Failure, no mutation, no event.
    /// For Destroy the outcome mirrors the guard result.
    pub fn request(&mut self, transition_id: u8) -> TransitionOutcome {
        match Transition::from_request_id(transition_id) {
            Some(Transition::Create) => self.create(),
            Some(Transition::Configure) => self.configure(),
            Some(Transition::Cleanup) => self.cleanup(),
            Some(Transition::Activate) => self.activate(),
            Some(Transition::Deactivate) => self.deactivate(),
            Some(Transition::Shutdown) => self.shutdown(),
            Some(Transition::Destroy) => {
                if self.destroy() {
                    TransitionOutcome::Success
                } else {
                    TransitionOutcome::Failure
                }
            }
            None => TransitionOutcome::Failure,
        }
    }

    /// Create: only legal from Unknown; no callback, single event, always
    /// succeeds once the guard passes.
    pub fn create(&mut self) -> TransitionOutcome {
        if !catalog::is_declared_edge(transition_ids::TRANSITION_CREATE, self.state) {
            return TransitionOutcome::Failure;
        }

        let start = self.state;
        self.set_state(State::Unconfigured);
        self.sequencer.emit(
            transition_ids::TRANSITION_CREATE,
            Transition::Create.label(),
            start,
            State::Unconfigured,
        );
        TransitionOutcome::Success
    }

    pub fn configure(&mut self) -> TransitionOutcome {
        self.run_gated(Transition::Configure)
    }

    pub fn cleanup(&mut self) -> TransitionOutcome {
        self.run_gated(Transition::Cleanup)
    }

    pub fn activate(&mut self) -> TransitionOutcome {
        self.run_gated(Transition::Activate)
    }

    pub fn deactivate(&mut self) -> TransitionOutcome {
        self.run_gated(Transition::Deactivate)
    }

    /// Shutdown is requestable from Unconfigured, Inactive and Active; the
    /// entry event carries the label-distinct id for the current state.
    pub fn shutdown(&mut self) -> TransitionOutcome {
        self.run_gated(Transition::Shutdown)
    }

    /// Destroy guard: true only from Finalized. Teardown of the owning
    /// component is the host's job; no event, no further state.
    pub fn destroy(&mut self) -> bool {
        self.state == State::Finalized
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
        self.cell.store(state);
    }

    fn run_gated(&mut self, transition: Transition) -> TransitionOutcome {
        let start = self.state;

        let Some(request_id) = transition.request_id(start) else {
            return TransitionOutcome::Failure;
        };
        if !catalog::is_declared_edge(request_id, start) {
            return TransitionOutcome::Failure;
        }
        let Some(transient) = transition.transient_state() else {
            // Create and Destroy have dedicated entry points.
            return TransitionOutcome::Failure;
        };

        self.set_state(transient);
        self.sequencer
            .emit(request_id, transition.label(), start, transient);

        // Blocks until the callback reports an outcome.
        let outcome = match transition {
            Transition::Configure => self.callbacks.on_configure(),
            Transition::Cleanup => self.callbacks.on_cleanup(),
            Transition::Activate => self.callbacks.on_activate(),
            Transition::Deactivate => self.callbacks.on_deactivate(),
            Transition::Shutdown => self.callbacks.on_shutdown(),
            Transition::Create | Transition::Destroy => return TransitionOutcome::Failure,
        };

        if let Some((goal, resolution)) = transition.resolution(outcome) {
            self.set_state(goal);
            self.sequencer
                .emit(resolution.id, resolution.label, transient, goal);
        }

        outcome
    }
}
