use super::State;

/// User-invokable lifecycle transitions (requests).
///
/// All "on_<action>_success/failure/error" resolution transitions are synthesized
/// by the engine via [`Transition::resolution`]; they are never requested.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Create,
    Configure,
    Cleanup,
    Activate,
    Deactivate,
    Shutdown,
    Destroy,
}

/// Wire ids for requestable transitions.
///
/// Shutdown has three ids differing only by declared start state; the engine
/// selects the matching one from the current state.
pub mod transition_ids {
    pub const TRANSITION_CREATE: u8 = 0;
    pub const TRANSITION_CONFIGURE: u8 = 1;
    pub const TRANSITION_CLEANUP: u8 = 2;
    pub const TRANSITION_ACTIVATE: u8 = 3;
    pub const TRANSITION_DEACTIVATE: u8 = 4;
    pub const TRANSITION_UNCONFIGURED_SHUTDOWN: u8 = 5;
    pub const TRANSITION_INACTIVE_SHUTDOWN: u8 = 6;
    pub const TRANSITION_ACTIVE_SHUTDOWN: u8 = 7;
    pub const TRANSITION_DESTROY: u8 = 8;

    pub const TRANSITION_ON_CONFIGURE_SUCCESS: u8 = 10;
    pub const TRANSITION_ON_CONFIGURE_FAILURE: u8 = 11;
    pub const TRANSITION_ON_CONFIGURE_ERROR: u8 = 12;
    pub const TRANSITION_ON_CLEANUP_SUCCESS: u8 = 20;
    pub const TRANSITION_ON_CLEANUP_ERROR: u8 = 22;
    pub const TRANSITION_ON_ACTIVATE_SUCCESS: u8 = 30;
    pub const TRANSITION_ON_ACTIVATE_FAILURE: u8 = 31;
    pub const TRANSITION_ON_ACTIVATE_ERROR: u8 = 32;
    pub const TRANSITION_ON_DEACTIVATE_SUCCESS: u8 = 40;
    pub const TRANSITION_ON_DEACTIVATE_ERROR: u8 = 42;
    pub const TRANSITION_ON_SHUTDOWN_SUCCESS: u8 = 50;
    pub const TRANSITION_ON_SHUTDOWN_ERROR: u8 = 52;
}

/// Result a transition callback reports back to the engine.
///
/// - Success: proceed to the declared goal state
/// - Failure: fall back to the declared failure state (where one exists)
/// - Error: enter `ErrorProcessing`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransitionOutcome {
    Success,
    Failure,
    Error,
}

/// Identifier + label pair for a synthesized resolution transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Resolution {
    pub id: u8,
    pub label: &'static str,
}

impl Transition {
    /// Stable, human-readable request label.
    pub const fn label(self) -> &'static str {
        match self {
            Transition::Create => "create",
            Transition::Configure => "configure",
            Transition::Cleanup => "cleanup",
            Transition::Activate => "activate",
            Transition::Deactivate => "deactivate",
            Transition::Shutdown => "shutdown",
            Transition::Destroy => "destroy",
        }
    }

    /// Map a wire request id to its semantic transition.
    ///
    /// The three shutdown variants collapse onto `Shutdown`; the engine picks
    /// the label-distinct id again from the current state when emitting events.
    pub const fn from_request_id(id: u8) -> Option<Transition> {
        use transition_ids::*;
        match id {
            TRANSITION_CREATE => Some(Transition::Create),
            TRANSITION_CONFIGURE => Some(Transition::Configure),
            TRANSITION_CLEANUP => Some(Transition::Cleanup),
            TRANSITION_ACTIVATE => Some(Transition::Activate),
            TRANSITION_DEACTIVATE => Some(Transition::Deactivate),
            TRANSITION_UNCONFIGURED_SHUTDOWN
            | TRANSITION_INACTIVE_SHUTDOWN
            | TRANSITION_ACTIVE_SHUTDOWN => Some(Transition::Shutdown),
            TRANSITION_DESTROY => Some(Transition::Destroy),
            _ => None,
        }
    }

    /// Wire request id for this transition starting from `start`.
    ///
    /// Returns `None` when no id exists (shutdown from a state it is not
    /// declared for).
    pub const fn request_id(self, start: State) -> Option<u8> {
        use transition_ids::*;
        match self {
            Transition::Create => Some(TRANSITION_CREATE),
            Transition::Configure => Some(TRANSITION_CONFIGURE),
            Transition::Cleanup => Some(TRANSITION_CLEANUP),
            Transition::Activate => Some(TRANSITION_ACTIVATE),
            Transition::Deactivate => Some(TRANSITION_DEACTIVATE),
            Transition::Shutdown => shutdown_request_id_for_state(start),
            Transition::Destroy => Some(TRANSITION_DESTROY),
        }
    }

    /// Intermediate state entered while this transition's callback runs.
    ///
    /// Create and Destroy are not callback-gated and have no intermediate state.
    pub const fn transient_state(self) -> Option<State> {
        match self {
            Transition::Configure => Some(State::Configuring),
            Transition::Cleanup => Some(State::CleaningUp),
            Transition::Activate => Some(State::Activating),
            Transition::Deactivate => Some(State::Deactivating),
            Transition::Shutdown => Some(State::ShuttingDown),
            Transition::Create | Transition::Destroy => None,
        }
    }

    /// Resolve a callback outcome to (goal state, synthesized resolution id).
    ///
    /// Cleanup, Deactivate and Shutdown declare no failure path: a Failure
    /// outcome routes to `ErrorProcessing` with the action's error id.
    pub const fn resolution(self, outcome: TransitionOutcome) -> Option<(State, Resolution)> {
        use transition_ids::*;
        use TransitionOutcome::*;
        match (self, outcome) {
            (Transition::Configure, Success) => Some((
                State::Inactive,
                Resolution {
                    id: TRANSITION_ON_CONFIGURE_SUCCESS,
                    label: "on_configure_success",
                },
            )),
            (Transition::Configure, Failure) => Some((
                State::Unconfigured,
                Resolution {
                    id: TRANSITION_ON_CONFIGURE_FAILURE,
                    label: "on_configure_failure",
                },
            )),
            (Transition::Configure, Error) => Some((
                State::ErrorProcessing,
                Resolution {
                    id: TRANSITION_ON_CONFIGURE_ERROR,
                    label: "on_configure_error",
                },
            )),

            (Transition::Cleanup, Success) => Some((
                State::Unconfigured,
                Resolution {
                    id: TRANSITION_ON_CLEANUP_SUCCESS,
                    label: "on_cleanup_success",
                },
            )),
            (Transition::Cleanup, Failure | Error) => Some((
                State::ErrorProcessing,
                Resolution {
                    id: TRANSITION_ON_CLEANUP_ERROR,
                    label: "on_cleanup_error",
                },
            )),

            (Transition::Activate, Success) => Some((
                State::Active,
                Resolution {
                    id: TRANSITION_ON_ACTIVATE_SUCCESS,
                    label: "on_activate_success",
                },
            )),
            (Transition::Activate, Failure) => Some((
                State::Inactive,
                Resolution {
                    id: TRANSITION_ON_ACTIVATE_FAILURE,
                    label: "on_activate_failure",
                },
            )),
            (Transition::Activate, Error) => Some((
                State::ErrorProcessing,
                Resolution {
                    id: TRANSITION_ON_ACTIVATE_ERROR,
                    label: "on_activate_error",
                },
            )),

            (Transition::Deactivate, Success) => Some((
                State::Inactive,
                Resolution {
                    id: TRANSITION_ON_DEACTIVATE_SUCCESS,
                    label: "on_deactivate_success",
                },
            )),
            (Transition::Deactivate, Failure | Error) => Some((
                State::ErrorProcessing,
                Resolution {
                    id: TRANSITION_ON_DEACTIVATE_ERROR,
                    label: "on_deactivate_error",
                },
            )),

            (Transition::Shutdown, Success) => Some((
                State::Finalized,
                Resolution {
                    id: TRANSITION_ON_SHUTDOWN_SUCCESS,
                    label: "on_shutdown_success",
                },
            )),
            (Transition::Shutdown, Failure | Error) => Some((
                State::ErrorProcessing,
                Resolution {
                    id: TRANSITION_ON_SHUTDOWN_ERROR,
                    label: "on_shutdown_error",
                },
            )),

            (Transition::Create | Transition::Destroy, _) => None,
        }
    }
}

/// Correct label-distinct shutdown request id for a given stable state.
pub const fn shutdown_request_id_for_state(state: State) -> Option<u8> {
    use transition_ids::*;
    match state {
        State::Unconfigured => Some(TRANSITION_UNCONFIGURED_SHUTDOWN),
        State::Inactive => Some(TRANSITION_INACTIVE_SHUTDOWN),
        State::Active => Some(TRANSITION_ACTIVE_SHUTDOWN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_round_trips_shutdown_variants() {
        for id in [
            transition_ids::TRANSITION_UNCONFIGURED_SHUTDOWN,
            transition_ids::TRANSITION_INACTIVE_SHUTDOWN,
            transition_ids::TRANSITION_ACTIVE_SHUTDOWN,
        ] {
            assert_eq!(Transition::from_request_id(id), Some(Transition::Shutdown));
        }
        assert_eq!(Transition::from_request_id(200), None);
    }

    #[test]
    fn shutdown_id_is_selected_by_start_state() {
        assert_eq!(
            Transition::Shutdown.request_id(State::Unconfigured),
            Some(transition_ids::TRANSITION_UNCONFIGURED_SHUTDOWN)
        );
        assert_eq!(
            Transition::Shutdown.request_id(State::Inactive),
            Some(transition_ids::TRANSITION_INACTIVE_SHUTDOWN)
        );
        assert_eq!(
            Transition::Shutdown.request_id(State::Active),
            Some(transition_ids::TRANSITION_ACTIVE_SHUTDOWN)
        );
        assert_eq!(Transition::Shutdown.request_id(State::Finalized), None);
        assert_eq!(Transition::Shutdown.request_id(State::Configuring), None);
    }

    #[test]
    fn activate_error_resolves_with_activate_specific_id() {
        let (goal, resolution) = Transition::Activate
            .resolution(TransitionOutcome::Error)
            .expect("activate resolves");
        assert_eq!(goal, State::ErrorProcessing);
        assert_eq!(resolution.id, transition_ids::TRANSITION_ON_ACTIVATE_ERROR);
        assert_eq!(resolution.label, "on_activate_error");
    }

    #[test]
    fn actions_without_failure_path_route_failure_to_error_processing() {
        for transition in [
            Transition::Cleanup,
            Transition::Deactivate,
            Transition::Shutdown,
        ] {
            let (goal, resolution) = transition
                .resolution(TransitionOutcome::Failure)
                .expect("callback actions resolve");
            assert_eq!(goal, State::ErrorProcessing);
            assert!(resolution.label.ends_with("_error"));
        }
    }

    #[test]
    fn create_and_destroy_have_no_callback_resolution() {
        for transition in [Transition::Create, Transition::Destroy] {
            assert_eq!(transition.transient_state(), None);
            assert_eq!(transition.resolution(TransitionOutcome::Success), None);
        }
    }
}
