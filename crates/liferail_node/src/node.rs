use std::sync::Arc;

use liferail_core::error::{CoreError, Domain, ErrorKind, Result};
use liferail_core::lifecycle::{
    available_states, available_transitions, State, StateCell, Transition, TransitionEngine,
    TransitionOutcome,
};
use liferail_core::lifecycle::{LifecycleCallbacks, TransitionEvent};
use tokio::sync::broadcast;

use crate::dtos;
use crate::error::log_core_error;
use crate::events::BroadcastSink;

/// Named lifecycle component adapter.
///
/// Responsibilities:
/// - Own the transition engine (and with it the current state)
/// - Hold the user's callback implementation via the engine
/// - Provide a transition-event stream for transport layers to republish
/// - Expose DTO handlers for the four inbound lifecycle operations
pub struct LifecycleNode {
    name: String,
    engine: TransitionEngine,
    transition_events: broadcast::Sender<TransitionEvent>,
}

impl std::fmt::Debug for LifecycleNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleNode")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl LifecycleNode {
    /// Create a new component adapter. Starts in `Unknown`; the host issues
    /// an explicit Create request to reach Unconfigured.
    pub fn new(
        name: impl Into<String>,
        callbacks: Box<dyn LifecycleCallbacks + Send>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::error()
                .domain(Domain::Lifecycle)
                .kind(ErrorKind::InvalidArgument)
                .msg("component name must not be empty")
                .build());
        }

        let (transition_events, _rx) = broadcast::channel(32);
        let sink = BroadcastSink::new(transition_events.clone());
        let engine = TransitionEngine::new(callbacks, Box::new(sink));

        Ok(Self {
            name,
            engine,
            transition_events,
        })
    }

    /// Component name (for logging/introspection).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.engine.state()
    }

    /// Lock-free snapshot cell; readers never wait on an in-flight transition.
    pub fn state_cell(&self) -> Arc<StateCell> {
        self.engine.state_cell()
    }

    /// Subscribe to the transition-event stream.
    ///
    /// Transport layers republish these to external subscribers.
    pub fn subscribe_transition_events(&self) -> broadcast::Receiver<TransitionEvent> {
        self.transition_events.subscribe()
    }

    /// Handler for ChangeState.
    ///
    /// Blocks for the whole transition: the callback has returned and both
    /// events are emitted before the response exists.
    pub fn handle_change_state(&mut self, req: dtos::change_state::Request) -> dtos::change_state::Response {
        match Transition::from_request_id(req.transition_id) {
            Some(Transition::Destroy) => {
                let success = self.engine.destroy();
                let message = if success {
                    "destroy accepted; component teardown delegated to host".to_string()
                } else {
                    format!("destroy rejected from {:?}", self.state())
                };
                dtos::change_state::Response { success, message }
            }
            Some(_) => {
                let outcome = self.engine.request(req.transition_id);
                dtos::change_state::Response {
                    success: outcome == TransitionOutcome::Success,
                    message: format!("{outcome:?} -> {:?}", self.state()),
                }
            }
            None => {
                let err = CoreError::rejected_transition(self.state().id(), req.transition_id);
                log_core_error(&err);
                dtos::change_state::Response {
                    success: false,
                    message: err.to_string(),
                }
            }
        }
    }

    /// Handler for GetState.
    pub fn handle_get_state(&self, _req: dtos::get_state::Request) -> dtos::get_state::Response {
        let state = self.state();
        dtos::get_state::Response {
            state_id: state.id(),
            label: state.label().to_string(),
        }
    }

    /// Handler for GetAvailableStates: the full 11-entry catalog, independent
    /// of the current runtime state.
    pub fn handle_get_available_states(
        &self,
        _req: dtos::get_available_states::Request,
    ) -> dtos::get_available_states::Response {
        states_response()
    }

    /// Handler for GetAvailableTransitions: the declared 8-edge catalog,
    /// independent of the current runtime state.
    pub fn handle_get_available_transitions(
        &self,
        _req: dtos::get_available_transitions::Request,
    ) -> dtos::get_available_transitions::Response {
        transitions_response()
    }
}

/// Build the GetAvailableStates response from the static catalog.
///
/// Pure data, no node state involved; callers need not hold any lock.
pub(crate) fn states_response() -> dtos::get_available_states::Response {
    let states = available_states()
        .iter()
        .map(|s| dtos::get_available_states::State {
            id: s.id(),
            label: s.label().to_string(),
        })
        .collect();

    dtos::get_available_states::Response { states }
}

/// Build the GetAvailableTransitions response from the static catalog.
pub(crate) fn transitions_response() -> dtos::get_available_transitions::Response {
    let transitions = available_transitions()
        .iter()
        .map(|desc| dtos::get_available_transitions::TransitionDescription {
            transition: dtos::get_available_transitions::Transition {
                id: desc.transition_id,
                label: desc.transition_label.to_string(),
            },
            start_state: dtos::get_available_transitions::State {
                id: desc.start_state.id(),
                label: desc.start_state.label().to_string(),
            },
            goal_state: dtos::get_available_transitions::State {
                id: desc.goal_state.id(),
                label: desc.goal_state.label().to_string(),
            },
        })
        .collect();

    dtos::get_available_transitions::Response { transitions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liferail_core::lifecycle::transition_ids;

    struct OkCallbacks;
    impl LifecycleCallbacks for OkCallbacks {}

    fn node() -> LifecycleNode {
        LifecycleNode::new("test_component", Box::new(OkCallbacks)).expect("valid node")
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = LifecycleNode::new("", Box::new(OkCallbacks)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn change_state_walks_the_happy_path() {
        let mut node = node();

        for id in [
            transition_ids::TRANSITION_CREATE,
            transition_ids::TRANSITION_CONFIGURE,
            transition_ids::TRANSITION_ACTIVATE,
        ] {
            let resp = node.handle_change_state(dtos::change_state::Request { transition_id: id });
            assert!(resp.success, "transition {id} should succeed: {}", resp.message);
        }
        assert_eq!(node.state(), State::Active);
    }

    #[test]
    fn change_state_rejects_unknown_id_with_message() {
        let mut node = node();
        let resp = node.handle_change_state(dtos::change_state::Request { transition_id: 99 });
        assert!(!resp.success);
        assert!(!resp.message.is_empty());
        assert_eq!(node.state(), State::Unknown);
    }

    #[test]
    fn destroy_reports_guard_result() {
        let mut node = node();
        let destroy = dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_DESTROY,
        };

        assert!(!node.handle_change_state(destroy).success);

        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CREATE,
        });
        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_UNCONFIGURED_SHUTDOWN,
        });
        assert_eq!(node.state(), State::Finalized);

        assert!(node.handle_change_state(destroy).success);
    }

    #[test]
    fn get_state_reports_current_state() {
        let node = node();
        let resp = node.handle_get_state(dtos::get_state::Request);
        assert_eq!(resp.state_id, State::Unknown.id());
        assert_eq!(resp.label, "Unknown");
    }

    #[test]
    fn catalogs_are_state_independent() {
        let mut node = node();
        let states_before = node.handle_get_available_states(dtos::get_available_states::Request);
        let transitions_before =
            node.handle_get_available_transitions(dtos::get_available_transitions::Request);

        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CREATE,
        });
        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CONFIGURE,
        });

        assert_eq!(
            states_before,
            node.handle_get_available_states(dtos::get_available_states::Request)
        );
        assert_eq!(
            transitions_before,
            node.handle_get_available_transitions(dtos::get_available_transitions::Request)
        );
        assert_eq!(states_before.states.len(), 11);
        assert_eq!(transitions_before.transitions.len(), 8);
    }

    #[test]
    fn transition_events_reach_subscribers() {
        let mut node = node();
        let mut rx = node.subscribe_transition_events();

        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CREATE,
        });
        node.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CONFIGURE,
        });

        let ev = rx.try_recv().expect("create event");
        assert_eq!(ev.transition_label, "create");
        assert_eq!(ev.start_state, State::Unknown);
        assert_eq!(ev.goal_state, State::Unconfigured);

        let ev = rx.try_recv().expect("configure entry event");
        assert_eq!(ev.transition_label, "configure");
        assert_eq!(ev.goal_state, State::Configuring);

        let ev = rx.try_recv().expect("configure resolution event");
        assert_eq!(ev.transition_label, "on_configure_success");
        assert_eq!(ev.goal_state, State::Inactive);
    }
}
