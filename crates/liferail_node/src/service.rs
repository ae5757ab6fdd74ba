use std::sync::{Arc, Mutex, MutexGuard};

use liferail_core::lifecycle::StateCell;
use tracing::warn;

use crate::dtos;
use crate::node::{states_response, transitions_response, LifecycleNode};

/// Single-flight lifecycle service façade.
///
/// Owns a shared `LifecycleNode` and exposes the handlers a transport
/// registers. ChangeState serializes on the node: a second concurrent request
/// blocks until the in-flight transition (callback included) completes.
/// Introspection reads the atomic state snapshot and the static catalogs and
/// never takes the transition lock.
pub struct LifecycleService {
    node: Arc<Mutex<LifecycleNode>>,
    state_cell: Arc<StateCell>,
}

impl LifecycleService {
    pub fn new(node: Arc<Mutex<LifecycleNode>>) -> Self {
        let state_cell = lock_node(&node).state_cell();
        Self { node, state_cell }
    }

    /// ChangeState: blocks the caller for the whole transition.
    pub fn handle_change_state(
        &self,
        req: dtos::change_state::Request,
    ) -> dtos::change_state::Response {
        lock_node(&self.node).handle_change_state(req)
    }

    /// GetState: lock-free snapshot read; may trail an in-flight transition by
    /// one step but never blocks behind it.
    pub fn handle_get_state(&self, _req: dtos::get_state::Request) -> dtos::get_state::Response {
        let state = self.state_cell.load();
        dtos::get_state::Response {
            state_id: state.id(),
            label: state.label().to_string(),
        }
    }

    /// GetAvailableStates: static catalog, no lock.
    pub fn handle_get_available_states(
        &self,
        _req: dtos::get_available_states::Request,
    ) -> dtos::get_available_states::Response {
        states_response()
    }

    /// GetAvailableTransitions: static catalog, no lock.
    pub fn handle_get_available_transitions(
        &self,
        _req: dtos::get_available_transitions::Request,
    ) -> dtos::get_available_transitions::Response {
        transitions_response()
    }
}

fn lock_node(node: &Arc<Mutex<LifecycleNode>>) -> MutexGuard<'_, LifecycleNode> {
    match node.lock() {
        Ok(guard) => guard,
        Err(poison) => {
            warn!("lifecycle node mutex poisoned");
            poison.into_inner()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liferail_core::lifecycle::{
        transition_ids, LifecycleCallbacks, State, TransitionOutcome,
    };
    use std::sync::mpsc;
    use std::thread;

    struct OkCallbacks;
    impl LifecycleCallbacks for OkCallbacks {}

    fn service() -> LifecycleService {
        let node = Arc::new(Mutex::new(
            LifecycleNode::new("test_component", Box::new(OkCallbacks)).expect("valid node"),
        ));
        LifecycleService::new(node)
    }

    #[test]
    fn change_state_and_snapshot_agree() {
        let svc = service();

        let resp = svc.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CREATE,
        });
        assert!(resp.success);

        let resp = svc.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_CONFIGURE,
        });
        assert!(resp.success);

        let state = svc.handle_get_state(dtos::get_state::Request);
        assert_eq!(state.state_id, State::Inactive.id());
        assert_eq!(state.label, "Inactive");
    }

    #[test]
    fn rejected_request_leaves_snapshot_untouched() {
        let svc = service();

        let resp = svc.handle_change_state(dtos::change_state::Request {
            transition_id: transition_ids::TRANSITION_ACTIVATE,
        });
        assert!(!resp.success);

        let state = svc.handle_get_state(dtos::get_state::Request);
        assert_eq!(state.state_id, State::Unknown.id());
    }

    #[test]
    fn introspection_answers_while_a_callback_is_blocked() {
        struct BlockingCallbacks {
            entered: mpsc::Sender<()>,
            release: mpsc::Receiver<()>,
        }
        impl LifecycleCallbacks for BlockingCallbacks {
            fn on_configure(&mut self) -> TransitionOutcome {
                let _ = self.entered.send(());
                let _ = self.release.recv();
                TransitionOutcome::Success
            }
        }

        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let node = Arc::new(Mutex::new(
            LifecycleNode::new(
                "test_component",
                Box::new(BlockingCallbacks {
                    entered: entered_tx,
                    release: release_rx,
                }),
            )
            .expect("valid node"),
        ));
        let svc = Arc::new(LifecycleService::new(node));

        assert!(
            svc.handle_change_state(dtos::change_state::Request {
                transition_id: transition_ids::TRANSITION_CREATE,
            })
            .success
        );

        let worker = {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                svc.handle_change_state(dtos::change_state::Request {
                    transition_id: transition_ids::TRANSITION_CONFIGURE,
                })
            })
        };
        entered_rx.recv().expect("configure callback entered");

        // Transition is in flight and its callback is parked; introspection
        // must still answer.
        let state = svc.handle_get_state(dtos::get_state::Request);
        assert_eq!(state.state_id, State::Configuring.id());
        let states = svc.handle_get_available_states(dtos::get_available_states::Request);
        assert_eq!(states.states.len(), 11);
        let transitions =
            svc.handle_get_available_transitions(dtos::get_available_transitions::Request);
        assert_eq!(transitions.transitions.len(), 8);

        release_tx.send(()).expect("release callback");
        assert!(worker.join().expect("worker thread").success);
        assert_eq!(
            svc.handle_get_state(dtos::get_state::Request).state_id,
            State::Inactive.id()
        );
    }

    #[test]
    fn catalog_queries_report_full_tables() {
        let svc = service();
        let states = svc.handle_get_available_states(dtos::get_available_states::Request);
        let transitions =
            svc.handle_get_available_transitions(dtos::get_available_transitions::Request);

        assert_eq!(states.states.len(), 11);
        assert_eq!(transitions.transitions.len(), 8);
        assert!(transitions.transitions.iter().any(|t| {
            t.transition.label == "configure"
                && t.start_state.label == "Unconfigured"
                && t.goal_state.label == "Inactive"
        }));
    }
}
