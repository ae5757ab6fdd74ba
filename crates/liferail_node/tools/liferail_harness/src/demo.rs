use liferail_core::lifecycle::{
    shutdown_request_id_for_state, transition_ids, LifecycleCallbacks, State, TransitionOutcome,
};
use tracing::info;

/// Demo callbacks: log each hook and report the scripted outcome.
///
/// `fail_on` / `error_on` name the action whose callback reports Failure or
/// Error; everything else succeeds.
pub struct DemoCallbacks {
    pub fail_on: Option<String>,
    pub error_on: Option<String>,
}

impl DemoCallbacks {
    fn outcome(&self, action: &str) -> TransitionOutcome {
        info!("{action} callback running");
        if self.error_on.as_deref() == Some(action) {
            TransitionOutcome::Error
        } else if self.fail_on.as_deref() == Some(action) {
            TransitionOutcome::Failure
        } else {
            TransitionOutcome::Success
        }
    }
}

impl LifecycleCallbacks for DemoCallbacks {
    fn on_configure(&mut self) -> TransitionOutcome {
        self.outcome("configure")
    }
    fn on_cleanup(&mut self) -> TransitionOutcome {
        self.outcome("cleanup")
    }
    fn on_activate(&mut self) -> TransitionOutcome {
        self.outcome("activate")
    }
    fn on_deactivate(&mut self) -> TransitionOutcome {
        self.outcome("deactivate")
    }
    fn on_shutdown(&mut self) -> TransitionOutcome {
        self.outcome("shutdown")
    }
}

/// Map a script step name to a wire transition id.
///
/// Shutdown picks the label-distinct variant for the current state.
pub fn transition_id_for(step: &str, current: State) -> Option<u8> {
    match step {
        "create" => Some(transition_ids::TRANSITION_CREATE),
        "configure" => Some(transition_ids::TRANSITION_CONFIGURE),
        "cleanup" => Some(transition_ids::TRANSITION_CLEANUP),
        "activate" => Some(transition_ids::TRANSITION_ACTIVATE),
        "deactivate" => Some(transition_ids::TRANSITION_DEACTIVATE),
        "shutdown" => shutdown_request_id_for_state(current),
        "destroy" => Some(transition_ids::TRANSITION_DESTROY),
        _ => None,
    }
}
