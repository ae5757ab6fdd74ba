//! Minimal lifecycle service DTOs.
//!
//! These are adapter-internal request/response types.
//! A transport layer maps its real message types into these.

/// ChangeState: request a lifecycle transition by wire id.
pub mod change_state {
    /// Request: wire transition id (see `liferail_core::lifecycle::transition_ids`).
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Request {
        pub transition_id: u8,
    }

    /// Response: success + human-readable message.
    ///
    /// success flattens rejected requests and callback failures alike to
    /// `false`; Destroy reports its guard result directly.
    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Response {
        pub success: bool,
        pub message: String,
    }
}

/// GetState: current state id + label.
pub mod get_state {
    /// Empty request.
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Request;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Response {
        pub state_id: u8,
        pub label: String,
    }
}

/// GetAvailableStates: the full 11-entry state catalog.
pub mod get_available_states {
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Request;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct State {
        pub id: u8,
        pub label: String,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Response {
        pub states: Vec<State>,
    }
}

/// GetAvailableTransitions: the declared 8-entry edge catalog.
pub mod get_available_transitions {
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Request;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct State {
        pub id: u8,
        pub label: String,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Transition {
        pub id: u8,
        pub label: String,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TransitionDescription {
        pub transition: Transition,
        pub start_state: State,
        pub goal_state: State,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Response {
        pub transitions: Vec<TransitionDescription>,
    }
}
