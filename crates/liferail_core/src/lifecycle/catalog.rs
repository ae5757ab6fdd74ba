use super::transition::transition_ids;
use super::{State, Transition, ALL_STATES};

/// A declared legal edge: (transition id + label, start state, goal state).
///
/// The goal state here is the declared end of a *successful* transition; the
/// engine routes failures and errors through the resolution table instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionDescription {
    pub transition_id: u8,
    pub transition_label: &'static str,
    pub start_state: State,
    pub goal_state: State,
}

const fn edge(
    transition_id: u8,
    transition: Transition,
    start_state: State,
    goal_state: State,
) -> TransitionDescription {
    TransitionDescription {
        transition_id,
        transition_label: transition.label(),
        start_state,
        goal_state,
    }
}

/// The 8 declared edges, in catalog construction order.
///
/// Built once, immutable, safe for concurrent reads. Destroy is deliberately
/// absent: it tears the component down and declares no goal state.
pub const TRANSITION_CATALOG: [TransitionDescription; 8] = [
    edge(
        transition_ids::TRANSITION_CREATE,
        Transition::Create,
        State::Unknown,
        State::Unconfigured,
    ),
    edge(
        transition_ids::TRANSITION_CONFIGURE,
        Transition::Configure,
        State::Unconfigured,
        State::Inactive,
    ),
    edge(
        transition_ids::TRANSITION_ACTIVATE,
        Transition::Activate,
        State::Inactive,
        State::Active,
    ),
    edge(
        transition_ids::TRANSITION_DEACTIVATE,
        Transition::Deactivate,
        State::Active,
        State::Inactive,
    ),
    edge(
        transition_ids::TRANSITION_UNCONFIGURED_SHUTDOWN,
        Transition::Shutdown,
        State::Unconfigured,
        State::Finalized,
    ),
    edge(
        transition_ids::TRANSITION_INACTIVE_SHUTDOWN,
        Transition::Shutdown,
        State::Inactive,
        State::Finalized,
    ),
    edge(
        transition_ids::TRANSITION_ACTIVE_SHUTDOWN,
        Transition::Shutdown,
        State::Active,
        State::Finalized,
    ),
    edge(
        transition_ids::TRANSITION_CLEANUP,
        Transition::Cleanup,
        State::Inactive,
        State::Unconfigured,
    ),
];

/// All lifecycle states, in fixed construction order. Pure data, no failure modes.
pub fn available_states() -> &'static [State] {
    &ALL_STATES
}

/// The declared transition edges, in fixed construction order.
///
/// This is the introspection view: the same table regardless of the component's
/// current runtime state.
pub fn available_transitions() -> &'static [TransitionDescription] {
    &TRANSITION_CATALOG
}

/// True when `(transition_id, start)` is a declared legal edge.
pub(crate) fn is_declared_edge(transition_id: u8, start: State) -> bool {
    TRANSITION_CATALOG
        .iter()
        .any(|d| d.transition_id == transition_id && d.start_state == start)
}
