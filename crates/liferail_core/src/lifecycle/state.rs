/// Lifecycle primary + transition (intermediate) states.
///
/// Primary (stable) states:
/// - Unknown, Unconfigured, Inactive, Active, Finalized
///
/// Transition (intermediate) states:
/// - Configuring, CleaningUp, ShuttingDown, Activating, Deactivating, ErrorProcessing
///
/// A component is parked in a primary state between transitions and sits in
/// exactly one transition state only while a callback is executing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    // Primary
    Unknown,
    Unconfigured,
    Inactive,
    Active,
    Finalized,

    // Transition (intermediate)
    Configuring,
    CleaningUp,
    ShuttingDown,
    Activating,
    Deactivating,
    ErrorProcessing,
}

impl State {
    /// Stable wire id, shared with external controllers.
    pub const fn id(self) -> u8 {
        match self {
            // Primary
            State::Unknown => 0,
            State::Unconfigured => 1,
            State::Inactive => 2,
            State::Active => 3,
            State::Finalized => 4,

            // Transition
            State::Configuring => 10,
            State::CleaningUp => 11,
            State::ShuttingDown => 12,
            State::Activating => 13,
            State::Deactivating => 14,
            State::ErrorProcessing => 15,
        }
    }

    /// Inverse of [`State::id`].
    pub const fn from_id(id: u8) -> Option<State> {
        match id {
            0 => Some(State::Unknown),
            1 => Some(State::Unconfigured),
            2 => Some(State::Inactive),
            3 => Some(State::Active),
            4 => Some(State::Finalized),
            10 => Some(State::Configuring),
            11 => Some(State::CleaningUp),
            12 => Some(State::ShuttingDown),
            13 => Some(State::Activating),
            14 => Some(State::Deactivating),
            15 => Some(State::ErrorProcessing),
            _ => None,
        }
    }

    /// True for stable (at-rest) states.
    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            State::Unknown
                | State::Unconfigured
                | State::Inactive
                | State::Active
                | State::Finalized
        )
    }

    /// True for intermediate states entered while callbacks are running.
    pub const fn is_transitioning(self) -> bool {
        !self.is_primary()
    }

    /// Stable, human-readable label. Built statically; no runtime reflection.
    pub const fn label(self) -> &'static str {
        match self {
            State::Unknown => "Unknown",
            State::Unconfigured => "Unconfigured",
            State::Inactive => "Inactive",
            State::Active => "Active",
            State::Finalized => "Finalized",
            State::Configuring => "Configuring",
            State::CleaningUp => "CleaningUp",
            State::ShuttingDown => "ShuttingDown",
            State::Activating => "Activating",
            State::Deactivating => "Deactivating",
            State::ErrorProcessing => "ErrorProcessing",
        }
    }
}

/// Canonical list of all lifecycle states, in catalog construction order.
pub const ALL_STATES: [State; 11] = [
    State::Unknown,
    State::Unconfigured,
    State::Inactive,
    State::Active,
    State::Finalized,
    State::Configuring,
    State::CleaningUp,
    State::ShuttingDown,
    State::Activating,
    State::Deactivating,
    State::ErrorProcessing,
];
