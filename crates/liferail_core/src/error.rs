use std::borrow::Cow;
use thiserror::Error;

/// Convenient result alias for liferail_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Maps cleanly onto logging levels in adapter layers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Where an error came from (helps triage and routing).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    Lifecycle,
    Events,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    InvalidTransition,
    Other,
}

/// Optional structured payload for rich context without forcing allocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Lifecycle-specific context: current state id + requested transition id.
    RejectedTransition { state_id: u8, transition_id: u8 },
}

/// The one error type that crosses module boundaries in liferail.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    // ---------------- Fluent entry points ----------------

    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }

    /// Construct a lifecycle rejected-request error with structured context.
    pub fn rejected_transition(state_id: u8, transition_id: u8) -> Self {
        CoreError::warn()
            .domain(Domain::Lifecycle)
            .kind(ErrorKind::InvalidTransition)
            .msg("transition not legal from current state")
            .payload(Payload::RejectedTransition {
                state_id,
                transition_id,
            })
            .build()
    }
}

/// Fluent builder that behaves like iterator chains (takes self, returns Self).
/// Defaults:
/// - domain = Other
/// - kind = Other
/// - message = ""
/// - payload = None
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    /// Set/override the domain (defaults to Domain::Other).
    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    /// Set/override the kind (defaults to ErrorKind::Other).
    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    /// Set/override the message (defaults to "").
    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    /// Only one payload: this replaces any previous payload (default is None).
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_transition_carries_payload() {
        let e = CoreError::rejected_transition(3, 1);
        assert_eq!(e.domain, Domain::Lifecycle);
        assert_eq!(e.kind, ErrorKind::InvalidTransition);
        assert_eq!(e.severity, Severity::Warn);
        match e.payload {
            Payload::RejectedTransition {
                state_id,
                transition_id,
            } => {
                assert_eq!(state_id, 3);
                assert_eq!(transition_id, 1);
            }
            _ => panic!("expected RejectedTransition payload"),
        }
    }

    #[test]
    fn builder_defaults_are_other() {
        let e = CoreError::error().msg("boom").build();
        assert_eq!(e.domain, Domain::Other);
        assert_eq!(e.kind, ErrorKind::Other);
        assert_eq!(e.to_string(), "Error: boom");
    }
}
