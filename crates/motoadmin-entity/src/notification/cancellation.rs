//! Cancellation workflow state machine.
//!
//! A cancellation-requested notification opens a confirmation prompt. The
//! operator's decision only issues a backend command; the visible state
//! change arrives later as a push `update` event rewriting the entry's kind.
//! There is deliberately no local transition on the button press, so the
//! backend stays the single authority over the outcome.

use serde::{Deserialize, Serialize};

use motoadmin_core::error::AppError;

use super::kind::NotificationKind;

/// Operator decision on a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationAction {
    /// Approve the cancellation.
    Accept,
    /// Decline the cancellation.
    Reject,
}

impl CancellationAction {
    /// Return the action as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for CancellationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a notification sits in the cancellation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationState {
    /// Not part of a cancellation workflow.
    Idle,
    /// The customer asked to cancel; awaiting an operator decision.
    Requested,
    /// The cancellation was accepted.
    Accepted,
    /// The cancellation was rejected.
    Rejected,
}

impl CancellationState {
    /// Derive the workflow state from a notification kind.
    pub fn from_kind(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::CancellationRequested => Self::Requested,
            NotificationKind::CancellationAccepted => Self::Accepted,
            NotificationKind::CancellationRejected => Self::Rejected,
            NotificationKind::Order | NotificationKind::Appointment => Self::Idle,
        }
    }

    /// Whether an operator decision is valid from this state.
    pub fn can_decide(&self) -> bool {
        matches!(self, Self::Requested)
    }

    /// Validate an operator decision against the current state.
    ///
    /// Returns the state the backend is expected to move the notification
    /// to. The caller must not apply it locally; the transition becomes
    /// visible only through the push channel.
    pub fn decide(&self, action: CancellationAction) -> Result<Self, AppError> {
        if !self.can_decide() {
            return Err(AppError::validation(format!(
                "Cannot {action} a cancellation in state {self:?}"
            )));
        }
        Ok(match action {
            CancellationAction::Accept => Self::Accepted,
            CancellationAction::Reject => Self::Rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_derives_from_kind() {
        assert_eq!(
            CancellationState::from_kind(NotificationKind::CancellationRequested),
            CancellationState::Requested
        );
        assert_eq!(
            CancellationState::from_kind(NotificationKind::Order),
            CancellationState::Idle
        );
    }

    #[test]
    fn test_decision_only_valid_from_requested() {
        let requested = CancellationState::Requested;
        assert_eq!(
            requested.decide(CancellationAction::Accept).unwrap(),
            CancellationState::Accepted
        );
        assert_eq!(
            requested.decide(CancellationAction::Reject).unwrap(),
            CancellationState::Rejected
        );

        assert!(CancellationState::Idle.decide(CancellationAction::Accept).is_err());
        assert!(CancellationState::Accepted.decide(CancellationAction::Reject).is_err());
    }
}
