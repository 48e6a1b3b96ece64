//! Registration action kinds

use super::errors::AuditError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of registration-affecting actions that get audited
///
/// Stored in clear so the log can be filtered and reported on without
/// decryption.
///
/// # Examples
///
/// ```
/// use edital_audit::domain::ActionKind;
/// use std::str::FromStr;
///
/// let kind = ActionKind::from_str("CANCEL_BY_ADMIN").unwrap();
/// assert_eq!(kind, ActionKind::CancelByAdmin);
///
/// assert!(ActionKind::from_str("DELETE").is_err());
/// assert!(ActionKind::from_str("INSCRICAO").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// A user submitted a registration against an edital
    Registration,
    /// The registrant cancelled their own registration
    CancelByUser,
    /// An administrator cancelled the registration
    CancelByAdmin,
    /// The evaluation committee cancelled the registration
    CancelByCommittee,
}

impl ActionKind {
    /// All action kinds, in declaration order
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Registration,
        ActionKind::CancelByUser,
        ActionKind::CancelByAdmin,
        ActionKind::CancelByCommittee,
    ];

    /// Canonical stored name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Registration => "REGISTRATION",
            ActionKind::CancelByUser => "CANCEL_BY_USER",
            ActionKind::CancelByAdmin => "CANCEL_BY_ADMIN",
            ActionKind::CancelByCommittee => "CANCEL_BY_COMMITTEE",
        }
    }

    /// Returns true for every kind except [`ActionKind::Registration`]
    pub fn is_cancellation(&self) -> bool {
        !matches!(self, ActionKind::Registration)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact match only; "registration" is not "REGISTRATION".
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AuditError::InvalidActionKind(s.to_string()))
    }
}
