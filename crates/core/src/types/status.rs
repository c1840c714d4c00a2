//! Attendance status state machine.

use serde::{Deserialize, Serialize};

/// Status of an event registration.
///
/// Transitions are forward-only: `Registered` may move to `CheckedIn` or
/// `NoShow`; both of those are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Registered but not yet checked in.
    #[default]
    Registered,
    /// Attended and checked in at the event.
    CheckedIn,
    /// Registered but never showed up.
    NoShow,
}

impl RegistrationStatus {
    /// Whether a transition to `next` is allowed from this status.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Registered, Self::CheckedIn | Self::NoShow)
        )
    }

    /// Whether this status still awaits a check-in decision.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Registered)
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registered => write!(f, "registered"),
            Self::CheckedIn => write!(f, "checked_in"),
            Self::NoShow => write!(f, "no_show"),
        }
    }
}

impl std::str::FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(Self::Registered),
            "checked_in" => Ok(Self::CheckedIn),
            "no_show" => Ok(Self::NoShow),
            _ => Err(format!("invalid registration status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        use RegistrationStatus::{CheckedIn, NoShow, Registered};

        assert!(Registered.can_transition_to(CheckedIn));
        assert!(Registered.can_transition_to(NoShow));
    }

    #[test]
    fn test_terminal_states() {
        use RegistrationStatus::{CheckedIn, NoShow, Registered};

        assert!(!CheckedIn.can_transition_to(NoShow));
        assert!(!CheckedIn.can_transition_to(Registered));
        assert!(!NoShow.can_transition_to(CheckedIn));
        assert!(!NoShow.can_transition_to(Registered));
        assert!(!Registered.can_transition_to(Registered));
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for status in [
            RegistrationStatus::Registered,
            RegistrationStatus::CheckedIn,
            RegistrationStatus::NoShow,
        ] {
            let parsed: RegistrationStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&RegistrationStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked_in\"");
    }
}
