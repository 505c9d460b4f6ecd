//! State machine trait for status enums.

use std::fmt;

use super::{DomainError, ErrorCode};

/// Status enums whose changes follow a fixed set of transitions.
///
/// Re-applying the current state is modelled as a transition of its own so
/// that idempotent writes can be expressed as `(X, X)` pairs.
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug + fmt::Display {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {} to {}", self, target),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl fmt::Display for Light {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Light::Off => "off",
                Light::On => "on",
                Light::Broken => "broken",
            })
        }
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Light::*;
            matches!((self, target), (Off, On) | (On, Off) | (_, Broken))
        }
    }

    #[test]
    fn valid_transition_returns_target() {
        assert_eq!(Light::Off.transition_to(Light::On).unwrap(), Light::On);
    }

    #[test]
    fn invalid_transition_reports_both_states() {
        let err = Light::Broken.transition_to(Light::On).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(err.message, "Cannot transition from broken to on");
    }
}
