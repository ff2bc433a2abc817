//! Status agrees with the mask and the mistake count.

use super::Invariant;
use crate::{GameSession, MAX_INCORRECT, SessionStatus};

/// Invariant: `Won` exactly when the mask is complete, `Lost` exactly when
/// the mistake limit was hit first, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let complete = session.mask().is_complete();
        let expected = if complete {
            SessionStatus::Won
        } else if session.mistake_count() >= MAX_INCORRECT {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        };
        session.status() == expected
    }

    fn description() -> &'static str {
        "Status matches mask completion and mistake count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Letter;

    #[test]
    fn test_won_session_holds() {
        let mut session = GameSession::new("ox").unwrap();
        session.guess(Letter::try_from('o').unwrap());
        session.guess(Letter::try_from('x').unwrap());
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_premature_won_violates() {
        let mut session = GameSession::new("ox").unwrap();
        session.status = SessionStatus::Won;
        assert!(!StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_missing_lost_violates() {
        let mut session = GameSession::new("ox").unwrap();
        session.mistakes = MAX_INCORRECT;
        assert!(!StatusConsistentInvariant::holds(&session));
    }
}
