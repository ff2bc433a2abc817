//! Mistake bound.

use super::Invariant;
use crate::{GameSession, MAX_INCORRECT};

/// Invariant: the mistake count never exceeds [`MAX_INCORRECT`].
pub struct MistakesBoundedInvariant;

impl Invariant<GameSession> for MistakesBoundedInvariant {
    fn holds(session: &GameSession) -> bool {
        session.mistake_count() <= MAX_INCORRECT
    }

    fn description() -> &'static str {
        "Mistake count stays within MAX_INCORRECT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Letter;

    #[test]
    fn test_holds_after_guessing_past_the_limit() {
        let mut session = GameSession::new("a").unwrap();
        for letter in Letter::all().skip(1) {
            session.guess(letter);
            assert!(MistakesBoundedInvariant::holds(&session));
        }
        assert_eq!(session.mistake_count(), MAX_INCORRECT);
    }

    #[test]
    fn test_overflow_violates() {
        let mut session = GameSession::new("a").unwrap();
        session.mistakes = MAX_INCORRECT + 1;
        assert!(!MistakesBoundedInvariant::holds(&session));
    }
}
