//! Kani proof harnesses for the session invariants.
//!
//! Guesses are drawn from the whole alphabet for a bounded number of turns.

#[cfg(kani)]
mod proofs {
    use crate::{GameSession, GuessOutcome, HangmanInvariants, InvariantSet, Letter};

    fn any_letter() -> Letter {
        let index: usize = kani::any();
        kani::assume(index < 26);
        match Letter::from_index(index) {
            Some(letter) => letter,
            None => unreachable!(),
        }
    }

    /// Proves every invariant holds after any 8 guesses on a short word.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_invariants_over_guesses() {
        let Ok(mut session) = GameSession::new("abc") else {
            unreachable!()
        };

        for _ in 0..8 {
            session.guess(any_letter());
            assert!(HangmanInvariants::check_all(&session).is_ok());
        }
    }

    /// Proves a terminal session ignores every further guess.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_terminal_is_absorbing() {
        let Ok(mut session) = GameSession::new("ab") else {
            unreachable!()
        };

        for _ in 0..8 {
            let was_terminal = session.status().is_terminal();
            let mask = session.current_mask_text();
            let outcome = session.guess(any_letter());
            if was_terminal {
                assert_eq!(outcome, GuessOutcome::Ignored);
                assert_eq!(session.current_mask_text(), mask);
            }
        }
    }
}
