//! The hangman state machine.
//!
//! ```text
//! InProgress --correct, completes word-----> Won   (terminal)
//! InProgress --incorrect, hits MAX_INCORRECT-> Lost (terminal)
//! InProgress --otherwise--------------------> InProgress
//! Won, Lost  --any guess--------------------> unchanged (Ignored)
//! ```

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::contracts::{Contract, GuessContract};
use crate::figure::FigureStage;
use crate::letter::{Letter, LetterError};
use crate::mask::RevealMask;
use crate::password::{Password, ValidationError};
use crate::rules::MAX_INCORRECT;

/// Overall state of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum SessionStatus {
    /// Guesses are accepted.
    #[default]
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every letter was revealed.
    #[strum(to_string = "won")]
    Won,
    /// The mistake limit was reached.
    #[strum(to_string = "lost")]
    Lost,
}

impl SessionStatus {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of a single guess.
///
/// An incorrect guess is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The letter occurs at least once in the word.
    Correct {
        /// Mask text after revealing every occurrence.
        updated_mask: String,
        /// True when this guess revealed the last hidden letter.
        won: bool,
    },
    /// The letter does not occur in the word.
    Incorrect {
        /// Mistakes so far, including this one.
        mistake_count: u8,
        /// True when this guess reached [`MAX_INCORRECT`].
        lost: bool,
    },
    /// The session was already over; nothing changed.
    Ignored,
}

impl GuessOutcome {
    /// True when this guess ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Correct { won: true, .. } | Self::Incorrect { lost: true, .. }
        )
    }
}

/// A single game: one secret word, guessed until won or lost.
///
/// Starting over means dropping the session and building a new one; nothing
/// carries across sessions.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The secret word.
    pub(crate) password: Password,
    /// Revealed letters so far.
    pub(crate) mask: RevealMask,
    #[getter(skip)]
    pub(crate) mistakes: u8,
    #[getter(skip)]
    pub(crate) status: SessionStatus,
}

impl GameSession {
    /// Validates `password` and starts a session with everything hidden.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reason when the password is rejected.
    /// No session exists in that case; the host should prompt again.
    #[instrument(skip(password), fields(len = password.len()))]
    pub fn new(password: &str) -> Result<Self, ValidationError> {
        Password::parse(password).map(Self::from_password)
    }

    /// Starts a session from an already validated password.
    #[instrument]
    pub fn from_password(password: Password) -> Self {
        info!(len = password.len(), "Starting new session");
        Self {
            mask: RevealMask::hidden(password.len()),
            password,
            mistakes: 0,
            status: SessionStatus::InProgress,
        }
    }

    /// Evaluates one guess.
    ///
    /// Every occurrence of `letter` is revealed, case preserved from the
    /// password. Guessing an already revealed letter is `Correct` again with
    /// an unchanged mask. A letter with no occurrence costs one mistake.
    /// After the session ends every guess returns [`GuessOutcome::Ignored`].
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if let Err(reason) = GuessContract::pre(self, &letter) {
            debug!(%reason, "Guess ignored");
            return GuessOutcome::Ignored;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = self.evaluate(letter);

        #[cfg(debug_assertions)]
        {
            let checked = GuessContract::post(&before, self);
            debug_assert!(checked.is_ok(), "Guess postcondition failed: {:?}", checked);
        }

        outcome
    }

    /// Like [`guess`](Self::guess) for a raw character.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError`] when `c` is not an ASCII letter; the session is
    /// untouched in that case.
    pub fn guess_char(&mut self, c: char) -> Result<GuessOutcome, LetterError> {
        Letter::try_from(c).map(|letter| self.guess(letter))
    }

    fn evaluate(&mut self, letter: Letter) -> GuessOutcome {
        let mut matched = 0usize;
        for (index, c) in self.password.as_str().chars().enumerate() {
            if letter.matches(c) {
                self.mask.reveal(index, c);
                matched += 1;
            }
        }

        if matched > 0 {
            let won = self.mask.is_complete();
            debug!(matched, hidden = self.mask.hidden_count(), "Correct guess");
            if won {
                self.status = SessionStatus::Won;
                info!(mistakes = self.mistakes, "Word revealed, session won");
            }
            GuessOutcome::Correct {
                updated_mask: self.mask.as_text(),
                won,
            }
        } else {
            self.mistakes += 1;
            let lost = self.mistakes >= MAX_INCORRECT;
            debug!(mistakes = self.mistakes, "Incorrect guess");
            if lost {
                self.status = SessionStatus::Lost;
                info!("Mistake limit reached, session lost");
            }
            GuessOutcome::Incorrect {
                mistake_count: self.mistakes,
                lost,
            }
        }
    }

    /// The mask as display text, e.g. `"c*t"`.
    pub fn current_mask_text(&self) -> String {
        self.mask.as_text()
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The secret word in its original casing, for end-of-game messages.
    pub fn revealed_password(&self) -> &str {
        self.password.as_str()
    }

    /// Incorrect guesses so far.
    pub fn mistake_count(&self) -> u8 {
        self.mistakes
    }

    /// Incorrect guesses left before the session is lost.
    pub fn remaining_attempts(&self) -> u8 {
        MAX_INCORRECT.saturating_sub(self.mistakes)
    }

    /// Illustration matching the current state.
    pub fn figure_stage(&self) -> FigureStage {
        match self.status {
            SessionStatus::InProgress => FigureStage::Gallows(self.mistakes),
            SessionStatus::Won => FigureStage::Won,
            SessionStatus::Lost => FigureStage::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn test_new_session_is_hidden() {
        let session = GameSession::new("Rust").unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.current_mask_text(), "****");
        assert_eq!(session.mistake_count(), 0);
        assert_eq!(session.figure_stage(), FigureStage::Gallows(0));
    }

    #[test]
    fn test_guess_preserves_password_case() {
        let mut session = GameSession::new("Banana").unwrap();
        let outcome = session.guess(letter('B'));
        assert_eq!(
            outcome,
            GuessOutcome::Correct {
                updated_mask: "B*****".to_string(),
                won: false
            }
        );
        session.guess(letter('a'));
        assert_eq!(session.current_mask_text(), "Ba*a*a");
    }

    #[test]
    fn test_incorrect_guess_advances_figure() {
        let mut session = GameSession::new("dog").unwrap();
        let outcome = session.guess(letter('x'));
        assert_eq!(
            outcome,
            GuessOutcome::Incorrect {
                mistake_count: 1,
                lost: false
            }
        );
        assert_eq!(session.current_mask_text(), "***");
        assert_eq!(session.figure_stage(), FigureStage::Gallows(1));
        assert_eq!(session.remaining_attempts(), 5);
    }

    #[test]
    fn test_guess_char_rejects_non_letter() {
        let mut session = GameSession::new("dog").unwrap();
        assert_eq!(session.guess_char('7'), Err(LetterError::NotAlphabetic('7')));
        assert_eq!(session.mistake_count(), 0);
    }

    #[test]
    fn test_lost_figure_stage() {
        let mut session = GameSession::new("a").unwrap();
        for c in "bcdefg".chars() {
            session.guess(letter(c));
        }
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.figure_stage(), FigureStage::Lost);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionStatus::InProgress.to_string(), "in progress");
        assert_eq!(SessionStatus::Won.to_string(), "won");
    }
}
