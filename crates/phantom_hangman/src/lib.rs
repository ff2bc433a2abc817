//! Phantom Hangman - pure game logic.
//!
//! One player picks a secret word, the other guesses it a letter at a time.
//! This crate owns the whole state machine and nothing else: no terminal,
//! no images, no dialogs. A host drives it by building a [`GameSession`]
//! from a validated password and feeding it [`Letter`] guesses.
//!
//! # Architecture
//!
//! - **Password**: validated secret word ([`Password`], [`ValidationError`])
//! - **Letter**: a single normalised guess ([`Letter`])
//! - **Mask**: the partially revealed word ([`RevealMask`])
//! - **Session**: the state machine ([`GameSession`], [`GuessOutcome`], [`SessionStatus`])
//! - **Contracts**: pre/postconditions and invariants checked around every guess
//!
//! # Example
//!
//! ```
//! use phantom_hangman::{GameSession, GuessOutcome, Letter, SessionStatus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new("cat")?;
//! assert_eq!(session.current_mask_text(), "***");
//!
//! let outcome = session.guess(Letter::try_from('a')?);
//! assert_eq!(
//!     outcome,
//!     GuessOutcome::Correct { updated_mask: "*a*".to_string(), won: false }
//! );
//! assert_eq!(session.status(), SessionStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod figure;
mod invariants;
mod letter;
mod mask;
mod password;
mod rules;
mod session;

pub use contracts::{Contract, ContractError, GuessAccepted, GuessContract, MaskMonotonic, SingleStep};
pub use figure::{FigureStage, IMAGE_DIRECTORY, IMAGE_TYPE};
pub use invariants::{
    HangmanInvariants, Invariant, InvariantSet, InvariantViolation, MaskMatchesPasswordInvariant,
    MistakesBoundedInvariant, StatusConsistentInvariant,
};
pub use letter::{Letter, LetterError};
pub use mask::RevealMask;
pub use password::{Password, ValidationError, validate_password};
pub use rules::{MAX_INCORRECT, MAX_PASSWORD_LENGTH, PLACEHOLDER};
pub use session::{GameSession, GuessOutcome, SessionStatus};
