//! Pre- and postconditions around guess evaluation.
//!
//! Preconditions decide whether a guess is accepted at all. Postconditions
//! compare the session before and after an accepted guess and are only
//! evaluated in debug builds.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

use crate::invariants::{HangmanInvariants, InvariantSet};
use crate::letter::Letter;
use crate::session::{GameSession, SessionStatus};

/// Hoare-style contract for a state transition `{P} action {Q}`.
pub trait Contract<S, A> {
    /// Checks that `action` may be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), ContractError>;

    /// Checks that the step from `before` to `after` kept every guarantee.
    fn post(before: &S, after: &S) -> Result<(), ContractError>;
}

/// Why a contract check failed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ContractError {
    /// The session already ended.
    #[display("Session is already {}", _0)]
    SessionOver(#[error(not(source))] SessionStatus),

    /// A postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Precondition: the session still accepts guesses.
pub struct GuessAccepted;

impl GuessAccepted {
    /// Fails with [`ContractError::SessionOver`] once the session is terminal.
    pub fn check(session: &GameSession) -> Result<(), ContractError> {
        match session.status() {
            SessionStatus::InProgress => Ok(()),
            over => Err(ContractError::SessionOver(over)),
        }
    }
}

/// Transition property: a revealed position never changes or hides again.
pub struct MaskMonotonic;

impl MaskMonotonic {
    /// True when every slot revealed in `before` is identical in `after`.
    #[instrument(skip_all)]
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        let valid = before.mask().len() == after.mask().len()
            && before
                .mask()
                .slots()
                .iter()
                .zip(after.mask().slots())
                .all(|(was, now)| was.is_none() || was == now);
        if !valid {
            warn!("Revealed letter was hidden or changed");
        }
        valid
    }
}

/// Transition property: one guess either reveals or costs exactly one mistake.
pub struct SingleStep;

impl SingleStep {
    /// True when mistakes grew by at most one and never alongside a reveal.
    #[instrument(skip_all)]
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        let was = before.mistake_count();
        let now = after.mistake_count();
        let valid = if now == was {
            true
        } else {
            now == was + 1 && before.mask() == after.mask()
        };
        if !valid {
            warn!(was, now, "Guess changed more than one counter");
        }
        valid
    }
}

/// Contract for [`GameSession::guess`].
///
/// Preconditions:
/// - Session is in progress
///
/// Postconditions:
/// - [`HangmanInvariants`] hold
/// - Mask is monotonic
/// - At most one mistake per guess, never together with a reveal
pub struct GuessContract;

impl Contract<GameSession, Letter> for GuessContract {
    fn pre(session: &GameSession, _letter: &Letter) -> Result<(), ContractError> {
        GuessAccepted::check(session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), ContractError> {
        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractError::InvariantViolation(descriptions)
        })?;

        if !MaskMonotonic::holds(before, after) {
            return Err(ContractError::InvariantViolation(
                "Revealed letters stay revealed".to_string(),
            ));
        }
        if !SingleStep::holds(before, after) {
            return Err(ContractError::InvariantViolation(
                "A guess reveals or costs one mistake".to_string(),
            ));
        }
        Ok(())
    }
}
