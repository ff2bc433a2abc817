//! Session invariants.
//!
//! Each invariant is a type implementing [`Invariant`]; tuples of invariants
//! implement [`InvariantSet`] so they can be checked as one step.

#[cfg(kani)]
mod verification;

pub mod mask_matches_password;
pub mod mistakes_bounded;
pub mod status_consistent;

pub use mask_matches_password::MaskMatchesPasswordInvariant;
pub use mistakes_bounded::MistakesBoundedInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// A property that must hold for every reachable state `S`.
pub trait Invariant<S> {
    /// Checks the property.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $((<$inv as Invariant<S>>::holds(state), <$inv as Invariant<S>>::description())),+
                ]
                .into_iter()
                .filter(|(ok, _)| !ok)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// Every invariant of a hangman session.
pub type HangmanInvariants = (
    MaskMatchesPasswordInvariant,
    MistakesBoundedInvariant,
    StatusConsistentInvariant,
);
