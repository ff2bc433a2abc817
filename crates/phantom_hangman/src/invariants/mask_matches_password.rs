//! Mask consistency: the mask only ever shows the password's own letters.

use super::Invariant;
use crate::GameSession;

/// Invariant: the mask has one slot per password letter, and each revealed
/// slot holds the password letter at that position in its original case.
pub struct MaskMatchesPasswordInvariant;

impl Invariant<GameSession> for MaskMatchesPasswordInvariant {
    fn holds(session: &GameSession) -> bool {
        let password = session.revealed_password();
        let slots = session.mask().slots();

        slots.len() == password.len()
            && slots
                .iter()
                .zip(password.chars())
                .all(|(slot, c)| slot.is_none_or(|shown| shown == c))
    }

    fn description() -> &'static str {
        "Mask reveals only password letters in their positions"
    }
}
