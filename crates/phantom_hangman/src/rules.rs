//! Fixed game rules.

/// Number of incorrect guesses that ends the game in a loss.
pub const MAX_INCORRECT: u8 = 6;

/// Longest password a session accepts.
pub const MAX_PASSWORD_LENGTH: usize = 10;

/// Character shown in place of an unrevealed letter.
pub const PLACEHOLDER: char = '*';
