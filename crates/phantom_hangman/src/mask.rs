//! Partially revealed rendering of the secret word.

use serde::{Deserialize, Serialize};

use crate::rules::PLACEHOLDER;

/// One slot per password position, `None` until the letter is guessed.
///
/// Only [`GameSession`](crate::GameSession) mutates a mask; callers see
/// borrowed or cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealMask {
    slots: Vec<Option<char>>,
}

impl RevealMask {
    /// Creates a fully hidden mask of `len` positions.
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Reveals `c` at `index`. Revealing an already revealed slot is a no-op.
    pub(crate) fn reveal(&mut self, index: usize, c: char) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(c);
        }
    }

    /// The slots in password order.
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length mask.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of positions still hidden.
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// True once no placeholders remain.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Renders revealed letters with [`PLACEHOLDER`] for the rest.
    pub fn as_text(&self) -> String {
        self.slots.iter().map(|s| s.unwrap_or(PLACEHOLDER)).collect()
    }
}

impl std::fmt::Display for RevealMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}
