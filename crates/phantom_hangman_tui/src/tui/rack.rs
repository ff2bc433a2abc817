//! The letter-tile rack.
//!
//! Twenty-six tiles in two rows. The rack remembers which tiles were
//! already played so they are not sent to the session twice.

use crossterm::event::KeyCode;
use phantom_hangman::Letter;
use tracing::{debug, instrument};

/// Tiles per rack row.
pub const ROW_LEN: usize = 13;

const TILE_COUNT: usize = 26;

/// Tile state and keyboard cursor.
#[derive(Debug, Clone, Default)]
pub struct LetterRack {
    picked: [bool; TILE_COUNT],
    cursor: Letter,
}

impl LetterRack {
    /// Letter under the cursor.
    pub fn selected(&self) -> Letter {
        self.cursor
    }

    /// Whether `letter` was already played.
    pub fn is_picked(&self, letter: Letter) -> bool {
        self.picked[letter.index()]
    }

    /// Marks `letter` as played. Returns false when it already was.
    #[instrument(skip(self))]
    pub fn pick(&mut self, letter: Letter) -> bool {
        let slot = &mut self.picked[letter.index()];
        if *slot {
            debug!("Tile already picked");
            return false;
        }
        *slot = true;
        self.cursor = letter;
        true
    }

    /// Tiles in rack order with their picked flag.
    pub fn tiles(&self) -> impl Iterator<Item = (Letter, bool)> + '_ {
        Letter::all().map(|letter| (letter, self.is_picked(letter)))
    }

    /// Moves the cursor with the arrow keys; other keys leave it alone.
    pub fn move_cursor(&mut self, key: KeyCode) {
        let at = self.cursor.index();
        let next = match key {
            KeyCode::Right => (at + 1) % TILE_COUNT,
            KeyCode::Left => (at + TILE_COUNT - 1) % TILE_COUNT,
            KeyCode::Down if at < ROW_LEN => at + ROW_LEN,
            KeyCode::Up if at >= ROW_LEN => at - ROW_LEN,
            KeyCode::Home => 0,
            KeyCode::End => TILE_COUNT - 1,
            _ => at,
        };
        if let Some(letter) = Letter::from_index(next) {
            self.cursor = letter;
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
    fn test_starts_on_a() {
        let rack = LetterRack::default();
        assert_eq!(rack.selected(), letter('a'));
        assert!(rack.tiles().all(|(_, picked)| !picked));
    }

    #[test]
    fn test_cursor_wraps_horizontally() {
        let mut rack = LetterRack::default();
        rack.move_cursor(KeyCode::Left);
        assert_eq!(rack.selected(), letter('z'));
        rack.move_cursor(KeyCode::Right);
        assert_eq!(rack.selected(), letter('a'));
    }

    #[test]
    fn test_cursor_switches_rows() {
        let mut rack = LetterRack::default();
        rack.move_cursor(KeyCode::Down);
        assert_eq!(rack.selected(), letter('n'));
        rack.move_cursor(KeyCode::Down);
        assert_eq!(rack.selected(), letter('n'));
        rack.move_cursor(KeyCode::Up);
        assert_eq!(rack.selected(), letter('a'));
        rack.move_cursor(KeyCode::Up);
        assert_eq!(rack.selected(), letter('a'));
    }

    #[test]
    fn test_pick_once() {
        let mut rack = LetterRack::default();
        assert!(rack.pick(letter('q')));
        assert!(!rack.pick(letter('q')));
        assert!(rack.is_picked(letter('q')));
        assert_eq!(rack.selected(), letter('q'));
    }
}
