//! Which hangman illustration to show for a session.

use serde::{Deserialize, Serialize};

use crate::rules::MAX_INCORRECT;

/// Directory graphical hosts load figure images from.
pub const IMAGE_DIRECTORY: &str = "images/";

/// File extension of figure images.
pub const IMAGE_TYPE: &str = ".png";

/// Stage of the hangman illustration.
///
/// Advances one gallows step per mistake while the game runs and switches
/// to a dedicated win or lose picture at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigureStage {
    /// In progress with this many mistakes (always below [`MAX_INCORRECT`]).
    Gallows(u8),
    /// The word was guessed.
    Won,
    /// The mistake limit was reached.
    Lost,
}

impl FigureStage {
    /// Image base name, e.g. `hangman3` or `hangman_lose`.
    pub fn image_name(self) -> String {
        match self {
            Self::Gallows(mistakes) => format!("hangman{}", mistakes.min(MAX_INCORRECT - 1)),
            Self::Won => "hangman_win".to_string(),
            Self::Lost => "hangman_lose".to_string(),
        }
    }

    /// Relative image path, e.g. `images/hangman3.png`.
    pub fn image_path(self) -> String {
        format!("{}{}{}", IMAGE_DIRECTORY, self.image_name(), IMAGE_TYPE)
    }

    /// True for the win and lose pictures.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
