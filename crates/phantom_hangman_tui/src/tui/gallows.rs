//! ASCII hangman figure.

use phantom_hangman::FigureStage;

const EMPTY: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "      |  ",
    "      |  ",
    "      |  ",
    "      |  ",
    "=========",
];

const HEAD: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  O   |  ",
    "      |  ",
    "      |  ",
    "      |  ",
    "=========",
];

const BODY: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  O   |  ",
    "  |   |  ",
    "      |  ",
    "      |  ",
    "=========",
];

const ONE_ARM: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  O   |  ",
    " /|   |  ",
    "      |  ",
    "      |  ",
    "=========",
];

const BOTH_ARMS: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  O   |  ",
    " /|\\  |  ",
    "      |  ",
    "      |  ",
    "=========",
];

const ONE_LEG: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  O   |  ",
    " /|\\  |  ",
    " /    |  ",
    "      |  ",
    "=========",
];

const LOST: &[&str] = &[
    "  +---+  ",
    "  |   |  ",
    "  X   |  ",
    " /|\\  |  ",
    " / \\  |  ",
    "      |  ",
    "=========",
];

const WON: &[&str] = &[
    "  +---+  ",
    "      |  ",
    "      |  ",
    " \\O/  |  ",
    "  |   |  ",
    " / \\  |  ",
    "=========",
];

/// Lines of the figure for `stage`, top to bottom.
pub fn figure(stage: FigureStage) -> &'static [&'static str] {
    match stage {
        FigureStage::Gallows(0) => EMPTY,
        FigureStage::Gallows(1) => HEAD,
        FigureStage::Gallows(2) => BODY,
        FigureStage::Gallows(3) => ONE_ARM,
        FigureStage::Gallows(4) => BOTH_ARMS,
        FigureStage::Gallows(_) => ONE_LEG,
        FigureStage::Won => WON,
        FigureStage::Lost => LOST,
    }
}
