use serde::{Deserialize, Serialize};

/// Cell value used by the bundled front ends.
///
/// [`Color::White`] is reserved for unoccupied cells and is not part of
/// [`Color::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("white")]
    White,
    #[display("red")]
    Red,
    #[display("blue")]
    Blue,
    #[display("green")]
    Green,
    #[display("yellow")]
    Yellow,
    #[display("purple")]
    Purple,
    #[display("orange")]
    Orange,
    #[display("cyan")]
    Cyan,
}

impl Color {
    /// The empty cell value.
    pub const EMPTY: Self = Color::White;

    /// Colors a piece may be drawn in.
    pub const PALETTE: [Self; 7] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Cyan,
    ];
}
