pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InitError {
    #[display("invalid board size {width}x{height}")]
    InvalidBoardSize { width: usize, height: usize },
    #[display("palette must contain at least one color")]
    EmptyPalette,
    #[display("palette must not contain the empty cell value")]
    PaletteContainsEmpty,
}
