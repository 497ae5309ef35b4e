pub use self::{board::*, color::*, geometry::*, tetromino::*};

pub(crate) mod board;
pub(crate) mod color;
pub mod geometry;
pub(crate) mod tetromino;
