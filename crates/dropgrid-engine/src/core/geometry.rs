use serde::{Deserialize, Serialize};

use super::board::Board;

/// Integer cell coordinate on the board.
///
/// `(0, 0)` is the top-left cell, `x` grows rightward and `y` grows downward.
/// Coordinates are signed because a candidate position produced by a move or
/// rotation may lie outside the board before it is validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the neighbouring cell one unit away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// Translation direction of a piece. Pieces never move up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Unit offset `(dx, dy)` of this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Returns `true` if any cell sits in column 0 or has an occupied cell to its left.
#[must_use]
pub fn has_left_edge_collision<C>(cells: &[Vector2], board: &Board<C>) -> bool
where
    C: Copy + Eq,
{
    has_edge_collision(cells, Direction::Left, board)
}

/// Returns `true` if any cell sits in the last column or has an occupied cell to its right.
#[must_use]
pub fn has_right_edge_collision<C>(cells: &[Vector2], board: &Board<C>) -> bool
where
    C: Copy + Eq,
{
    has_edge_collision(cells, Direction::Right, board)
}

/// Returns `true` if any cell sits in the bottom row or has an occupied cell below it.
#[must_use]
pub fn has_bottom_edge_collision<C>(cells: &[Vector2], board: &Board<C>) -> bool
where
    C: Copy + Eq,
{
    has_edge_collision(cells, Direction::Down, board)
}

/// Returns `true` if `cells` cannot be translated one unit in `direction`.
///
/// A step that leaves the board counts as blocked, so a cell on the matching
/// border always collides.
#[must_use]
pub fn has_edge_collision<C>(cells: &[Vector2], direction: Direction, board: &Board<C>) -> bool
where
    C: Copy + Eq,
{
    cells
        .iter()
        .any(|cell| !board.is_vacant(cell.step(direction)))
}

/// Translates every cell one unit in `direction` without any checks.
#[must_use]
pub fn translate(cells: [Vector2; 4], direction: Direction) -> [Vector2; 4] {
    cells.map(|cell| cell.step(direction))
}
