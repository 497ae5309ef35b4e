use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use super::{
    board::{Board, BoardSize},
    geometry::{self, Direction, Vector2},
};

/// Piece kind.
///
/// Each kind is a stateless policy over a piece's four absolute cells: it
/// knows where the piece spawns, how it rotates, and how it translates. The
/// cells themselves live in the game state.
///
/// For every kind except `I` and `O`, `cells[0]` is the rotation pivot.
///
/// # Example
///
/// ```
/// use dropgrid_engine::{Board, BoardSize, Direction, Tetromino, Vector2};
///
/// let size = BoardSize::new(10, 20)?;
/// let board = Board::new(size, 0u8);
///
/// let cells = Tetromino::T.spawn_cells(size);
/// assert_eq!(cells[0], Vector2::new(5, 1));
///
/// let moved = Tetromino::T.shift(cells, Direction::Left, &board);
/// assert_eq!(moved[0], Vector2::new(4, 1));
///
/// let rotated = Tetromino::T.rotate(moved, &board);
/// assert_eq!(rotated[0], moved[0]);
/// # Ok::<(), dropgrid_engine::InitError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Distribution<Tetromino> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tetromino {
        Tetromino::ALL[rng.random_range(0..Tetromino::LEN)]
    }
}

impl Tetromino {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Tetromino::I,
        Tetromino::J,
        Tetromino::L,
        Tetromino::O,
        Tetromino::S,
        Tetromino::T,
        Tetromino::Z,
    ];

    /// Returns the character representation of this piece kind.
    ///
    /// ```
    /// use dropgrid_engine::Tetromino;
    ///
    /// assert_eq!(Tetromino::I.as_char(), 'I');
    /// assert_eq!(Tetromino::Z.as_char(), 'Z');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Tetromino::I => 'I',
            Tetromino::J => 'J',
            Tetromino::L => 'L',
            Tetromino::O => 'O',
            Tetromino::S => 'S',
            Tetromino::T => 'T',
            Tetromino::Z => 'Z',
        }
    }

    /// Returns the four cells a fresh piece of this kind occupies.
    ///
    /// The piece is centered on column `width / 2` and touches row 0. The
    /// result depends only on the board size, not on its contents; on very
    /// narrow boards some cells may lie off the board.
    #[must_use]
    pub fn spawn_cells(self, size: BoardSize) -> [Vector2; 4] {
        let x = i32::try_from(size.width() / 2).unwrap_or(i32::MAX);
        let c = |dx, dy| Vector2::new(x + dx, dy);
        match self {
            Tetromino::I => [c(-1, 0), c(0, 0), c(1, 0), c(2, 0)],
            Tetromino::O => [c(-1, 0), c(0, 0), c(-1, 1), c(0, 1)],
            Tetromino::J => [c(0, 0), c(0, 1), c(1, 1), c(2, 1)],
            Tetromino::L => [c(0, 1), c(1, 0), c(-1, 1), c(1, 1)],
            Tetromino::T => [c(0, 1), c(0, 0), c(-1, 1), c(1, 1)],
            Tetromino::S => [c(0, 1), c(0, 0), c(1, 0), c(-1, 1)],
            Tetromino::Z => [c(0, 1), c(0, 0), c(-1, 0), c(1, 1)],
        }
    }

    /// Translates `cells` one unit in `direction`.
    ///
    /// Returns `cells` unchanged if any cell would leave the board or hit an
    /// occupied cell.
    #[must_use]
    pub fn shift<C>(self, cells: [Vector2; 4], direction: Direction, board: &Board<C>) -> [Vector2; 4]
    where
        C: Copy + Eq,
    {
        if geometry::has_edge_collision(&cells, direction, board) {
            return cells;
        }
        geometry::translate(cells, direction)
    }

    /// Rotates `cells` a quarter turn.
    ///
    /// Returns `cells` unchanged if any rotated cell would leave the board or
    /// hit an occupied cell. There are no wall kicks.
    #[must_use]
    pub fn rotate<C>(self, cells: [Vector2; 4], board: &Board<C>) -> [Vector2; 4]
    where
        C: Copy + Eq,
    {
        let rotated = match self {
            Tetromino::O => return cells,
            Tetromino::I => flip_i(cells, board.size()),
            Tetromino::J | Tetromino::L | Tetromino::S | Tetromino::T | Tetromino::Z => {
                Some(rotate_about_pivot(cells))
            }
        };
        match rotated {
            Some(rotated) if rotated.iter().all(|&pos| board.is_vacant(pos)) => rotated,
            _ => {
                tracing::trace!(kind = %self.as_char(), ?cells, "rotation rejected");
                cells
            }
        }
    }
}

/// Switches an I piece between horizontal and vertical around `cells[1]`.
///
/// Returns `None` when the pivot is so close to the border that the flipped
/// piece could not fit.
fn flip_i(cells: [Vector2; 4], size: BoardSize) -> Option<[Vector2; 4]> {
    let Vector2 { x, y } = cells[1];
    let width = i64::try_from(size.width()).ok()?;
    let height = i64::try_from(size.height()).ok()?;
    let p = |dx, dy| Vector2::new(x + dx, y + dy);

    if cells[0].y == cells[1].y {
        if y == 0 || i64::from(y) + 2 >= height {
            return None;
        }
        Some([p(0, -1), p(0, 0), p(0, 1), p(0, 2)])
    } else {
        if x == 0 || i64::from(x) + 2 >= width {
            return None;
        }
        Some([p(-1, 0), p(0, 0), p(1, 0), p(2, 0)])
    }
}

/// Maps every offset `(dx, dy)` from `cells[0]` to `(-dy, dx)`.
fn rotate_about_pivot(cells: [Vector2; 4]) -> [Vector2; 4] {
    let pivot = cells[0];
    cells.map(|cell| {
        let (dx, dy) = (cell.x - pivot.x, cell.y - pivot.y);
        pivot.offset(-dy, dx)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(width: usize, height: usize) -> Board<u8> {
        Board::new(BoardSize::new(width, height).unwrap(), 0)
    }

    fn v(x: i32, y: i32) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn test_chars_are_distinct() {
        let chars: String = Tetromino::ALL.map(Tetromino::as_char).iter().collect();
        assert_eq!(chars, "IJLOSTZ");
    }

    #[test]
    fn test_spawn_layouts() {
        let size = BoardSize::new(10, 20).unwrap();
        assert_eq!(
            Tetromino::I.spawn_cells(size),
            [v(4, 0), v(5, 0), v(6, 0), v(7, 0)]
        );
        assert_eq!(
            Tetromino::O.spawn_cells(size),
            [v(4, 0), v(5, 0), v(4, 1), v(5, 1)]
        );
        assert_eq!(
            Tetromino::J.spawn_cells(size),
            [v(5, 0), v(5, 1), v(6, 1), v(7, 1)]
        );
        assert_eq!(
            Tetromino::L.spawn_cells(size),
            [v(5, 1), v(6, 0), v(4, 1), v(6, 1)]
        );
    }

    #[test]
    fn test_spawn_cells_within_standard_board() {
        let board = empty_board(10, 20);
        for kind in Tetromino::ALL {
            let cells = kind.spawn_cells(board.size());
            assert!(cells.iter().all(|&c| board.is_vacant(c)), "{kind:?}");
            assert!(cells.iter().any(|c| c.y == 0), "{kind:?}");
        }
    }

    #[test]
    fn test_shift_rejected_at_edges() {
        let board = empty_board(4, 3);
        let left = [v(0, 0), v(1, 0), v(2, 0), v(3, 0)];
        assert_eq!(Tetromino::I.shift(left, Direction::Left, &board), left);
        assert_eq!(Tetromino::I.shift(left, Direction::Right, &board), left);

        let bottom = [v(0, 2), v(1, 2), v(2, 2), v(3, 2)];
        assert_eq!(Tetromino::I.shift(bottom, Direction::Down, &board), bottom);
        assert_eq!(
            Tetromino::I.shift(left, Direction::Down, &board),
            [v(0, 1), v(1, 1), v(2, 1), v(3, 1)]
        );
    }

    #[test]
    fn test_shift_rejected_by_occupied_neighbour() {
        let mut board = empty_board(10, 20);
        let cells = [v(4, 5), v(5, 5), v(4, 6), v(5, 6)];
        board.set(v(6, 6), 1);
        assert_eq!(Tetromino::O.shift(cells, Direction::Right, &board), cells);
        assert_eq!(
            Tetromino::O.shift(cells, Direction::Left, &board),
            [v(3, 5), v(4, 5), v(3, 6), v(4, 6)]
        );
    }

    #[test]
    fn test_o_rotation_is_identity() {
        let board = empty_board(10, 20);
        let cells = [v(0, 0), v(1, 0), v(0, 1), v(1, 1)];
        assert_eq!(Tetromino::O.rotate(cells, &board), cells);
        // Even for cells that are not an O shape at all.
        let odd = [v(9, 19), v(-3, 2), v(5, 5), v(0, 0)];
        assert_eq!(Tetromino::O.rotate(odd, &board), odd);
    }

    #[test]
    fn test_i_rotation_round_trip() {
        let board = empty_board(10, 20);
        let horizontal = [v(3, 5), v(4, 5), v(5, 5), v(6, 5)];
        let vertical = Tetromino::I.rotate(horizontal, &board);
        assert_eq!(vertical, [v(4, 4), v(4, 5), v(4, 6), v(4, 7)]);
        assert_eq!(Tetromino::I.rotate(vertical, &board), horizontal);
    }

    #[test]
    fn test_i_rotation_rejected_near_border() {
        let board = empty_board(10, 20);

        let top = Tetromino::I.spawn_cells(board.size());
        assert_eq!(Tetromino::I.rotate(top, &board), top);

        let bottom = [v(3, 18), v(4, 18), v(5, 18), v(6, 18)];
        assert_eq!(Tetromino::I.rotate(bottom, &board), bottom);

        let left_wall = [v(0, 4), v(0, 5), v(0, 6), v(0, 7)];
        assert_eq!(Tetromino::I.rotate(left_wall, &board), left_wall);

        let right_wall = [v(8, 4), v(8, 5), v(8, 6), v(8, 7)];
        assert_eq!(Tetromino::I.rotate(right_wall, &board), right_wall);
    }

    #[test]
    fn test_i_rotation_rejected_by_occupied_cell() {
        let mut board = empty_board(10, 20);
        board.set(v(4, 7), 1);
        let horizontal = [v(3, 5), v(4, 5), v(5, 5), v(6, 5)];
        assert_eq!(Tetromino::I.rotate(horizontal, &board), horizontal);
    }

    #[test]
    fn test_pivot_rotation() {
        let board = empty_board(10, 20);
        for kind in [
            Tetromino::J,
            Tetromino::L,
            Tetromino::S,
            Tetromino::T,
            Tetromino::Z,
        ] {
            let start = kind.spawn_cells(board.size()).map(|c| c.offset(0, 5));
            let mut cells = start;
            for _ in 0..4 {
                let next = kind.rotate(cells, &board);
                assert_eq!(next[0], start[0], "{kind:?} pivot moved");
                assert_ne!(next, cells, "{kind:?} rotation rejected");
                cells = next;
            }
            assert_eq!(cells, start, "{kind:?}");
        }
    }

    #[test]
    fn test_t_rotation_offsets() {
        let board = empty_board(10, 20);
        let cells = [v(5, 6), v(5, 5), v(4, 6), v(6, 6)];
        assert_eq!(
            Tetromino::T.rotate(cells, &board),
            [v(5, 6), v(6, 6), v(5, 5), v(5, 7)]
        );
    }

    #[test]
    fn test_pivot_rotation_rejected_off_board() {
        let board = empty_board(10, 20);
        // Pivot in column 0; the next quarter turn would need column -1.
        let at_wall = [v(0, 5), v(1, 5), v(0, 4), v(0, 6)];
        assert_eq!(Tetromino::T.rotate(at_wall, &board), at_wall);

        let mut blocked = empty_board(10, 20);
        let cells = [v(5, 6), v(5, 5), v(4, 6), v(6, 6)];
        blocked.set(v(5, 7), 1);
        assert_eq!(Tetromino::T.rotate(cells, &blocked), cells);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Tetromino::S).unwrap();
        assert_eq!(json, "\"S\"");
        let kind: Tetromino = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, Tetromino::S);
    }
}
