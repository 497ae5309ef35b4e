use crate::InitError;

use super::geometry::Vector2;

/// Dimensions of the playfield, fixed for one game session.
///
/// Both dimensions are at least 1 and at most [`BoardSize::MAX_DIMENSION`],
/// which keeps every on-board coordinate representable as an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: usize,
    height: usize,
}

impl BoardSize {
    pub const MAX_DIMENSION: usize = i16::MAX as usize;

    /// Board used by the terminal front end when no size is given.
    pub const DEFAULT: Self = Self {
        width: 10,
        height: 20,
    };

    pub fn new(width: usize, height: usize) -> Result<Self, InitError> {
        let valid = |n: usize| (1..=Self::MAX_DIMENSION).contains(&n);
        if !valid(width) || !valid(height) {
            return Err(InitError::InvalidBoardSize { width, height });
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies inside `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(&self, pos: Vector2) -> bool {
        self.index_of(pos).is_some()
    }

    fn index_of(&self, pos: Vector2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major grid of cell values, row 0 at the top.
///
/// Every cell holds either the board's `empty` value or a color/tag written
/// when a piece locks. Coordinates outside the board are treated as occupied
/// by [`Board::is_vacant`] and writes to them are dropped, which is what lets
/// the collision predicates treat the border like a wall.
///
/// # Example
///
/// ```
/// use dropgrid_engine::{Board, BoardSize, Vector2};
///
/// let mut board = Board::new(BoardSize::new(3, 2)?, '.');
/// board.fill_cells(&[Vector2::new(0, 1), Vector2::new(1, 1), Vector2::new(2, 1)], '#');
/// assert!(board.is_row_full(1));
///
/// assert_eq!(board.clear_full_rows(), 1);
/// assert!(board.rows().flatten().all(|&c| c == '.'));
/// # Ok::<(), dropgrid_engine::InitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<C> {
    size: BoardSize,
    empty: C,
    cells: Vec<C>,
}

impl<C> Board<C>
where
    C: Copy + Eq,
{
    /// Creates a board with every cell set to `empty`.
    #[must_use]
    pub fn new(size: BoardSize, empty: C) -> Self {
        Self {
            size,
            empty,
            cells: vec![empty; size.width * size.height],
        }
    }

    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.size.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.size.height
    }

    /// The reserved value of an unoccupied cell.
    #[must_use]
    pub const fn empty(&self) -> C {
        self.empty
    }

    /// Returns the cell at `pos`, or `None` when it lies off the board.
    #[must_use]
    pub fn get(&self, pos: Vector2) -> Option<C> {
        self.size.index_of(pos).map(|i| self.cells[i])
    }

    /// Writes `value` at `pos`. Off-board writes are ignored.
    pub fn set(&mut self, pos: Vector2, value: C) {
        if let Some(i) = self.size.index_of(pos) {
            self.cells[i] = value;
        }
    }

    /// Returns `true` if `pos` is on the board and holds the empty value.
    #[must_use]
    pub fn is_vacant(&self, pos: Vector2) -> bool {
        self.get(pos) == Some(self.empty)
    }

    pub fn fill_cells(&mut self, cells: &[Vector2], value: C) {
        for &pos in cells {
            self.set(pos, value);
        }
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[C]> + DoubleEndedIterator {
        self.cells.chunks_exact(self.size.width)
    }

    /// Returns the cells of row `y`, or `None` when it lies off the board.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[C]> {
        let start = y.checked_mul(self.size.width)?;
        self.cells.get(start..start + self.size.width)
    }

    /// Returns `true` if every cell of row `y` is occupied.
    ///
    /// Rows outside the board are never full.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&c| c != self.empty))
    }

    /// Returns `true` if any cell of the top row is occupied.
    #[must_use]
    pub fn is_top_row_occupied(&self) -> bool {
        self.rows()
            .next()
            .is_some_and(|row| row.iter().any(|&c| c != self.empty))
    }

    /// Number of cells holding a non-empty value.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.empty).count()
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows above a removed row move down, keeping their relative order, and
    /// one empty row is inserted at the top per removed row.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.size.width;
        let mut count = 0;
        for y in (0..self.size.height).rev() {
            if self.is_row_full(y) {
                count += 1;
                continue;
            }
            if count > 0 {
                let src = y * width;
                self.cells.copy_within(src..src + width, src + count * width);
            }
        }
        self.cells[..count * width].fill(self.empty);
        count
    }
}
