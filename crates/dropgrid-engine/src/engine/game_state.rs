use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IteratorRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    InitError,
    core::{
        board::{Board, BoardSize},
        geometry::{self, Direction, Vector2},
        tetromino::Tetromino,
    },
};

use super::{GameStats, PieceSeed};

/// A discrete move command fed into [`GameState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    Down,
    Rotate,
}

impl Move {
    pub const ALL: [Self; 4] = [Move::Left, Move::Right, Move::Down, Move::Rotate];

    /// Returns the translation this move performs, or `None` for [`Move::Rotate`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Move::Left => Some(Direction::Left),
            Move::Right => Some(Direction::Right),
            Move::Down => Some(Direction::Down),
            Move::Rotate => None,
        }
    }
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Complete state of one game.
///
/// The state is threaded by value through [`GameState::update`], once per
/// tick. It owns the board, the active piece (kind, cells and color), the
/// statistics, the time anchor of the automatic descent, the phase, the
/// palette, and the seeded random source used to pick the next piece kind
/// and color.
///
/// `C` is the cell value type. The board's empty value is reserved and never
/// part of the palette.
#[derive(Debug, Clone)]
pub struct GameState<C> {
    board: Board<C>,
    palette: Vec<C>,
    active_kind: Tetromino,
    active_cells: [Vector2; 4],
    active_color: C,
    stats: GameStats,
    last_tick: Option<u64>,
    phase: Phase,
    seed: PieceSeed,
    rng: Pcg32,
}

/// Creates a new game with a random seed. See [`GameState::new`].
pub fn init<C>(
    size: BoardSize,
    palette: impl IntoIterator<Item = C>,
    empty: C,
) -> Result<GameState<C>, InitError>
where
    C: Copy + Eq,
{
    GameState::new(size, palette, empty)
}

/// Advances `state` by one tick. See [`GameState::update`].
#[must_use]
pub fn update<C>(
    state: GameState<C>,
    current_time: u64,
    speed: u64,
    next_move: Option<Move>,
) -> GameState<C>
where
    C: Copy + Eq,
{
    state.update(current_time, speed, next_move)
}

impl<C> GameState<C>
where
    C: Copy + Eq,
{
    /// Creates a new game with a random seed.
    ///
    /// For a reproducible game, use [`Self::with_seed`] instead.
    pub fn new(
        size: BoardSize,
        palette: impl IntoIterator<Item = C>,
        empty: C,
    ) -> Result<Self, InitError> {
        Self::with_seed(size, palette, empty, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    ///
    /// Duplicate palette entries are dropped. The palette must be non-empty
    /// and must not contain `empty`.
    pub fn with_seed(
        size: BoardSize,
        palette: impl IntoIterator<Item = C>,
        empty: C,
        seed: PieceSeed,
    ) -> Result<Self, InitError> {
        let mut colors = Vec::new();
        for color in palette {
            if color == empty {
                return Err(InitError::PaletteContainsEmpty);
            }
            if !colors.contains(&color) {
                colors.push(color);
            }
        }

        let mut rng = Pcg32::from_seed(seed.to_bytes());
        let active_kind: Tetromino = rng.random();
        let active_color = colors
            .iter()
            .copied()
            .choose(&mut rng)
            .ok_or(InitError::EmptyPalette)?;

        Ok(Self {
            board: Board::new(size, empty),
            palette: colors,
            active_kind,
            active_cells: active_kind.spawn_cells(size),
            active_color,
            stats: GameStats::new(),
            last_tick: None,
            phase: Phase::Playing,
            seed,
            rng,
        })
    }

    /// Advances the game by one tick.
    ///
    /// `current_time` is a monotonic timestamp in milliseconds and `speed` is
    /// the number of milliseconds the piece may rest before it falls by one
    /// row. At most one move is applied per tick.
    ///
    /// Within a tick, in order:
    ///
    /// 1. A finished game is returned unchanged.
    /// 2. `next_move` is applied if the piece can make it.
    /// 3. The first tick anchors the descent timer.
    /// 4. Once more than `speed` ms have passed since the anchor, the timer is
    ///    re-anchored and the piece falls one row.
    /// 5. A piece resting on the floor or on locked cells is written into the
    ///    board and a new piece spawns at the top.
    /// 6. The game ends if the top row holds a locked cell.
    /// 7. Full rows are cleared and added to the score.
    ///
    /// # Example
    ///
    /// ```
    /// use dropgrid_engine::{BoardSize, Color, GameState, Move, PieceSeed};
    ///
    /// let state = GameState::with_seed(
    ///     BoardSize::new(10, 20)?,
    ///     Color::PALETTE,
    ///     Color::EMPTY,
    ///     PieceSeed::from(7_u128),
    /// )?;
    /// let spawn = *state.active_cells();
    ///
    /// let state = state.update(0, 500, None);
    /// assert_eq!(*state.active_cells(), spawn);
    ///
    /// let state = state.update(501, 500, Some(Move::Down));
    /// assert_eq!(state.active_cells()[0].y, spawn[0].y + 2);
    /// # Ok::<(), dropgrid_engine::InitError>(())
    /// ```
    #[must_use]
    pub fn update(mut self, current_time: u64, speed: u64, next_move: Option<Move>) -> Self {
        if self.phase.is_game_over() {
            return self;
        }

        if let Some(next_move) = next_move {
            self.apply_move(next_move);
        }

        let anchor = *self.last_tick.get_or_insert(current_time);
        if current_time.saturating_sub(anchor) > speed {
            self.last_tick = Some(current_time);
            self.apply_move(Move::Down);
        }

        if geometry::has_bottom_edge_collision(&self.active_cells, &self.board) {
            self.lock_active_piece();
        }

        if self.board.is_top_row_occupied() {
            self.phase = Phase::GameOver;
            tracing::info!(
                score = self.stats.score(),
                locked_pieces = self.stats.locked_pieces(),
                "game over"
            );
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.stats.record_cleared_rows(cleared);
            tracing::debug!(cleared, score = self.stats.score(), "rows cleared");
        }

        self
    }

    fn apply_move(&mut self, next_move: Move) {
        self.active_cells = match next_move.direction() {
            Some(direction) => self
                .active_kind
                .shift(self.active_cells, direction, &self.board),
            None => self.active_kind.rotate(self.active_cells, &self.board),
        };
    }

    fn lock_active_piece(&mut self) {
        let locked_color = self.active_color;
        self.board.fill_cells(&self.active_cells, locked_color);
        self.stats.record_lock();
        tracing::debug!(
            kind = %self.active_kind.as_char(),
            cells = ?self.active_cells,
            locked_pieces = self.stats.locked_pieces(),
            "piece locked"
        );

        self.active_kind = self.rng.random();
        self.active_cells = self.active_kind.spawn_cells(self.board.size());
        self.active_color = self
            .palette
            .iter()
            .copied()
            .filter(|&color| color != locked_color)
            .choose(&mut self.rng)
            .unwrap_or(locked_color);
    }

    #[must_use]
    pub fn board(&self) -> &Board<C> {
        &self.board
    }

    /// Mutable access to the board for setting up scenarios.
    ///
    /// Cells written here are treated exactly like locked cells.
    pub fn board_mut(&mut self) -> &mut Board<C> {
        &mut self.board
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board.size()
    }

    #[must_use]
    pub fn empty(&self) -> C {
        self.board.empty()
    }

    #[must_use]
    pub fn palette(&self) -> &[C] {
        &self.palette
    }

    #[must_use]
    pub fn active_kind(&self) -> Tetromino {
        self.active_kind
    }

    #[must_use]
    pub fn active_cells(&self) -> &[Vector2; 4] {
        &self.active_cells
    }

    #[must_use]
    pub fn active_color(&self) -> C {
        self.active_color
    }

    /// Replaces the active piece, for setting up scenarios.
    ///
    /// The cells are taken as is; they are not checked against the board.
    pub fn set_active(&mut self, kind: Tetromino, cells: [Vector2; 4], color: C) {
        self.active_kind = kind;
        self.active_cells = cells;
        self.active_color = color;
    }

    /// Returns the value shown at `pos`: the active color if the active piece
    /// covers it, otherwise the board cell.
    #[must_use]
    pub fn visible_cell(&self, pos: Vector2) -> Option<C> {
        if self.active_cells.contains(&pos) && self.board.size().contains(pos) {
            return Some(self.active_color);
        }
        self.board.get(pos)
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }
}
