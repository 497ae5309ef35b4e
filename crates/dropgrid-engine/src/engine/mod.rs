//! Game state and its per-tick transition.
//!
//! - [`GameState`] - Board, active piece, statistics, phase and random source
//! - [`GameStats`] - Rows cleared and pieces locked
//! - [`PieceSeed`] - Seed for reproducible games
//! - [`Move`] / [`Phase`] - Inputs and the game's lifecycle
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`] with [`init`] (or [`GameState::with_seed`])
//! 2. Call [`update`] once per tick with the current time, the fall speed and
//!    at most one [`Move`]
//! 3. A piece that comes to rest is locked, full rows are cleared and a new
//!    piece spawns at the top
//! 4. Repeat until [`Phase::GameOver`]
//!
//! # Example
//!
//! ```
//! use dropgrid_engine::{BoardSize, Color, Move, init, update};
//!
//! let mut state = init(BoardSize::new(10, 20)?, Color::PALETTE, Color::EMPTY)?;
//!
//! for (tick, next_move) in [None, Some(Move::Left), Some(Move::Rotate), Some(Move::Down)]
//!     .into_iter()
//!     .enumerate()
//! {
//!     state = update(state, tick as u64 * 100, 500, next_move);
//! }
//!
//! assert!(state.phase().is_playing());
//! # Ok::<(), dropgrid_engine::InitError>(())
//! ```

pub use self::{game_state::*, game_stats::*, piece_seed::*};

mod game_state;
mod game_stats;
mod piece_seed;
