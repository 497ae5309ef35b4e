use std::time::Duration;

use dropgrid_engine::{BoardSize, GameState};

use crate::MoveQueue;

/// Per-session settings reported by an [`Adapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Globals {
    pub board_size: BoardSize,
    /// Milliseconds a piece rests before it falls by one row.
    pub speed_ms: u64,
    /// Target time between two frames.
    pub frame_interval: Duration,
}

impl Globals {
    pub const DEFAULT_SPEED_MS: u64 = 500;
    pub const DEFAULT_FPS: u32 = 60;

    /// Creates settings with a frame interval derived from a frame rate.
    ///
    /// A rate of zero is treated as one frame per second.
    #[must_use]
    pub fn with_fps(board_size: BoardSize, speed_ms: u64, fps: u32) -> Self {
        Self {
            board_size,
            speed_ms,
            frame_interval: Duration::from_secs(1) / fps.max(1),
        }
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::with_fps(
            BoardSize::DEFAULT,
            Self::DEFAULT_SPEED_MS,
            Self::DEFAULT_FPS,
        )
    }
}

/// What the adapter wants the runtime to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Frame {
    /// Run one tick at this monotonic timestamp (ms).
    At(u64),
    /// Stop the game.
    Quit,
}

/// Host environment that drives a game and displays it.
///
/// The adapter owns time, input and output. [`Runtime::run`] asks it for the
/// next frame, feeds the frame's timestamp and at most one queued move into
/// the engine, and hands the resulting state back for drawing.
///
/// [`Runtime::run`]: crate::Runtime::run
pub trait Adapter<C> {
    type Error;

    /// Returns the settings for this session.
    fn globals(&self) -> Globals;

    /// Waits until the next frame is due.
    ///
    /// Any input that arrives while waiting is pushed onto `moves`.
    fn next_frame(&mut self, moves: &mut MoveQueue) -> Result<Frame, Self::Error>;

    /// Displays `state`. Called once per frame, after the tick.
    fn draw(&mut self, state: &GameState<C>) -> Result<(), Self::Error>;

    /// Called once after the final state has been drawn.
    fn game_over(&mut self, state: &GameState<C>) -> Result<(), Self::Error> {
        let _ = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_globals() {
        let globals = Globals::default();
        assert_eq!(globals.board_size, BoardSize::new(10, 20).unwrap());
        assert_eq!(globals.speed_ms, 500);
        assert_eq!(globals.frame_interval, Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let globals = Globals::with_fps(BoardSize::DEFAULT, 100, 0);
        assert_eq!(globals.frame_interval, Duration::from_secs(1));
    }
}
