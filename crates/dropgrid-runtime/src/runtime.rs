use dropgrid_engine::GameState;

use crate::{
    MoveQueue,
    adapter::{Adapter, Frame},
};

/// Result of a finished [`Runtime::run`].
#[derive(Debug, Clone)]
pub struct Outcome<C> {
    /// State after the last tick.
    pub state: GameState<C>,
    /// Number of ticks driven.
    pub frames: u64,
}

/// Game loop connecting an [`Adapter`] to the engine.
#[derive(Debug, Default)]
pub struct Runtime {
    moves: MoveQueue,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `state` until the game ends or the adapter quits.
    ///
    /// Each iteration:
    ///
    /// 1. `adapter.next_frame()` waits for the frame and queues input
    /// 2. At most one queued move is taken, oldest first
    /// 3. The engine advances by one tick at the frame's timestamp
    /// 4. `adapter.draw()` displays the new state
    ///
    /// After the terminal state has been drawn, `adapter.game_over()` is
    /// called once and the loop ends. Moves still queued when the loop ends
    /// are discarded, so the same runtime can drive another game.
    pub fn run<A, C>(&mut self, adapter: &mut A, state: GameState<C>) -> Result<Outcome<C>, A::Error>
    where
        A: Adapter<C>,
        C: Copy + Eq,
    {
        let result = self.drive(adapter, state);
        if !self.moves.is_empty() {
            tracing::debug!(discarded = self.moves.len(), "dropping queued moves");
            self.moves.clear();
        }
        result
    }

    fn drive<A, C>(&mut self, adapter: &mut A, mut state: GameState<C>) -> Result<Outcome<C>, A::Error>
    where
        A: Adapter<C>,
        C: Copy + Eq,
    {
        let globals = adapter.globals();
        let mut frames = 0;

        loop {
            let now = match adapter.next_frame(&mut self.moves)? {
                Frame::At(now) => now,
                Frame::Quit => {
                    tracing::debug!(frames, "quit requested");
                    break;
                }
            };

            let next_move = self.moves.pop();
            tracing::trace!(now, ?next_move, queued = self.moves.len(), "frame");
            state = state.update(now, globals.speed_ms, next_move);
            frames += 1;
            adapter.draw(&state)?;

            if state.is_game_over() {
                adapter.game_over(&state)?;
                break;
            }
        }

        Ok(Outcome { state, frames })
    }
}
