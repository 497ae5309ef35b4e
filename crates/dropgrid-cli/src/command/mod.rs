use clap::{Parser, Subcommand};
use dropgrid_engine::{BoardSize, Color, GameState, PieceSeed};
use dropgrid_runtime::Globals;
use rand::Rng as _;

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Run a game headless with random input and print a JSON report
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

/// Settings shared by every mode that starts a game.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Board width in cells
    #[clap(long, default_value_t = BoardSize::DEFAULT.width())]
    width: usize,
    /// Board height in cells
    #[clap(long, default_value_t = BoardSize::DEFAULT.height())]
    height: usize,
    /// Milliseconds a piece rests before falling one row
    #[clap(long, default_value_t = Globals::DEFAULT_SPEED_MS)]
    speed: u64,
    /// Seed for piece and color selection (32 hex digits); random if omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
}

impl Default for GameArg {
    fn default() -> Self {
        Self {
            width: BoardSize::DEFAULT.width(),
            height: BoardSize::DEFAULT.height(),
            speed: Globals::DEFAULT_SPEED_MS,
            seed: None,
        }
    }
}

impl GameArg {
    pub(crate) fn globals(&self, fps: u32) -> anyhow::Result<Globals> {
        let board_size = BoardSize::new(self.width, self.height)?;
        Ok(Globals::with_fps(board_size, self.speed, fps))
    }

    pub(crate) fn seed(&self) -> PieceSeed {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    pub(crate) fn new_game(globals: &Globals, seed: PieceSeed) -> anyhow::Result<GameState<Color>> {
        let state = GameState::with_seed(globals.board_size, Color::PALETTE, Color::EMPTY, seed)?;
        tracing::info!(
            %seed,
            width = globals.board_size.width(),
            height = globals.board_size.height(),
            speed_ms = globals.speed_ms,
            "new game"
        );
        Ok(state)
    }
}
