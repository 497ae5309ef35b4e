use std::path::PathBuf;

use dropgrid_runtime::{Globals, Runtime};

use crate::{
    command::{GameArg, play::terminal_adapter::TerminalAdapter},
    logging,
};

mod input;
mod terminal_adapter;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Frames per second
    #[clap(long, default_value_t = Globals::DEFAULT_FPS)]
    fps: u32,
    /// Write logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            game: GameArg::default(),
            fps: Globals::DEFAULT_FPS,
            log_file: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        game,
        fps,
        log_file,
    } = arg;

    logging::init(log_file.as_deref())?;
    let globals = game.globals(*fps)?;
    let seed = game.seed();
    let state = GameArg::new_game(&globals, seed)?;

    let outcome = ratatui::run(|terminal| {
        let mut adapter = TerminalAdapter::new(terminal, globals);
        Runtime::new().run(&mut adapter, state)
    })?;

    println!(
        "score: {}, locked pieces: {}, seed: {seed}",
        outcome.state.score(),
        outcome.state.stats().locked_pieces()
    );
    Ok(())
}
