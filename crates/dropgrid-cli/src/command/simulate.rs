use std::{convert::Infallible, io, path::PathBuf};

use dropgrid_engine::{Color, GameState, Move, PieceSeed};
use dropgrid_runtime::{Adapter, Frame, Globals, MoveQueue, Runtime};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{command::GameArg, logging};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    pub(super) game: GameArg,
    /// Stop after this many frames if the game has not ended
    #[clap(long, default_value_t = 10_000)]
    max_frames: u64,
    /// Simulated milliseconds between two frames
    #[clap(long, default_value_t = 50)]
    frame_ms: u64,
    /// Write logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

/// Summary of a headless run, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SimulationReport {
    seed: PieceSeed,
    width: usize,
    height: usize,
    speed_ms: u64,
    frames: u64,
    score: usize,
    locked_pieces: usize,
    game_over: bool,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    logging::init(arg.log_file.as_deref())?;
    let report = simulate(arg)?;
    serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
    println!();
    Ok(())
}

fn simulate(arg: &SimulateArg) -> anyhow::Result<SimulationReport> {
    let globals = arg.game.globals(1)?;
    let seed = arg.game.seed();
    let state = GameArg::new_game(&globals, seed)?;

    let mut adapter = HeadlessAdapter::new(globals, seed, arg.frame_ms, arg.max_frames);
    let Ok(outcome) = Runtime::new().run(&mut adapter, state);

    let report = SimulationReport {
        seed,
        width: globals.board_size.width(),
        height: globals.board_size.height(),
        speed_ms: globals.speed_ms,
        frames: outcome.frames,
        score: outcome.state.score(),
        locked_pieces: outcome.state.stats().locked_pieces(),
        game_over: outcome.state.is_game_over(),
    };
    tracing::info!(?report, "simulation finished");
    Ok(report)
}

/// Adapter with a virtual clock and a random move stream.
///
/// The move stream is seeded from the game seed, so a run is fully
/// determined by its arguments.
#[derive(Debug)]
struct HeadlessAdapter {
    globals: Globals,
    rng: Pcg32,
    frame_ms: u64,
    max_frames: u64,
    frame: u64,
}

impl HeadlessAdapter {
    fn new(globals: Globals, seed: PieceSeed, frame_ms: u64, max_frames: u64) -> Self {
        let mut seed_rng = Pcg32::from_seed(seed.to_bytes());
        Self {
            globals,
            rng: Pcg32::from_rng(&mut seed_rng),
            frame_ms,
            max_frames,
            frame: 0,
        }
    }
}

impl Adapter<Color> for HeadlessAdapter {
    type Error = Infallible;

    fn globals(&self) -> Globals {
        self.globals
    }

    fn next_frame(&mut self, moves: &mut MoveQueue) -> Result<Frame, Self::Error> {
        if self.frame >= self.max_frames {
            return Ok(Frame::Quit);
        }
        // Idle on about half of the frames so pieces also fall on their own.
        if self.rng.random_bool(0.5) {
            moves.push(self.rng.random::<Move>());
        }
        let now = self.frame.saturating_mul(self.frame_ms);
        self.frame += 1;
        Ok(Frame::At(now))
    }

    fn draw(&mut self, _state: &GameState<Color>) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(max_frames: u64) -> SimulateArg {
        SimulateArg {
            game: GameArg {
                width: 6,
                height: 8,
                speed: 100,
                seed: Some(PieceSeed::from(0x5eed_u128)),
            },
            max_frames,
            frame_ms: 50,
            log_file: None,
        }
    }

    #[test]
    fn test_same_arguments_same_report() {
        let first = simulate(&arg(2_000)).unwrap();
        let second = simulate(&arg(2_000)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stops_at_max_frames_or_game_over() {
        let report = simulate(&arg(2_000)).unwrap();
        assert!(report.frames <= 2_000);
        assert!(report.game_over || report.frames == 2_000);
        assert!(report.locked_pieces > 0);
    }

    #[test]
    fn test_zero_frames() {
        let report = simulate(&arg(0)).unwrap();
        assert_eq!(report.frames, 0);
        assert_eq!(report.score, 0);
        assert_eq!(report.locked_pieces, 0);
        assert!(!report.game_over);
    }

    #[test]
    fn test_report_json() {
        let report = simulate(&arg(10)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], "00000000000000000000000000005eed");
        assert_eq!(json["width"], 6);
        assert_eq!(json["frames"], 10);
        let back: SimulationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
