use std::{io, time::Instant};

use crossterm::event::{self, Event};
use dropgrid_engine::{Color, GameState};
use dropgrid_runtime::{Adapter, Frame, FramePacer, Globals, MonotonicClock, MoveQueue};
use ratatui::DefaultTerminal;

use crate::{
    command::play::input::{self, GAME_OVER_BINDINGS, Input, PLAYING_BINDINGS},
    ui::widgets::GameDisplay,
};

/// Adapter drawing to the terminal and reading arrow keys.
pub(crate) struct TerminalAdapter<'a> {
    terminal: &'a mut DefaultTerminal,
    globals: Globals,
    pacer: FramePacer,
    clock: MonotonicClock,
    quit_requested: bool,
}

impl<'a> TerminalAdapter<'a> {
    pub(crate) fn new(terminal: &'a mut DefaultTerminal, globals: Globals) -> Self {
        Self {
            terminal,
            globals,
            pacer: FramePacer::new(globals.frame_interval),
            clock: MonotonicClock::new(),
            quit_requested: false,
        }
    }

    fn handle_event(&mut self, event: &Event, moves: &mut MoveQueue) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        match input::map_key(&key) {
            Some(Input::Move(next_move)) => moves.push(next_move),
            Some(Input::Quit) => self.quit_requested = true,
            None => {}
        }
    }
}

impl Adapter<Color> for TerminalAdapter<'_> {
    type Error = io::Error;

    fn globals(&self) -> Globals {
        self.globals
    }

    fn next_frame(&mut self, moves: &mut MoveQueue) -> io::Result<Frame> {
        loop {
            if self.quit_requested {
                return Ok(Frame::Quit);
            }
            let now = Instant::now();
            if self.pacer.is_due(now) {
                self.pacer.mark(now);
                return Ok(Frame::At(self.clock.millis_at(now)));
            }
            if event::poll(self.pacer.timeout(now))? {
                let event = event::read()?;
                self.handle_event(&event, moves);
            }
        }
    }

    fn draw(&mut self, state: &GameState<Color>) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let display = GameDisplay::new(state).help(PLAYING_BINDINGS, GAME_OVER_BINDINGS);
            frame.render_widget(display, frame.area());
        })?;
        Ok(())
    }

    /// Keeps the final screen up until a quit key is pressed.
    fn game_over(&mut self, state: &GameState<Color>) -> io::Result<()> {
        loop {
            match event::read()? {
                Event::Key(key) if input::map_key(&key) == Some(Input::Quit) => return Ok(()),
                Event::Resize(..) => self.draw(state)?,
                _ => {}
            }
        }
    }
}
