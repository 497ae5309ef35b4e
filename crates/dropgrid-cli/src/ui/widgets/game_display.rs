use dropgrid_engine::{Color, GameState, Phase};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, KeyBinding, KeyBindingDisplay, StatsDisplay, color, style};

/// Whole play screen: board, stats panel, help line, and the game-over popup.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    state: &'a GameState<Color>,
    playing_help: &'static [KeyBinding],
    game_over_help: &'static [KeyBinding],
}

impl<'a> GameDisplay<'a> {
    pub fn new(state: &'a GameState<Color>) -> Self {
        Self {
            state,
            playing_help: &[],
            game_over_help: &[],
        }
    }

    pub fn help(self, playing: &'static [KeyBinding], game_over: &'static [KeyBinding]) -> Self {
        Self {
            playing_help: playing,
            game_over_help: game_over,
            ..self
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let phase = self.state.phase();
        let border_style = match phase {
            Phase::Playing => color::WHITE,
            Phase::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.state)
            .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
        let stats = StatsDisplay::new(self.state).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let help = KeyBindingDisplay::new(match phase {
            Phase::Playing => self.playing_help,
            Phase::GameOver => self.game_over_help,
        });

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(game_board.height()), Constraint::Length(1)])
                .areas(area);
        let [board_area, stats_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);

        let game_board_width = game_board.width();
        game_board.render(board_area, buf);
        stats.render(stats_area, buf);
        help.render(help_area, buf);

        if phase.is_game_over() {
            let style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(style);
            let text = Text::styled("GAME OVER!!", style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
