use std::iter;

use dropgrid_engine::{Color, GameState, Vector2};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// Board cells with the active piece drawn on top.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    state: &'a GameState<Color>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(state: &'a GameState<Color>) -> Self {
        Self { state, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let columns = u16::try_from(self.state.board_size().width()).unwrap_or(u16::MAX);
        columns.saturating_mul(BlockDisplay::width())
            + super::block_margin(self.block.as_ref()).width
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(self.state.board_size().height()).unwrap_or(u16::MAX);
        rows.saturating_mul(BlockDisplay::height())
            + super::block_margin(self.block.as_ref()).height
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let size = self.state.board_size();
        let col_constraints = (0..size.width()).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..size.height()).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        for (y, row_area) in iter::zip(0.., vertical.split(area).iter()) {
            for (x, cell_area) in iter::zip(0.., horizontal.split(*row_area).iter()) {
                let Some(color) = self.state.visible_cell(Vector2::new(x, y)) else {
                    continue;
                };
                BlockDisplay::from_color(color).render(*cell_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dropgrid_engine::{BoardSize, PieceSeed, Tetromino};
    use ratatui::style::Style;

    use super::*;
    use crate::ui::widgets::style;

    fn state() -> GameState<Color> {
        let mut state = GameState::with_seed(
            BoardSize::new(4, 3).unwrap(),
            Color::PALETTE,
            Color::EMPTY,
            PieceSeed::from(9_u128),
        )
        .unwrap();
        state.board_mut().set(Vector2::new(3, 2), Color::Red);
        state.set_active(
            Tetromino::O,
            [
                Vector2::new(0, 0),
                Vector2::new(1, 0),
                Vector2::new(0, 1),
                Vector2::new(1, 1),
            ],
            Color::Cyan,
        );
        state
    }

    fn cell_style(buf: &Buffer, x: u16, y: u16) -> Style {
        buf[(x, y)].style()
    }

    #[test]
    fn test_size() {
        let state = state();
        let board = BoardDisplay::new(&state);
        assert_eq!((board.width(), board.height()), (8, 3));
        let board = board.block(BlockWidget::bordered());
        assert_eq!((board.width(), board.height()), (10, 5));
    }

    #[test]
    fn test_render_cells() {
        let state = state();
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        BoardDisplay::new(&state).render(area, &mut buf);

        // Active piece in the top-left 2x2 cells, two columns per cell.
        for (x, y) in [(0, 0), (1, 0), (3, 1)] {
            assert_eq!(cell_style(&buf, x, y).bg, style::CYAN_BLOCK.bg);
        }
        assert_eq!(cell_style(&buf, 6, 2).bg, style::RED_BLOCK.bg);
        assert_eq!(cell_style(&buf, 4, 0).bg, style::EMPTY_DOT.bg);
        assert_eq!(buf[(4, 0)].symbol(), ".");
    }
}
