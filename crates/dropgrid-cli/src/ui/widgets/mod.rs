use ratatui::{
    layout::{Rect, Size},
    widgets::Block as BlockWidget,
};

pub use self::{
    block_display::*, board_display::*, game_display::*, key_binding_display::*,
    stats_display::*,
};

mod block_display;
mod board_display;
mod game_display;
mod key_binding_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const PURPLE: Color = Color::Rgb(160, 32, 240);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    /// Cell painted in one color, symbol included.
    const fn solid(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = Style::new().fg(color::WHITE).bg(color::BLACK);
    pub const EMPTY_DOT: Style = Style::new().fg(color::GRAY).bg(color::BLACK);

    pub const RED_BLOCK: Style = solid(color::RED);
    pub const BLUE_BLOCK: Style = solid(color::BLUE);
    pub const GREEN_BLOCK: Style = solid(color::GREEN);
    pub const YELLOW_BLOCK: Style = solid(color::YELLOW);
    pub const PURPLE_BLOCK: Style = solid(color::PURPLE);
    pub const ORANGE_BLOCK: Style = solid(color::ORANGE);
    pub const CYAN_BLOCK: Style = solid(color::CYAN);
}

/// Columns and rows taken by the borders and padding of `block`.
fn block_margin(block: Option<&BlockWidget>) -> Size {
    let Some(block) = block else {
        return Size::new(0, 0);
    };
    let outer = Rect::new(0, 0, 64, 64);
    let inner = block.inner(outer);
    Size::new(outer.width - inner.width, outer.height - inner.height)
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Padding;

    use super::*;

    #[test]
    fn test_block_margin() {
        assert_eq!(block_margin(None), Size::new(0, 0));
        assert_eq!(block_margin(Some(&BlockWidget::bordered())), Size::new(2, 2));
        let padded = BlockWidget::bordered().padding(Padding::horizontal(1));
        assert_eq!(block_margin(Some(&padded)), Size::new(4, 2));
    }
}
