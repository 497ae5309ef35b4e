use dropgrid_engine::Color;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One board cell, two terminal columns wide.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_color(color: Color) -> Self {
        let style = match color {
            Color::White => return Self::new(style::EMPTY_DOT, "."),
            Color::Red => style::RED_BLOCK,
            Color::Blue => style::BLUE_BLOCK,
            Color::Green => style::GREEN_BLOCK,
            Color::Yellow => style::YELLOW_BLOCK,
            Color::Purple => style::PURPLE_BLOCK,
            Color::Orange => style::ORANGE_BLOCK,
            Color::Cyan => style::CYAN_BLOCK,
        };
        Self::new(style, "")
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
