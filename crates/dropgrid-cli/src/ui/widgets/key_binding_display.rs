use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys (shown joined by `/`) and what they do.
pub type KeyBinding = (&'static [&'static str], &'static str);

/// Centered one-line help, e.g. `←/→ Move | q Quit`.
#[derive(Debug)]
pub struct KeyBindingDisplay {
    bindings: &'static [KeyBinding],
}

impl KeyBindingDisplay {
    pub fn new(bindings: &'static [KeyBinding]) -> Self {
        Self { bindings }
    }

    fn spans(&self) -> impl Iterator<Item = Span<'static>> {
        self.bindings
            .iter()
            .enumerate()
            .flat_map(|(i, (keys, desc))| {
                let separator = (i > 0).then(|| Span::styled(" | ", SEPARATOR_STYLE));
                separator.into_iter().chain([
                    Span::styled(keys.join("/"), KEY_STYLE),
                    Span::raw(" "),
                    Span::styled(*desc, DESCRIPTION_STYLE),
                ])
            })
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from_iter(self.spans()).centered().render(area, buf);
    }
}
