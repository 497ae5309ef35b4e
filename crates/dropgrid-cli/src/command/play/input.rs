use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dropgrid_engine::Move;

use crate::ui::widgets::KeyBinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Move(Move),
    Quit,
}

pub(crate) const PLAYING_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Down"),
    (&["↑"], "Rotate"),
    (&["q", "Esc"], "Quit"),
];

pub(crate) const GAME_OVER_BINDINGS: &[KeyBinding] = &[(&["q", "Esc"], "Quit")];

/// Maps a key press to a game input. Key releases are ignored.
pub(crate) fn map_key(key: &KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let input = match key.code {
        KeyCode::Left => Input::Move(Move::Left),
        KeyCode::Right => Input::Move(Move::Right),
        KeyCode::Down => Input::Move(Move::Down),
        KeyCode::Up => Input::Move(Move::Rotate),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(&press(KeyCode::Left)), Some(Input::Move(Move::Left)));
        assert_eq!(map_key(&press(KeyCode::Right)), Some(Input::Move(Move::Right)));
        assert_eq!(map_key(&press(KeyCode::Down)), Some(Input::Move(Move::Down)));
        assert_eq!(map_key(&press(KeyCode::Up)), Some(Input::Move(Move::Rotate)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
        assert_eq!(map_key(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(&release), None);
    }
}
