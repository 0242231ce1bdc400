//! Terminal input translated into UI intents.
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// What a terminal event asks the UI to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    MoveCursor { dx: i8, dy: i8 },
    /// Click the tile under the keyboard cursor.
    ClickCursor,
    /// Click a tile by screen coordinates (mouse).
    ClickScreen { column: u16, row: u16 },
    EndTurn,
    Refresh,
    CloseModal,
    ModalUp,
    ModalDown,
    None,
}

/// Translate a terminal event. `modal_open` reroutes navigation keys to the
/// village menu.
pub fn translate(event: &Event, modal_open: bool) -> InputAction {
    match event {
        Event::Key(key) => translate_key(key, modal_open),
        Event::Mouse(mouse) if !modal_open => translate_mouse(mouse),
        _ => InputAction::None,
    }
}

fn translate_key(key: &KeyEvent, modal_open: bool) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if modal_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => InputAction::CloseModal,
            KeyCode::Up | KeyCode::Char('k') => InputAction::ModalUp,
            KeyCode::Down | KeyCode::Char('j') => InputAction::ModalDown,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => InputAction::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('j') => InputAction::MoveCursor { dx: 0, dy: 1 },
        KeyCode::Left | KeyCode::Char('h') => InputAction::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('l') => InputAction::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::ClickCursor,
        KeyCode::Char('e') => InputAction::EndTurn,
        KeyCode::Char('r') => InputAction::Refresh,
        _ => InputAction::None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputAction::ClickScreen {
            column: mouse.column,
            row: mouse.row,
        },
        _ => InputAction::None,
    }
}
