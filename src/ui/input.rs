use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::key::{KeyInput, MenuKey, Modifiers};

/// Translate a terminal key press into the engine's key model.
pub fn key_input(key: KeyEvent) -> KeyInput {
    let menu_key = match key.code {
        KeyCode::Enter => MenuKey::Enter,
        KeyCode::Char(' ') => MenuKey::Space,
        KeyCode::Esc => MenuKey::Escape,
        KeyCode::Up => MenuKey::ArrowUp,
        KeyCode::Down => MenuKey::ArrowDown,
        KeyCode::Left => MenuKey::ArrowLeft,
        KeyCode::Right => MenuKey::ArrowRight,
        KeyCode::Home => MenuKey::Home,
        KeyCode::End => MenuKey::End,
        KeyCode::Tab | KeyCode::BackTab => MenuKey::Tab,
        KeyCode::Char(ch) => MenuKey::Char(ch),
        _ => MenuKey::Other,
    };
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        meta: key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    KeyInput::with_modifiers(menu_key, modifiers)
}
