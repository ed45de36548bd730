//! Keyboard handling: maps crossterm key events to game commands
//!
//! Keys without a binding map to nothing; the game never sees them.

use crate::game::Command;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Game(Command),
    Quit,
}

/// Key bindings - each command can have several keys bound to it
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub soft_drop: Vec<KeyCode>,
    pub hard_drop: Vec<KeyCode>,
    pub rotate_cw: Vec<KeyCode>,
    pub rotate_ccw: Vec<KeyCode>,
    pub new_game: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into a KeyCode
    fn parse_key(s: &str) -> KeyCode {
        match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            s if s.chars().count() == 1 => KeyCode::Char(s.chars().next().unwrap()),
            _ => KeyCode::Null,
        }
    }

    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter().map(|s| Self::parse_key(s)).collect()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: Self::parse_keys(&settings.keys.move_left),
            move_right: Self::parse_keys(&settings.keys.move_right),
            soft_drop: Self::parse_keys(&settings.keys.soft_drop),
            hard_drop: Self::parse_keys(&settings.keys.hard_drop),
            rotate_cw: Self::parse_keys(&settings.keys.rotate_cw),
            rotate_ccw: Self::parse_keys(&settings.keys.rotate_ccw),
            new_game: Self::parse_keys(&settings.keys.new_game),
            quit: Self::parse_keys(&settings.keys.quit),
        }
    }

    /// Map a key event to an application input, if any
    pub fn map(&self, key: KeyEvent) -> Option<AppInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppInput::Quit);
        }

        let code = normalize_key(key.code);
        if self.move_left.contains(&code) {
            Some(AppInput::Game(Command::MoveLeft))
        } else if self.move_right.contains(&code) {
            Some(AppInput::Game(Command::MoveRight))
        } else if self.soft_drop.contains(&code) {
            Some(AppInput::Game(Command::SoftDrop))
        } else if self.hard_drop.contains(&code) {
            Some(AppInput::Game(Command::HardDrop))
        } else if self.rotate_cw.contains(&code) {
            Some(AppInput::Game(Command::RotateCw))
        } else if self.rotate_ccw.contains(&code) {
            Some(AppInput::Game(Command::RotateCcw))
        } else if self.new_game.contains(&code) {
            Some(AppInput::Game(Command::NewGame))
        } else if self.quit.contains(&code) {
            Some(AppInput::Quit)
        } else {
            None
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec![KeyCode::Left],
            move_right: vec![KeyCode::Right],
            soft_drop: vec![KeyCode::Down],
            hard_drop: vec![KeyCode::Char(' ')],
            rotate_cw: vec![KeyCode::Up, KeyCode::Char('x')],
            rotate_ccw: vec![KeyCode::Char('z')],
            new_game: vec![KeyCode::Char('r')],
            quit: vec![KeyCode::Char('q')],
        }
    }
}

/// Normalize key codes for consistent matching
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.map(press(KeyCode::Left)),
            Some(AppInput::Game(Command::MoveLeft))
        );
        assert_eq!(
            bindings.map(press(KeyCode::Char(' '))),
            Some(AppInput::Game(Command::HardDrop))
        );
        assert_eq!(
            bindings.map(press(KeyCode::Char('z'))),
            Some(AppInput::Game(Command::RotateCcw))
        );
        assert_eq!(bindings.map(press(KeyCode::Char('q'))), Some(AppInput::Quit));
    }

    #[test]
    fn test_uppercase_keys_match() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.map(press(KeyCode::Char('X'))),
            Some(AppInput::Game(Command::RotateCw))
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.map(press(KeyCode::Char('k'))), None);
        assert_eq!(bindings.map(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.map(key), Some(AppInput::Quit));
    }
}
