use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

/// A single input event, identified the same way it is named to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Backspace,
    Esc,
    CtrlC,
    Char(char),
    Other(String),
}

impl Key {
    pub fn parse(name: &str) -> Self {
        match name {
            "up" => Key::Up,
            "down" => Key::Down,
            "enter" => Key::Enter,
            "backspace" => Key::Backspace,
            "esc" => Key::Esc,
            "ctrl+c" => Key::CtrlC,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

/// Picks key presses out of the terminal event stream. Releases and repeats
/// are dropped so one physical press is one key.
pub fn key_from_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => Some(Key::from(key_event)),
        _ => None,
    }
}

impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key_event.modifiers.contains(KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if ctrl => Key::CtrlC,
            KeyCode::Char(c) if ctrl => Key::Other(format!("ctrl+{}", c)),
            KeyCode::Char(c) if alt => Key::Other(format!("alt+{}", c)),
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Esc => Key::Esc,
            KeyCode::Left => Key::Other("left".to_string()),
            KeyCode::Right => Key::Other("right".to_string()),
            KeyCode::Home => Key::Other("home".to_string()),
            KeyCode::End => Key::Other("end".to_string()),
            KeyCode::PageUp => Key::Other("pgup".to_string()),
            KeyCode::PageDown => Key::Other("pgdown".to_string()),
            KeyCode::Tab => Key::Other("tab".to_string()),
            KeyCode::BackTab => Key::Other("shift+tab".to_string()),
            KeyCode::Delete => Key::Other("delete".to_string()),
            KeyCode::Insert => Key::Other("insert".to_string()),
            KeyCode::F(n) => Key::Other(format!("f{}", n)),
            other => Key::Other(format!("{:?}", other).to_lowercase()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Enter => write!(f, "enter"),
            Key::Backspace => write!(f, "backspace"),
            Key::Esc => write!(f, "esc"),
            Key::CtrlC => write!(f, "ctrl+c"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Other(name) => write!(f, "{}", name),
        }
    }
}
