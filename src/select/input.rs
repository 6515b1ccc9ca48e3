use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Minimal single-line text input backing the dropdown's search box.
#[derive(Debug, Default)]
pub struct SearchInput {
    text: String,
}

impl SearchInput {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Apply a key event to the text. Returns true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.text.push(c);
                true
            }
            KeyCode::Backspace => self.text.pop().is_some(),
            _ => false,
        }
    }
}
