//! Keypad and display buffer.
//!
//! Models the calculator face: sixteen keys in a 4x4 grid plus a clear key.
//! Keys append to the display buffer until `=` hands the buffer to the
//! evaluator and replaces it with whatever comes back.

use crate::calculator::EvaluationService;

/// Key rows as printed on the calculator face.
pub const LAYOUT: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', '.', '=', '+'],
];

/// A single keypad key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Digits, the decimal point and operators; appended verbatim.
    Input(char),
    Equals,
    Clear,
}

impl Key {
    /// Map a typed character to a key, if the keypad has one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' | '+' | '-' | '*' | '/' => Some(Self::Input(c)),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => None,
        }
    }
}

/// The display buffer wired to an evaluator.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    service: EvaluationService,
    buffer: String,
}

impl Keypad {
    pub fn new(service: EvaluationService) -> Self {
        Self {
            service,
            buffer: String::new(),
        }
    }

    /// Current display contents.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Input(c) => self.buffer.push(c),
            Key::Equals => {
                let result = self.service.evaluate(&self.buffer);
                tracing::debug!(input = %self.buffer, %result, "equals pressed");
                self.buffer = result;
            }
            Key::Clear => self.buffer.clear(),
        }
    }

    /// Press every recognised key in `line`, returning the characters
    /// that have no key.
    pub fn press_all(&mut self, line: &str) -> Vec<char> {
        let mut ignored = Vec::new();
        for c in line.chars() {
            match Key::from_char(c) {
                Some(key) => self.press(key),
                None if c.is_whitespace() => {}
                None => ignored.push(c),
            }
        }
        ignored
    }

    /// Render the key grid, one row per line, with the clear key last.
    pub fn render_layout() -> String {
        let mut out = String::new();
        for row in LAYOUT {
            let keys: Vec<String> = row.iter().map(|k| format!("[{k}]")).collect();
            out.push_str(&keys.join(" "));
            out.push('\n');
        }
        out.push_str("[      C      ]");
        out
    }
}
