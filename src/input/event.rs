//! Terminal event types.

use crate::input::keyboard::KeyEvent;

/// An input event decoded from the terminal byte stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Text delivered through bracketed paste.
    Paste(String),
    /// A `CSI 8 ; rows ; cols t` size report.
    Resize(ResizeEvent),
    FocusGained,
    FocusLost,
}

impl Event {
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: u32,
    pub height: u32,
}
