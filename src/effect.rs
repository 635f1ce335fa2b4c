//! Side effects requested by view state machines.
//!
//! A view's `update` mutates its own state and returns a list of [`Effect`]s.
//! Only the host (see [`crate::app`]) executes them, which keeps the views
//! deterministic and testable without a terminal.

use std::time::Duration;

/// Timer kinds a view can ask the host to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Intro animation step.
    Typing(TypingTimer),
    /// Reload after `exit`.
    Reload,
}

/// Steps of the intro typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypingTimer {
    /// Reveal the next character of the current line.
    NextChar,
    /// The pause after a line ended: emit the line break and move on.
    LineBreak,
}

/// A side effect for the host to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `timer` back to the view after `delay`.
    Schedule { delay: Duration, timer: Timer },
    /// Open a URL in the user's browser.
    OpenUrl(String),
    /// Discard the view and start a fresh one.
    Reload,
}

impl Effect {
    /// Shorthand for [`Effect::Schedule`].
    #[must_use]
    pub fn schedule(delay: Duration, timer: Timer) -> Self {
        Self::Schedule { delay, timer }
    }

    /// The scheduled timer, if this is a schedule request.
    #[must_use]
    pub fn timer(&self) -> Option<Timer> {
        match self {
            Self::Schedule { timer, .. } => Some(*timer),
            _ => None,
        }
    }
}

impl From<TypingTimer> for Timer {
    fn from(timer: TypingTimer) -> Self {
        Self::Typing(timer)
    }
}
