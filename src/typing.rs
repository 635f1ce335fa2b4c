//! Intro typing animation.
//!
//! Reveals an ordered list of lines one grapheme cluster at a time. Each
//! character tick either reveals the next grapheme and asks for another tick
//! after [`TypingTiming::char_interval`], or, when the line is exhausted, asks
//! for a [`TypingTimer::LineBreak`] after [`TypingTiming::line_pause`]. The
//! line break appends `'\n'` and moves on to the next line. After the last
//! line the state freezes as complete.
//!
//! The state machine never sleeps or spawns anything itself: every step
//! returns the [`Effect`] the host should schedule next.
//!
//! # Examples
//!
//! ```
//! use termfolio::effect::{Timer, TypingTimer};
//! use termfolio::typing::{TypingOutcome, TypingState, TypingTiming};
//!
//! let mut typing = TypingState::new(["hi"], TypingTiming::default());
//! assert!(matches!(typing.start(), TypingOutcome::Scheduled(_)));
//! typing.on_timer(TypingTimer::NextChar);
//! typing.on_timer(TypingTimer::NextChar);
//! assert_eq!(typing.revealed(), "hi");
//! ```

use crate::effect::{Effect, Timer, TypingTimer};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Delays driving the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay between two revealed characters.
    pub char_interval: Duration,
    /// Pause between the end of a line and its line break.
    pub line_pause: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            char_interval: Duration::from_millis(50),
            line_pause: Duration::from_millis(500),
        }
    }
}

/// What a step of the animation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingOutcome {
    /// More work: the host must schedule this effect.
    Scheduled(Effect),
    /// The animation just finished. Returned exactly once per state.
    Completed,
    /// Nothing to do (not started, already complete, or a stale timer).
    Idle,
}

/// Progress of the typing animation.
#[derive(Clone, Debug)]
pub struct TypingState {
    lines: Vec<String>,
    revealed: String,
    source_index: usize,
    char_index: usize,
    byte_offset: usize,
    timing: TypingTiming,
    started: bool,
    complete: bool,
    awaiting: Option<TypingTimer>,
}

impl TypingState {
    /// Create an animation over `lines`. Nothing happens until [`start`](Self::start).
    pub fn new<I, S>(lines: I, timing: TypingTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            revealed: String::new(),
            source_index: 0,
            char_index: 0,
            byte_offset: 0,
            timing,
            started: false,
            complete: false,
            awaiting: None,
        }
    }

    /// Text revealed so far, line breaks included.
    #[must_use]
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Index of the line currently being typed.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Number of graphemes of the current line already revealed.
    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Whether every line has been typed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether [`start`](Self::start) has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Begin the animation. Only the first call has any effect.
    pub fn start(&mut self) -> TypingOutcome {
        if self.started {
            return TypingOutcome::Idle;
        }
        self.started = true;
        if self.lines.is_empty() {
            return self.complete();
        }
        self.expect(TypingTimer::NextChar, self.timing.char_interval)
    }

    /// Handle a fired timer.
    pub fn on_timer(&mut self, timer: TypingTimer) -> TypingOutcome {
        if self.complete || self.awaiting != Some(timer) {
            return TypingOutcome::Idle;
        }
        self.awaiting = None;

        match timer {
            TypingTimer::NextChar => {
                let line = &self.lines[self.source_index];
                match line[self.byte_offset..].graphemes(true).next() {
                    Some(grapheme) => {
                        self.revealed.push_str(grapheme);
                        self.byte_offset += grapheme.len();
                        self.char_index += 1;
                        self.expect(TypingTimer::NextChar, self.timing.char_interval)
                    }
                    None => self.expect(TypingTimer::LineBreak, self.timing.line_pause),
                }
            }
            TypingTimer::LineBreak => {
                self.revealed.push('\n');
                self.source_index += 1;
                self.char_index = 0;
                self.byte_offset = 0;
                if self.source_index >= self.lines.len() {
                    self.complete()
                } else {
                    self.expect(TypingTimer::NextChar, self.timing.char_interval)
                }
            }
        }
    }

    /// Reveal everything that is left and complete immediately.
    ///
    /// Any timer still in flight is ignored when it fires.
    pub fn finish_now(&mut self) -> TypingOutcome {
        if self.complete {
            return TypingOutcome::Idle;
        }
        self.started = true;
        if let Some(line) = self.lines.get(self.source_index) {
            self.revealed.push_str(&line[self.byte_offset..]);
            self.revealed.push('\n');
            for line in &self.lines[self.source_index + 1..] {
                self.revealed.push_str(line);
                self.revealed.push('\n');
            }
        }
        self.source_index = self.lines.len();
        self.char_index = 0;
        self.byte_offset = 0;
        self.complete()
    }

    fn expect(&mut self, timer: TypingTimer, delay: Duration) -> TypingOutcome {
        self.awaiting = Some(timer);
        TypingOutcome::Scheduled(Effect::schedule(delay, Timer::Typing(timer)))
    }

    fn complete(&mut self) -> TypingOutcome {
        self.complete = true;
        self.awaiting = None;
        TypingOutcome::Completed
    }
}
