//! Resume terminal view state.
//!
//! A command line over a fixed list of resume sections. Input is collected
//! in a line buffer; submitting it normalizes the text (trim, lowercase),
//! parses it into a [`Command`] and records the outcome in the scrollback.
//! Arrow keys move between sections directly.
//!
//! Every non-empty submission except `clear` commits one `command` entry
//! echoing the raw input and at most one `output`, `error` or `system`
//! entry. The history keeps its prompt last (see [`History`]).

use crate::content::resume::{self as data, SECTIONS, Section, find_section};
use crate::effect::{Effect, Timer};
use crate::history::{History, HistoryEntry};
use std::time::Duration;

/// A parsed resume command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    /// `cd <name>`, with the name already lowercased.
    Cd(String),
    Contact,
    Exit,
    Unknown,
}

impl Command {
    /// Parse raw input. Returns `None` for input that is blank after trimming.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let command = match normalized.as_str() {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "ls" => Self::Ls,
            "contact" => Self::Contact,
            "exit" => Self::Exit,
            other => match other.split_once(char::is_whitespace) {
                Some(("cd", name)) => Self::Cd(name.trim().to_string()),
                _ => Self::Unknown,
            },
        };
        Some(command)
    }
}

/// Tunables for the resume view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeOptions {
    /// Delay between `exit` and the reload.
    pub exit_delay: Duration,
    /// Maximum scrollback entries; `None` keeps everything.
    pub scrollback: Option<usize>,
}

impl Default for ResumeOptions {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_millis(1000),
            scrollback: None,
        }
    }
}

/// Inputs to the resume state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumeEvent {
    /// A scheduled timer fired.
    Timer(Timer),
    /// A printable character was typed.
    Char(char),
    /// Pasted text, appended to the input line.
    Paste(String),
    /// Remove the last input character.
    Backspace,
    /// Enter: submit the input line.
    Submit,
    /// Run a full command line without touching the input buffer.
    Command(String),
    /// ArrowUp: previous section.
    NavigateUp,
    /// ArrowDown: next section.
    NavigateDown,
}

/// Resume view state.
#[derive(Clone, Debug)]
pub struct ResumeState {
    sections: &'static [Section],
    active: usize,
    history: History,
    input: String,
    options: ResumeOptions,
}

impl ResumeState {
    /// Create the view over the standard sections.
    #[must_use]
    pub fn new(options: ResumeOptions) -> Self {
        Self::with_sections(SECTIONS, options)
    }

    /// Create the view over custom sections. An empty list falls back to the
    /// standard sections.
    #[must_use]
    pub fn with_sections(sections: &'static [Section], options: ResumeOptions) -> Self {
        let sections = if sections.is_empty() { SECTIONS } else { sections };
        let banner = data::WELCOME.iter().map(|line| HistoryEntry::system(*line));
        Self {
            sections,
            active: 0,
            history: History::new(data::PROMPT, banner).with_limit(options.scrollback),
            input: String::new(),
            options,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// Index of the section on display.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_section(&self) -> &'static Section {
        &self.sections[self.active]
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current contents of the input line.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Apply an event and return the effects the host must run.
    pub fn update(&mut self, event: ResumeEvent) -> Vec<Effect> {
        match event {
            ResumeEvent::Timer(Timer::Reload) => vec![Effect::Reload],
            ResumeEvent::Timer(Timer::Typing(_)) => Vec::new(),
            ResumeEvent::Char(ch) => {
                if !ch.is_control() {
                    self.input.push(ch);
                }
                Vec::new()
            }
            ResumeEvent::Paste(text) => {
                // Newlines in a paste never submit.
                let chars = text
                    .chars()
                    .map(|c| if c.is_whitespace() { ' ' } else { c })
                    .filter(|c| !c.is_control());
                self.input.extend(chars);
                Vec::new()
            }
            ResumeEvent::Backspace => {
                self.input.pop();
                Vec::new()
            }
            ResumeEvent::Submit => self.submit(),
            ResumeEvent::Command(raw) => self.dispatch(&raw),
            ResumeEvent::NavigateUp => {
                self.navigate(self.active.saturating_sub(1), "ArrowUp");
                Vec::new()
            }
            ResumeEvent::NavigateDown => {
                let last = self.sections.len() - 1;
                self.navigate((self.active + 1).min(last), "ArrowDown");
                Vec::new()
            }
        }
    }

    /// Submit the input line. The buffer is cleared whatever happens.
    pub fn submit(&mut self) -> Vec<Effect> {
        let raw = std::mem::take(&mut self.input);
        self.dispatch(&raw)
    }

    /// Run `raw` as if it had been typed and submitted.
    pub fn dispatch(&mut self, raw: &str) -> Vec<Effect> {
        let Some(command) = Command::parse(raw) else {
            return Vec::new();
        };

        if command == Command::Clear {
            self.history.clear();
            return Vec::new();
        }

        self.history.commit(HistoryEntry::command(raw));
        match command {
            Command::Help => {
                self.history.commit(HistoryEntry::output(data::HELP));
                Vec::new()
            }
            Command::Ls => {
                let titles: Vec<&str> = self.sections.iter().map(|s| s.title).collect();
                self.history.commit(HistoryEntry::output(titles.join(" ")));
                Vec::new()
            }
            Command::Cd(name) => {
                match find_section(self.sections, &name) {
                    Some(index) => self.select(index),
                    None => self
                        .history
                        .commit(HistoryEntry::error(format!("cd: no such section: {name}"))),
                }
                Vec::new()
            }
            Command::Contact => {
                self.select(self.sections.len() - 1);
                Vec::new()
            }
            Command::Exit => {
                self.history.commit(HistoryEntry::system(data::LOGOUT));
                vec![Effect::schedule(self.options.exit_delay, Timer::Reload)]
            }
            Command::Unknown => {
                self.history
                    .commit(HistoryEntry::error(format!("command not found: {raw}")));
                Vec::new()
            }
            Command::Clear => Vec::new(),
        }
    }

    fn select(&mut self, index: usize) {
        self.active = index;
        let title = self.sections[index].title;
        self.history
            .commit(HistoryEntry::output(format!("Navigated to {title}")));
    }

    // The entry is logged even when the clamp leaves the index unchanged.
    fn navigate(&mut self, index: usize, key: &str) {
        self.active = index;
        let id = self.sections[index].id;
        self.history
            .commit(HistoryEntry::command(format!("[{key}] cd {id}")));
    }
}

impl Default for ResumeState {
    fn default() -> Self {
        Self::new(ResumeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryKind;

    fn typed(state: &mut ResumeState, text: &str) -> Vec<Effect> {
        for ch in text.chars() {
            let _ = state.update(ResumeEvent::Char(ch));
        }
        state.update(ResumeEvent::Submit)
    }

    fn last_committed(state: &ResumeState) -> &HistoryEntry {
        state.history().committed().last().unwrap()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Command::parse("  HELP "), Some(Command::Help));
        assert_eq!(Command::parse("Cd   Skills"), Some(Command::Cd("skills".into())));
        assert_eq!(Command::parse("cd\tskills"), Some(Command::Cd("skills".into())));
        assert_eq!(Command::parse("cd"), Some(Command::Unknown));
        assert_eq!(Command::parse("lsx"), Some(Command::Unknown));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_help_outputs_one_block() {
        let mut state = ResumeState::default();
        let before = state.history().len();
        let _ = typed(&mut state, "help");
        assert_eq!(state.history().len(), before + 2);
        assert_eq!(last_committed(&state).kind, HistoryKind::Output);
        assert!(last_committed(&state).text.contains("cd <section>"));
    }

    #[test]
    fn test_ls_joins_titles() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "ls");
        assert_eq!(
            last_committed(&state).text,
            "Summary Skills Experience Education Projects Contact"
        );
    }

    #[test]
    fn test_cd_selects_section() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "cd skills");
        assert_eq!(state.active(), 1);
        assert_eq!(last_committed(&state), &HistoryEntry::output("Navigated to Skills"));
    }

    #[test]
    fn test_cd_unknown_section_is_an_error() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "cd nosuchsection");
        assert_eq!(state.active(), 0);
        assert_eq!(last_committed(&state).kind, HistoryKind::Error);
        assert!(last_committed(&state).text.contains("nosuchsection"));
    }

    #[test]
    fn test_contact_jumps_to_last() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "contact");
        assert_eq!(state.active(), state.sections().len() - 1);
    }

    #[test]
    fn test_exit_schedules_reload() {
        let mut state = ResumeState::default();
        let effects = typed(&mut state, "exit");
        assert_eq!(
            effects,
            vec![Effect::schedule(Duration::from_millis(1000), Timer::Reload)]
        );
        assert_eq!(last_committed(&state).kind, HistoryKind::System);
        assert_eq!(state.update(ResumeEvent::Timer(Timer::Reload)), vec![Effect::Reload]);
    }

    #[test]
    fn test_history_grows_past_hundreds_of_submissions() {
        let mut state = ResumeState::default();
        for _ in 0..600 {
            let before = state.history().len();
            let _ = typed(&mut state, "help");
            assert_eq!(state.history().len(), before + 2);
        }
        assert_eq!(state.history().limit(), None);
    }

    #[test]
    fn test_small_scrollback_keeps_command_echo() {
        let mut state = ResumeState::new(ResumeOptions {
            scrollback: Some(2),
            ..ResumeOptions::default()
        });
        let _ = typed(&mut state, "cd skills");
        let kinds: Vec<HistoryKind> = state.history().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [HistoryKind::Command, HistoryKind::Output, HistoryKind::Prompt]);
        assert_eq!(state.history().entries()[0].text, "cd skills");
    }

    #[test]
    fn test_unknown_echoes_raw_input() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "  Sudo RM ");
        let entries = state.history().committed();
        let n = entries.len();
        assert_eq!(entries[n - 2], HistoryEntry::command("  Sudo RM "));
        assert_eq!(entries[n - 1].kind, HistoryKind::Error);
        assert!(entries[n - 1].text.contains("  Sudo RM "));
    }

    #[test]
    fn test_clear_leaves_prompt_only() {
        let mut state = ResumeState::default();
        let _ = typed(&mut state, "help");
        let _ = typed(&mut state, "clear");
        assert_eq!(state.history().len(), 1);
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_blank_submit_clears_buffer_without_history() {
        let mut state = ResumeState::default();
        let before = state.history().len();
        let _ = typed(&mut state, "    ");
        assert_eq!(state.history().len(), before);
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_backspace_and_control_chars() {
        let mut state = ResumeState::default();
        let _ = state.update(ResumeEvent::Char('l'));
        let _ = state.update(ResumeEvent::Char('\u{7}'));
        let _ = state.update(ResumeEvent::Char('x'));
        let _ = state.update(ResumeEvent::Backspace);
        assert_eq!(state.input(), "l");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut state = ResumeState::default();
        let _ = state.update(ResumeEvent::Paste("cd\nskills".into()));
        assert_eq!(state.input(), "cd skills");
    }

    #[test]
    fn test_navigation_clamps_and_still_logs() {
        let mut state = ResumeState::default();
        let before = state.history().len();
        let _ = state.update(ResumeEvent::NavigateUp);
        assert_eq!(state.active(), 0);
        assert_eq!(state.history().len(), before + 1);
        assert_eq!(last_committed(&state).kind, HistoryKind::Command);

        for _ in 0..10 {
            let _ = state.update(ResumeEvent::NavigateDown);
        }
        assert_eq!(state.active(), state.sections().len() - 1);
        assert_eq!(last_committed(&state).text, "[ArrowDown] cd contact");
    }
}
