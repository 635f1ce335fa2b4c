//! Project showcase view state.
//!
//! The showcase plays the intro animation once, then exposes a fixed menu of
//! pseudo-commands. Running a command either selects a content panel or
//! asks the host to open a URL. Matching is exact and case-sensitive;
//! anything that is not on the menu falls back to the home panel.

use crate::content::{GITHUB_PROFILE, showcase::INTRO_LINES};
use crate::effect::{Effect, Timer};
use crate::typing::{TypingOutcome, TypingState, TypingTiming};

/// Content panels of the showcase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShowcaseSection {
    #[default]
    Home,
    Projects,
    About,
    Technologies,
    Author,
    NetworkTools,
    Skills,
    Contact,
}

impl ShowcaseSection {
    /// Path segment shown in the title bar (`~/showcase/<slug>`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Technologies => "technologies",
            Self::Author => "author",
            Self::NetworkTools => "network-tools",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}

/// What a menu command does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(ShowcaseSection),
    Open(&'static str),
}

/// A menu entry.
#[derive(Clone, Copy, Debug)]
pub struct MenuCommand {
    pub command: &'static str,
    pub description: &'static str,
    pub action: Action,
}

/// The menu, in display order.
pub const COMMANDS: [MenuCommand; 8] = [
    MenuCommand {
        command: "ls",
        description: "List all projects",
        action: Action::Select(ShowcaseSection::Projects),
    },
    MenuCommand {
        command: "cat README.md",
        description: "Display about information",
        action: Action::Select(ShowcaseSection::About),
    },
    MenuCommand {
        command: "nmap -sV showcase",
        description: "Scan projects for technologies",
        action: Action::Select(ShowcaseSection::Technologies),
    },
    MenuCommand {
        command: "ssh git@github.com",
        description: "View GitHub profile",
        action: Action::Open(GITHUB_PROFILE),
    },
    MenuCommand {
        command: "whoami",
        description: "Display author information",
        action: Action::Select(ShowcaseSection::Author),
    },
    MenuCommand {
        command: "netstat -a",
        description: "Show networking tools projects",
        action: Action::Select(ShowcaseSection::NetworkTools),
    },
    MenuCommand {
        command: "hexdump -C skills",
        description: "Display skills in hex format",
        action: Action::Select(ShowcaseSection::Skills),
    },
    MenuCommand {
        command: "cd contact",
        description: "Show contact information",
        action: Action::Select(ShowcaseSection::Contact),
    },
];

/// Map a command string to its action. Unknown commands go home.
#[must_use]
pub fn resolve(command: &str) -> Action {
    COMMANDS
        .iter()
        .find(|entry| entry.command == command)
        .map_or(Action::Select(ShowcaseSection::Home), |entry| entry.action)
}

/// Inputs to the showcase state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowcaseEvent {
    /// A scheduled timer fired.
    Timer(Timer),
    /// Run a command string through the dispatcher.
    Execute(String),
    /// Move the menu highlight up (wraps).
    MenuUp,
    /// Move the menu highlight down (wraps).
    MenuDown,
    /// Run the highlighted menu entry.
    MenuActivate,
    /// Run menu entry `n` (zero-based).
    MenuShortcut(usize),
    /// Finish the intro animation immediately.
    SkipIntro,
}

/// Showcase view state.
#[derive(Clone, Debug)]
pub struct ShowcaseState {
    typing: TypingState,
    active: ShowcaseSection,
    menu_cursor: usize,
    typing_just_completed: bool,
}

impl ShowcaseState {
    /// Create the view with the standard intro lines.
    #[must_use]
    pub fn new(timing: TypingTiming) -> Self {
        Self::with_intro(INTRO_LINES, timing)
    }

    /// Create the view with custom intro lines.
    pub fn with_intro<I, S>(lines: I, timing: TypingTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            typing: TypingState::new(lines, timing),
            active: ShowcaseSection::Home,
            menu_cursor: 0,
            typing_just_completed: false,
        }
    }

    #[must_use]
    pub fn active(&self) -> ShowcaseSection {
        self.active
    }

    #[must_use]
    pub fn typing(&self) -> &TypingState {
        &self.typing
    }

    #[must_use]
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Whether the menu is shown and accepts input.
    #[must_use]
    pub fn menu_visible(&self) -> bool {
        self.typing.is_complete()
    }

    /// Returns `true` once, right after the intro finished.
    pub fn take_typing_completed(&mut self) -> bool {
        std::mem::take(&mut self.typing_just_completed)
    }

    /// Kick off the intro animation.
    pub fn start(&mut self) -> Vec<Effect> {
        let outcome = self.typing.start();
        self.absorb(outcome)
    }

    /// Apply an event and return the effects the host must run.
    pub fn update(&mut self, event: ShowcaseEvent) -> Vec<Effect> {
        match event {
            ShowcaseEvent::Timer(Timer::Typing(timer)) => {
                let outcome = self.typing.on_timer(timer);
                self.absorb(outcome)
            }
            ShowcaseEvent::Timer(Timer::Reload) => Vec::new(),
            ShowcaseEvent::Execute(command) => self.execute(&command),
            ShowcaseEvent::SkipIntro => {
                let outcome = self.typing.finish_now();
                self.absorb(outcome)
            }
            _ if !self.menu_visible() => Vec::new(),
            ShowcaseEvent::MenuUp => {
                self.menu_cursor = self
                    .menu_cursor
                    .checked_sub(1)
                    .unwrap_or(COMMANDS.len() - 1);
                Vec::new()
            }
            ShowcaseEvent::MenuDown => {
                self.menu_cursor = (self.menu_cursor + 1) % COMMANDS.len();
                Vec::new()
            }
            ShowcaseEvent::MenuActivate => self.execute(COMMANDS[self.menu_cursor].command),
            ShowcaseEvent::MenuShortcut(index) => match COMMANDS.get(index) {
                Some(entry) => {
                    self.menu_cursor = index;
                    self.execute(entry.command)
                }
                None => Vec::new(),
            },
        }
    }

    /// Dispatch a command string.
    pub fn execute(&mut self, command: &str) -> Vec<Effect> {
        match resolve(command) {
            Action::Select(section) => {
                self.active = section;
                Vec::new()
            }
            Action::Open(url) => vec![Effect::OpenUrl(url.to_string())],
        }
    }

    fn absorb(&mut self, outcome: TypingOutcome) -> Vec<Effect> {
        match outcome {
            TypingOutcome::Scheduled(effect) => vec![effect],
            TypingOutcome::Completed => {
                self.typing_just_completed = true;
                Vec::new()
            }
            TypingOutcome::Idle => Vec::new(),
        }
    }
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(TypingTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> ShowcaseState {
        let mut state = ShowcaseState::default();
        let _ = state.update(ShowcaseEvent::SkipIntro);
        state
    }

    #[test]
    fn test_every_menu_command_resolves_to_itself() {
        for entry in &COMMANDS {
            assert_eq!(resolve(entry.command), entry.action);
        }
    }

    #[test]
    fn test_select_commands_set_section() {
        let mut state = ready();
        let _ = state.execute("whoami");
        assert_eq!(state.active(), ShowcaseSection::Author);
        let _ = state.execute("netstat -a");
        assert_eq!(state.active(), ShowcaseSection::NetworkTools);
    }

    #[test]
    fn test_matching_is_exact_and_case_sensitive() {
        let mut state = ready();
        let _ = state.execute("ls");
        assert_eq!(state.active(), ShowcaseSection::Projects);
        let _ = state.execute("LS");
        assert_eq!(state.active(), ShowcaseSection::Home);
        let _ = state.execute("ls ");
        assert_eq!(state.active(), ShowcaseSection::Home);
    }

    #[test]
    fn test_open_command_keeps_section() {
        let mut state = ready();
        let _ = state.execute("cat README.md");
        let effects = state.execute("ssh git@github.com");
        assert_eq!(effects, vec![Effect::OpenUrl(GITHUB_PROFILE.to_string())]);
        assert_eq!(state.active(), ShowcaseSection::About);
    }

    #[test]
    fn test_menu_is_gated_by_intro() {
        let mut state = ShowcaseState::default();
        let _ = state.start();
        assert!(!state.menu_visible());
        assert!(state.update(ShowcaseEvent::MenuShortcut(0)).is_empty());
        assert_eq!(state.active(), ShowcaseSection::Home);
        let _ = state.update(ShowcaseEvent::MenuDown);
        assert_eq!(state.menu_cursor(), 0);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut state = ready();
        let _ = state.update(ShowcaseEvent::MenuUp);
        assert_eq!(state.menu_cursor(), COMMANDS.len() - 1);
        let _ = state.update(ShowcaseEvent::MenuDown);
        assert_eq!(state.menu_cursor(), 0);
    }

    #[test]
    fn test_menu_activate_runs_highlighted() {
        let mut state = ready();
        let _ = state.update(ShowcaseEvent::MenuDown);
        let _ = state.update(ShowcaseEvent::MenuActivate);
        assert_eq!(state.active(), ShowcaseSection::About);
    }

    #[test]
    fn test_shortcut_out_of_range_is_ignored() {
        let mut state = ready();
        assert!(state.update(ShowcaseEvent::MenuShortcut(42)).is_empty());
        assert_eq!(state.active(), ShowcaseSection::Home);
    }

    #[test]
    fn test_completion_is_reported_once() {
        let mut state = ShowcaseState::default();
        let _ = state.update(ShowcaseEvent::SkipIntro);
        assert!(state.take_typing_completed());
        assert!(!state.take_typing_completed());
        let _ = state.update(ShowcaseEvent::SkipIntro);
        assert!(!state.take_typing_completed());
    }

    #[test]
    fn test_slugs() {
        assert_eq!(ShowcaseSection::NetworkTools.slug(), "network-tools");
        assert_eq!(ShowcaseSection::default().slug(), "home");
    }
}
