//! The host: one view, its timers and the URL opener.
//!
//! Views are pure state machines. [`App`] feeds them translated key events
//! and fired timers, executes the [`Effect`]s they hand back and reports
//! lifecycle changes through [`crate::event`]. Reloading or dropping the
//! host cancels every pending timer before anything else happens, so no
//! timer can reach a view that no longer exists.

use crate::buffer::Buffer;
use crate::config::{Config, ViewKind};
use crate::effect::{Effect, Timer};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log, names};
use crate::history::History;
use crate::input::{Event, KeyCode, KeyEvent};
use crate::resume::{ResumeEvent, ResumeOptions, ResumeState};
use crate::scheduler::Scheduler;
use crate::screen::{Theme, draw_resume, draw_showcase};
use crate::showcase::{ShowcaseEvent, ShowcaseState};
use crate::typing::TypingTiming;
use std::cell::RefCell;
use std::process::{Command, Stdio};
use std::rc::Rc;
use std::time::Duration;

/// Where `OpenUrl` effects end up.
pub trait UrlOpener {
    /// Open `url` in the user's browser.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Launches the platform opener (`open` on macOS, `xdg-open` elsewhere).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl SystemOpener {
    #[must_use]
    pub const fn program() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        let mut child = Command::new(Self::program())
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Launch {
                url: url.to_string(),
                source,
            })?;
        // Reap the opener without blocking the frame loop.
        std::thread::spawn(move || child.wait());
        Ok(())
    }
}

/// Logs URLs instead of opening them (`--no-open`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOpener;

impl UrlOpener for LogOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        emit_log(LogLevel::Info, &format!("not opening {url} (--no-open)"));
        Ok(())
    }
}

/// Keeps every URL it is asked to open. Clones share the same list.
#[derive(Clone, Debug, Default)]
pub struct RecordingOpener {
    urls: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// The view currently hosted.
#[derive(Clone, Debug)]
pub enum View {
    Showcase(ShowcaseState),
    Resume(ResumeState),
}

impl View {
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Showcase(_) => ViewKind::Showcase,
            Self::Resume(_) => ViewKind::Resume,
        }
    }
}

/// How the host builds (and rebuilds) its view.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppOptions {
    pub view: ViewKind,
    pub timing: TypingTiming,
    pub resume: ResumeOptions,
    pub skip_intro: bool,
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            view: config.view,
            timing: config.typing_timing(),
            resume: config.resume_options(),
            skip_intro: config.skip_intro,
        }
    }
}

/// Owner of one view, its scheduler and the URL opener.
pub struct App {
    options: AppOptions,
    view: View,
    scheduler: Scheduler<Timer>,
    opener: Box<dyn UrlOpener>,
    opened: Vec<String>,
    theme: Theme,
    quit: bool,
}

impl App {
    /// Build the host and start its view.
    pub fn new(options: AppOptions, opener: Box<dyn UrlOpener>) -> Self {
        let mut app = Self {
            options,
            view: Self::build_view(&options),
            scheduler: Scheduler::new(),
            opener,
            opened: Vec::new(),
            theme: Theme::default(),
            quit: false,
        };
        app.start();
        app
    }

    fn build_view(options: &AppOptions) -> View {
        match options.view {
            ViewKind::Showcase => View::Showcase(ShowcaseState::new(options.timing)),
            ViewKind::Resume => View::Resume(ResumeState::new(options.resume)),
        }
    }

    fn start(&mut self) {
        emit_log(LogLevel::Debug, &format!("starting {} view", self.options.view));
        let effects = match &mut self.view {
            View::Showcase(state) if self.options.skip_intro => {
                state.update(ShowcaseEvent::SkipIntro)
            }
            View::Showcase(state) => state.start(),
            View::Resume(_) => Vec::new(),
        };
        self.after_update(effects);
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<Timer> {
        &self.scheduler
    }

    /// URLs opened so far, successfully or not.
    #[must_use]
    pub fn opened_urls(&self) -> &[String] {
        &self.opened
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Showcase slug or resume section id.
    #[must_use]
    pub fn active_section(&self) -> &'static str {
        match &self.view {
            View::Showcase(state) => state.active().slug(),
            View::Resume(state) => state.active_section().id,
        }
    }

    /// Whether the intro has finished. The resume has no intro.
    #[must_use]
    pub fn typing_complete(&self) -> bool {
        match &self.view {
            View::Showcase(state) => state.typing().is_complete(),
            View::Resume(_) => true,
        }
    }

    #[must_use]
    pub fn typed_text(&self) -> &str {
        match &self.view {
            View::Showcase(state) => state.typing().revealed(),
            View::Resume(_) => "",
        }
    }

    #[must_use]
    pub fn history(&self) -> Option<&History> {
        match &self.view {
            View::Resume(state) => Some(state.history()),
            View::Showcase(_) => None,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        match &self.view {
            View::Resume(state) => state.input(),
            View::Showcase(_) => "",
        }
    }

    /// Translate a terminal event and apply it to the view.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.is_quit() => {
                emit_log(LogLevel::Info, "quit requested");
                self.quit = true;
            }
            Event::Key(key) => {
                if let Some(event) = self.translate_key(key) {
                    self.apply(event);
                }
            }
            Event::Paste(text) => {
                if matches!(self.view, View::Resume(_)) {
                    self.apply(ViewEvent::Resume(ResumeEvent::Paste(text)));
                }
            }
            Event::Resize(_) | Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn translate_key(&self, key: KeyEvent) -> Option<ViewEvent> {
        match &self.view {
            View::Showcase(state) => {
                showcase_key(key, state.menu_visible()).map(ViewEvent::Showcase)
            }
            View::Resume(_) => resume_key(key).map(ViewEvent::Resume),
        }
    }

    /// Run a command as if the user had picked or typed it.
    pub fn run_command(&mut self, command: &str) {
        emit_log(LogLevel::Debug, &format!("run: {command}"));
        let event = match self.view {
            View::Showcase(_) => ViewEvent::Showcase(ShowcaseEvent::Execute(command.to_string())),
            View::Resume(_) => ViewEvent::Resume(ResumeEvent::Command(command.to_string())),
        };
        self.apply(event);
    }

    /// Move the clock forward by `elapsed`, firing every timer that falls
    /// due, including follow-ups scheduled along the way.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(timer) = self.scheduler.pop_due(until) {
            let event = match self.view {
                View::Showcase(_) => ViewEvent::Showcase(ShowcaseEvent::Timer(timer)),
                View::Resume(_) => ViewEvent::Resume(ResumeEvent::Timer(timer)),
            };
            self.apply(event);
        }
        self.scheduler.settle(until);
    }

    /// Fire timers until none are left or the next one is further than
    /// `limit` from now. Returns the virtual time that passed.
    pub fn run_until_idle(&mut self, limit: Duration) -> Duration {
        let start = self.scheduler.now();
        let horizon = start.saturating_add(limit);
        while let Some(deadline) = self.scheduler.next_deadline() {
            if deadline > horizon {
                break;
            }
            let step = deadline.saturating_sub(self.scheduler.now());
            self.advance(step);
        }
        self.scheduler.now().saturating_sub(start)
    }

    /// Throw the view away and start a fresh one.
    pub fn reload(&mut self) {
        self.scheduler.cancel_all();
        emit_event(names::RELOAD, self.options.view.name());
        self.view = Self::build_view(&self.options);
        self.start();
    }

    /// Cancel all pending timers.
    pub fn shutdown(&mut self) {
        if !self.scheduler.is_idle() {
            emit_log(
                LogLevel::Debug,
                &format!("cancelling {} pending timers", self.scheduler.pending()),
            );
        }
        self.scheduler.cancel_all();
    }

    /// Draw the current view.
    pub fn draw(&self, buf: &mut Buffer) {
        match &self.view {
            View::Showcase(state) => draw_showcase(buf, state, &self.theme),
            View::Resume(state) => draw_resume(buf, state, &self.theme),
        }
    }

    fn apply(&mut self, event: ViewEvent) {
        let before = self.active_section();
        let effects = match (&mut self.view, event) {
            (View::Showcase(state), ViewEvent::Showcase(event)) => state.update(event),
            (View::Resume(state), ViewEvent::Resume(event)) => state.update(event),
            _ => Vec::new(),
        };
        let after = self.active_section();
        if before != after {
            emit_event(names::SECTION_CHANGED, after);
        }
        self.after_update(effects);
    }

    fn after_update(&mut self, effects: Vec<Effect>) {
        if let View::Showcase(state) = &mut self.view {
            if state.take_typing_completed() {
                emit_event(names::TYPING_COMPLETE, "");
            }
        }
        for effect in effects {
            match effect {
                Effect::Schedule { delay, timer } => {
                    self.scheduler.schedule(delay, timer);
                }
                Effect::OpenUrl(url) => self.open_url(url),
                Effect::Reload => {
                    // Anything queued after a reload belonged to the old view.
                    self.reload();
                    return;
                }
            }
        }
    }

    fn open_url(&mut self, url: String) {
        emit_event(names::OPEN_URL, &url);
        if let Err(err) = self.opener.open(&url) {
            emit_log(LogLevel::Warn, &err.to_string());
        }
        self.opened.push(url);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view.kind())
            .field("active_section", &self.active_section())
            .field("pending_timers", &self.scheduler.pending())
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}

/// A translated event for whichever view is hosted.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ViewEvent {
    Showcase(ShowcaseEvent),
    Resume(ResumeEvent),
}

/// Showcase keys: arrows move the highlight, Enter runs it, digits pick an
/// entry directly. Before the menu appears, Enter, Esc and space skip the
/// intro.
fn showcase_key(key: KeyEvent, menu_visible: bool) -> Option<ShowcaseEvent> {
    if !menu_visible {
        return matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
            .then_some(ShowcaseEvent::SkipIntro);
    }
    match key.code {
        KeyCode::Up => Some(ShowcaseEvent::MenuUp),
        KeyCode::Down | KeyCode::Tab => Some(ShowcaseEvent::MenuDown),
        KeyCode::Enter => Some(ShowcaseEvent::MenuActivate),
        KeyCode::Char(c @ '1'..='9') => {
            Some(ShowcaseEvent::MenuShortcut(c as usize - '1' as usize))
        }
        _ => None,
    }
}

fn resume_key(key: KeyEvent) -> Option<ResumeEvent> {
    if let Some(c) = key.printable() {
        return Some(ResumeEvent::Char(c));
    }
    match key.code {
        KeyCode::Backspace => Some(ResumeEvent::Backspace),
        KeyCode::Enter => Some(ResumeEvent::Submit),
        KeyCode::Up => Some(ResumeEvent::NavigateUp),
        KeyCode::Down => Some(ResumeEvent::NavigateDown),
        _ => None,
    }
}
