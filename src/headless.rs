//! Running a view without a terminal.
//!
//! Time is virtual: timers fire as soon as they are due, so the intro
//! finishes instantly and `exit` reloads without waiting. URLs are only
//! logged. The result is one rendered frame, printed as text or as a
//! [`Report`] in JSON.

use crate::app::{App, AppOptions, LogOpener};
use crate::buffer::Buffer;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::history::HistoryEntry;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;

/// Timers further away than this are left pending.
pub const IDLE_HORIZON: Duration = Duration::from_secs(600);

/// State of a headless run after its last command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub view: String,
    pub size: [u32; 2],
    pub active_section: String,
    pub typing_complete: bool,
    pub typed_text: String,
    pub history: Vec<HistoryEntry>,
    pub input: String,
    pub opened_urls: Vec<String>,
    /// Screen rows with trailing blanks trimmed.
    pub screen: Vec<String>,
}

impl Report {
    /// Render `app` into a fresh buffer and capture its state.
    pub fn capture(app: &App, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut buf = Buffer::new(width, height);
        app.draw(&mut buf);
        Ok(Self {
            view: app.kind().name().to_string(),
            size: [width, height],
            active_section: app.active_section().to_string(),
            typing_complete: app.typing_complete(),
            typed_text: app.typed_text().to_string(),
            history: app
                .history()
                .map(|history| history.entries().to_vec())
                .unwrap_or_default(),
            input: app.input().to_string(),
            opened_urls: app.opened_urls().to_vec(),
            screen: buf.to_text().lines().map(str::to_string).collect(),
        })
    }

    /// The screen as one string.
    #[must_use]
    pub fn screen_text(&self) -> String {
        self.screen.join("\n")
    }
}

/// Build the host, settle its timers and feed it every `--run` command.
pub fn simulate(config: &Config) -> App {
    let mut app = App::new(AppOptions::from(config), Box::new(LogOpener));
    app.run_until_idle(IDLE_HORIZON);
    for command in &config.run {
        app.run_command(command);
        app.run_until_idle(IDLE_HORIZON);
    }
    app
}

/// Run headlessly and print the result to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let app = simulate(config);
    let (width, height) = config.headless_size;
    let report = Report::capture(&app, width, height)?;

    if config.dump_json {
        serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.screen_text())?;
    }
    out.flush()?;
    Ok(())
}
