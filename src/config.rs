//! Command-line configuration.
//!
//! Arguments are parsed by hand from `OsString`s into a [`Config`]; the
//! binary decides what to do with [`ParseResult::Help`] and
//! [`ParseResult::Error`].

use crate::ansi::ColorMode;
use crate::error::Error;
use crate::renderer::RendererOptions;
use crate::resume::ResumeOptions;
use crate::typing::TypingTiming;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const HELP_TEXT: &str = "termfolio - a portfolio that lives in your terminal

USAGE:
    termfolio [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --view <NAME>           View to open: showcase, resume (default: showcase)
    --fps <N>               Cap frames per second (default: 30)

    --char-delay <MS>       Delay between typed characters (default: 50)
    --line-delay <MS>       Pause after each typed line (default: 500)
    --skip-intro            Finish the intro animation immediately
    --exit-delay <MS>       Delay before the resume restarts on exit (default: 1000)
    --scrollback <N>        Cap resume history at N entries (default: unlimited)

    --no-open               Log URLs instead of opening a browser
    --no-alt-screen         Don't enter alternate screen
    --color <MODE>          auto, truecolor, 256, none (default: auto)
    --log-file <PATH>       Write logs to PATH

    --headless              Run without a TTY and print one frame
    --headless-size <WxH>   Headless buffer size (default: 80x24)
    --run <CMD>             Command to run in headless mode (repeatable)
    --dump-json             Print headless state as JSON

EXAMPLES:
    termfolio                                   # Project showcase
    termfolio --view resume                     # Terminal resume
    termfolio --headless --skip-intro --run ls  # Print the projects panel
";

/// Which view the host runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewKind {
    #[default]
    Showcase,
    Resume,
}

impl ViewKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Showcase => "showcase",
            Self::Resume => "resume",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "showcase" => Ok(Self::Showcase),
            "resume" => Ok(Self::Resume),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub view: ViewKind,
    pub fps_cap: u32,

    // Animation and view tuning
    pub char_delay: Duration,
    pub line_delay: Duration,
    pub skip_intro: bool,
    pub exit_delay: Duration,
    pub scrollback: Option<usize>,

    // Host
    pub open_urls: bool,
    pub use_alt_screen: bool,
    /// `None` detects from `NO_COLOR`, `COLORTERM` and `TERM`.
    pub color: Option<ColorMode>,
    pub log_file: Option<PathBuf>,

    // Headless
    pub headless: bool,
    pub headless_size: (u32, u32),
    pub run: Vec<String>,
    pub dump_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        let timing = TypingTiming::default();
        let resume = ResumeOptions::default();
        Self {
            view: ViewKind::Showcase,
            fps_cap: 30,
            char_delay: timing.char_interval,
            line_delay: timing.line_pause,
            skip_intro: false,
            exit_delay: resume.exit_delay,
            scrollback: resume.scrollback,
            open_urls: true,
            use_alt_screen: true,
            color: None,
            log_file: None,
            headless: false,
            headless_size: (80, 24),
            run: Vec::new(),
            dump_json: false,
        }
    }
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments, program name first.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        match Self::parse(args) {
            Ok(Some(config)) => ParseResult::Config(config),
            Ok(None) => ParseResult::Help,
            Err(message) => ParseResult::Error(message),
        }
    }

    fn parse<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return Ok(None),

                "--view" => {
                    let value = value_of(&mut args, "--view")?;
                    config.view = value
                        .parse()
                        .map_err(|_| format!("Unknown --view: {value} (valid: showcase, resume)"))?;
                }

                "--fps" => {
                    let value = value_of(&mut args, "--fps")?;
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.fps_cap = n,
                        _ => {
                            return Err(format!(
                                "Invalid --fps value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--char-delay" => config.char_delay = millis(&mut args, "--char-delay")?,
                "--line-delay" => config.line_delay = millis(&mut args, "--line-delay")?,
                "--exit-delay" => config.exit_delay = millis(&mut args, "--exit-delay")?,
                "--skip-intro" => config.skip_intro = true,

                "--scrollback" => {
                    let value = value_of(&mut args, "--scrollback")?;
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => config.scrollback = Some(n),
                        _ => {
                            return Err(format!(
                                "Invalid --scrollback value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--no-open" => config.open_urls = false,
                "--no-alt-screen" => config.use_alt_screen = false,

                "--color" => {
                    let value = value_of(&mut args, "--color")?;
                    config.color = ColorMode::from_flag(&value).ok_or_else(|| {
                        format!("Unknown --color: {value} (valid: auto, truecolor, 256, none)")
                    })?;
                }

                "--log-file" => {
                    config.log_file = Some(PathBuf::from(value_of(&mut args, "--log-file")?));
                }

                "--headless" => config.headless = true,

                "--headless-size" => {
                    let value = value_of(&mut args, "--headless-size")?;
                    config.headless_size = parse_size(&value).ok_or_else(|| {
                        format!("Invalid --headless-size: {value} (use WxH format, e.g., 80x24)")
                    })?;
                }

                "--run" => config.run.push(value_of(&mut args, "--run")?),
                "--dump-json" => config.dump_json = true,

                other => {
                    if other.starts_with('-') {
                        return Err(format!("Unknown option: {other}"));
                    }
                    // Positional arguments are ignored
                }
            }
        }

        Ok(Some(config))
    }

    /// Get renderer options from config.
    #[must_use]
    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            use_alt_screen: self.use_alt_screen,
            color_mode: self.color.unwrap_or_else(ColorMode::from_env),
            ..RendererOptions::default()
        }
    }

    /// Get target frame duration.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps_cap.max(1)))
    }

    #[must_use]
    pub fn typing_timing(&self) -> TypingTiming {
        TypingTiming {
            char_interval: self.char_delay,
            line_pause: self.line_delay,
        }
    }

    #[must_use]
    pub fn resume_options(&self) -> ResumeOptions {
        ResumeOptions {
            exit_delay: self.exit_delay,
            scrollback: self.scrollback,
        }
    }
}

fn value_of<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = OsString>,
{
    args.next()
        .map(|v| v.to_string_lossy().to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn millis<I>(args: &mut I, flag: &str) -> Result<Duration, String>
where
    I: Iterator<Item = OsString>,
{
    let value = value_of(args, flag)?;
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| format!("Invalid {flag} value: {value} (milliseconds)"))
}

/// Parse a size string like "80x24" into (width, height).
fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once('x')?;
    let w = w.parse::<u32>().ok()?;
    let h = h.parse::<u32>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}
