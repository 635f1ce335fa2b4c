//! `termfolio` binary
//!
//! Runs the project showcase or the resume terminal in the current TTY, or
//! headlessly for scripting and CI.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin termfolio
//! cargo run --bin termfolio -- --view resume
//! cargo run --bin termfolio -- --headless --skip-intro --run ls
//! ```
//!
//! Press Ctrl+C to quit.

use std::fs::File;
use std::io::{self, Read, Write};
use std::sync::Mutex;
use std::time::Instant;
use termfolio::config::HELP_TEXT;
use termfolio::input::Event;
use termfolio::screen::Theme;
use termfolio::terminal::{self, set_nonblocking};
use termfolio::{
    App, AppOptions, Config, Error, InputParser, LogLevel, LogOpener, ParseResult, Renderer,
    SystemOpener, UrlOpener, enable_raw_mode, headless, is_tty, set_event_callback,
    set_log_callback,
};

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            init_logging(&config)?;
            if config.headless {
                let mut stdout = io::stdout().lock();
                headless::run(&config, &mut stdout).map_err(into_io)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn into_io(err: Error) -> io::Error {
    match err {
        Error::Io(e) => e,
        other => io::Error::other(other),
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Route library logs and lifecycle events into `tracing`. Output only goes
/// somewhere when `--log-file` is set; the TTY belongs to the renderer.
fn init_logging(config: &Config) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .map_err(io::Error::other)?;
    }

    set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!("{message}"),
        LogLevel::Info => tracing::info!("{message}"),
        LogLevel::Warn => tracing::warn!("{message}"),
        LogLevel::Error => tracing::error!("{message}"),
    });
    set_event_callback(|name, data| tracing::info!(event = name, data, "lifecycle"));

    tracing::info!(view = %config.view, headless = config.headless, "termfolio starting");
    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

fn run_interactive(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    if !is_tty(&io::stdout()) || !is_tty(&stdin) {
        eprintln!("Error: stdin/stdout is not a terminal");
        eprintln!();
        eprintln!("termfolio needs an interactive terminal.");
        eprintln!("For non-interactive use, try: termfolio --headless");
        std::process::exit(1);
    }

    let (width, height) = terminal::size_or((80, 24));
    let opener: Box<dyn UrlOpener> = if config.open_urls {
        Box::new(SystemOpener)
    } else {
        Box::new(LogOpener)
    };
    let mut app = App::new(AppOptions::from(config), opener);

    let _raw_guard = enable_raw_mode()?;
    let _nonblocking = set_nonblocking(&stdin)?;
    let mut renderer =
        Renderer::new(io::stdout(), width, height, config.renderer_options()).map_err(into_io)?;
    renderer.set_background(Theme::default().background);
    renderer.set_title("termfolio")?;

    let mut parser = InputParser::new();
    let mut input_buf = [0u8; 1024];
    let frame_duration = config.frame_duration();
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        let frame_start = Instant::now();

        // --- Input phase ---
        match stdin.lock().read(&mut input_buf) {
            Ok(n) if n > 0 => {
                for event in parser.feed(&input_buf[..n]) {
                    if let Event::Resize(size) = &event {
                        resize(&mut renderer, size.width, size.height);
                    }
                    app.handle_event(event);
                }
            }
            Ok(_) => {}
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) => {}
            Err(e) => return Err(e),
        }

        // Terminals that don't report resizes in-band are caught here.
        if let Ok((w, h)) = terminal::terminal_size() {
            if (w, h) != renderer.size() {
                resize(&mut renderer, w, h);
            }
        }

        // --- Update phase ---
        let now = Instant::now();
        app.advance(now.duration_since(last_tick));
        last_tick = now;

        // --- Render phase ---
        app.draw(renderer.buffer());
        renderer.present()?;

        // --- Frame pacing ---
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = frame_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
    }

    app.shutdown();
    renderer.cleanup()?;
    io::stdout().flush()?;
    tracing::info!(frames = renderer.stats().frames, "termfolio exiting");
    Ok(())
}

fn resize<W: Write>(renderer: &mut Renderer<W>, width: u32, height: u32) {
    if let Err(err) = renderer.resize(width, height) {
        tracing::warn!("resize to {width}x{height} failed: {err}");
    }
}
