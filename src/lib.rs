//! `termfolio` - a portfolio that runs as a terminal application
//!
//! Two self-contained views render a simulated shell: a project showcase
//! with a typed intro and a command menu, and a resume terminal with a
//! command line, scrollback and section navigation. Views are reducer-style
//! state machines; the [`app::App`] host owns their timers and performs the
//! effects they request, and a small double-buffered cell renderer puts
//! the result on screen.
//!
//! # Example
//!
//! ```
//! use termfolio::{Buffer, Rgb, Style};
//!
//! let mut buf = Buffer::new(20, 2);
//! buf.draw_text(0, 0, "guest@resume:~$", Style::fg(Rgb::from_u32(0x9ece6a)));
//! assert_eq!(buf.row_text(0).trim_end(), "guest@resume:~$");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // ShowcaseState in showcase etc
#![allow(clippy::struct_excessive_bools)] // Config and terminal state carry flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod app;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod config;
pub mod content;
pub mod effect;
pub mod error;
pub mod event;
pub mod headless;
pub mod history;
pub mod input;
pub mod renderer;
pub mod resume;
pub mod scheduler;
pub mod screen;
pub mod showcase;
pub mod style;
pub mod terminal;
pub mod typing;

// Re-export core types at crate root
pub use cell::{Cell, CellContent};
pub use color::Rgb;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use style::{Style, TextAttributes};

// Views and host
pub use app::{App, AppOptions, LogOpener, RecordingOpener, SystemOpener, UrlOpener, View};
pub use config::{Config, ParseResult, ViewKind};
pub use effect::{Effect, Timer, TypingTimer};
pub use history::{History, HistoryEntry, HistoryKind};
pub use resume::{ResumeEvent, ResumeOptions, ResumeState};
pub use scheduler::{Scheduler, TaskId};
pub use showcase::{ShowcaseEvent, ShowcaseSection, ShowcaseState};
pub use typing::{TypingState, TypingTiming};

// Re-export input types
pub use input::{Event, InputParser, KeyCode, KeyEvent, KeyModifiers};

// Re-export ANSI types
pub use ansi::ColorMode;

// Re-export commonly used types
pub use buffer::{Buffer, ClipRect};
pub use renderer::{RenderStats, Renderer, RendererOptions};
pub use terminal::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};
