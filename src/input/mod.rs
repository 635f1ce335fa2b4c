//! Input parsing for terminal events.
//!
//! Raw stdin bytes go through [`InputParser::feed`]; the host translates
//! the resulting [`Event`]s into view events.

mod event;
mod keyboard;
mod parser;

pub use event::{Event, ResizeEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, MAX_PASTE_BYTES, ParseError, ParseResult};
