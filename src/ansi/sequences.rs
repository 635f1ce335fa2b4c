//! Fixed escape sequences.

pub const RESET: &str = "\x1b[0m";

pub const CLEAR_SCREEN: &str = "\x1b[2J";

pub const CURSOR_HOME: &str = "\x1b[H";

pub const CURSOR_HIDE: &str = "\x1b[?25l";

pub const CURSOR_SHOW: &str = "\x1b[?25h";

pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

pub const BRACKETED_PASTE_ON: &str = "\x1b[?2004h";

pub const BRACKETED_PASTE_OFF: &str = "\x1b[?2004l";

/// Synchronized output (DEC mode 2026). Terminals that do not know it
/// ignore both sequences.
pub mod sync {
    pub const BEGIN: &str = "\x1b[?2026h";
    pub const END: &str = "\x1b[?2026l";
}

/// Window title (OSC 0), terminated with ST.
pub const TITLE_PREFIX: &str = "\x1b]0;";
pub const TITLE_SUFFIX: &str = "\x1b\\";
