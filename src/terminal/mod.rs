//! Terminal control for the interactive binary.
//!
//! Unix only: raw mode and window size go through termios/ioctl.

mod raw;

pub use raw::{
    NonBlockingGuard, RawModeGuard, enable_raw_mode, is_tty, set_nonblocking, terminal_size,
};

/// Terminal size, or `fallback` when it cannot be queried.
#[must_use]
pub fn size_or(fallback: (u32, u32)) -> (u32, u32) {
    terminal_size().unwrap_or(fallback)
}
