//! termios raw mode, window size and non-blocking stdin.
//!
//! All FFI lives here. Every state change returns a guard that puts the
//! previous state back when dropped.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Restores the saved termios settings on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Put `fd` into raw mode: no echo, no line buffering, no signal keys,
    /// no output post-processing.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;

        let mut raw = original;
        raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_cflag |= libc::CS8;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 0;
        set_termios(fd, &raw)?;

        Ok(Self { fd, original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = set_termios(self.fd, &self.original);
    }
}

/// Raw mode on stdin.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

/// Restores the saved file status flags on drop.
#[derive(Debug)]
pub struct NonBlockingGuard {
    fd: RawFd,
    original: libc::c_int,
}

impl Drop for NonBlockingGuard {
    fn drop(&mut self) {
        // SAFETY: fcntl F_SETFL on a descriptor we read the flags from.
        unsafe {
            libc::fcntl(self.fd, libc::F_SETFL, self.original);
        }
    }
}

/// Make reads on `fd` return `WouldBlock` instead of waiting.
pub fn set_nonblocking<F: AsRawFd>(fd: &F) -> io::Result<NonBlockingGuard> {
    let fd = fd.as_raw_fd();
    // SAFETY: F_GETFL/F_SETFL take no pointers and are valid on any fd.
    let original = unsafe { libc::fcntl(fd, libc::F_GETFL) };
    if original == -1 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: as above.
    if unsafe { libc::fcntl(fd, libc::F_SETFL, original | libc::O_NONBLOCK) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(NonBlockingGuard { fd, original })
}

#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty accepts any descriptor value.
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Columns and rows of the terminal attached to stdout.
///
/// A terminal reporting zero in either dimension is treated as an error.
pub fn terminal_size() -> io::Result<(u32, u32)> {
    // SAFETY: winsize is plain data; zeroed is a valid value.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    // SAFETY: TIOCGWINSZ writes into the winsize we pass.
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    if result == -1 {
        return Err(io::Error::last_os_error());
    }
    if size.ws_col == 0 || size.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ));
    }
    Ok((u32::from(size.ws_col), u32::from(size.ws_row)))
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    // SAFETY: termios is plain data; tcgetattr fills it in.
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr only reads the struct.
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file_is_not_a_tty() {
        let file = tempfile::tempfile().unwrap();
        assert!(!is_tty(&file));
    }

    #[test]
    fn test_raw_mode_fails_on_non_tty() {
        let file = tempfile::tempfile().unwrap();
        assert!(RawModeGuard::new(&file).is_err());
    }

    #[test]
    fn test_terminal_size_is_positive_when_available() {
        if let Ok((cols, rows)) = terminal_size() {
            assert!(cols > 0 && rows > 0);
        }
    }

    #[test]
    fn test_nonblocking_guard_restores_flags() {
        let file = tempfile::tempfile().unwrap();
        let fd = file.as_raw_fd();
        // SAFETY: valid fd owned by `file`.
        let before = unsafe { libc::fcntl(fd, libc::F_GETFL) };
        {
            let _guard = set_nonblocking(&file).unwrap();
            let during = unsafe { libc::fcntl(fd, libc::F_GETFL) };
            assert_ne!(during & libc::O_NONBLOCK, 0);
        }
        let after = unsafe { libc::fcntl(fd, libc::F_GETFL) };
        assert_eq!(before, after);
    }
}
