//! Byte stream to [`Event`] decoding.
//!
//! Handles plain and control characters, UTF-8, the common CSI and SS3 key
//! sequences with xterm modifiers, focus reports, size reports and
//! bracketed paste. Mouse reporting is never enabled, so mouse sequences are
//! treated as unrecognized.

#![allow(clippy::match_same_arms)]
#![allow(clippy::unused_self)]

use crate::input::event::{Event, ResizeEvent};
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse.
    Empty,
    /// The input ends inside a sequence; retry with more bytes.
    Incomplete,
    /// A complete sequence that maps to nothing. Holds every byte of it.
    UnrecognizedSequence(Vec<u8>),
    InvalidUtf8,
    /// A bracketed paste grew past [`MAX_PASTE_BYTES`] without ending.
    PasteBufferOverflow,
}

/// An event plus the number of bytes it used.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Largest bracketed paste that is buffered while waiting for its end.
pub const MAX_PASTE_BYTES: usize = 1024 * 1024;

// CSI sequences longer than this without a final byte are junk.
const MAX_CSI_LEN: usize = 64;

const PASTE_START: &[u8] = b"\x1b[200~";
const PASTE_END: &[u8] = b"\x1b[201~";

/// Streaming decoder. [`InputParser::parse`] decodes one event from the
/// front of a slice; [`InputParser::feed`] keeps partial sequences between
/// reads.
#[derive(Clone, Debug, Default)]
pub struct InputParser {
    pending: Vec<u8>,
}

impl InputParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes held back from earlier reads.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Decode one event from the start of `input`.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter).into(), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab).into(), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace).into(), 1)),
            0x00 => Ok((KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CTRL).into(), 1)),
            0x01..=0x1a => {
                let c = char::from(first - 1 + b'a');
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::CTRL).into(), 1))
            }
            0x1c..=0x1f => Err(ParseError::UnrecognizedSequence(vec![first])),
            0x20..=0x7e => Ok((KeyEvent::char(char::from(first)).into(), 1)),
            0x80..=0xff => parse_utf8(input),
        }
    }

    /// Append `bytes` to whatever was left over and decode every complete
    /// event. Unrecognized or invalid bytes are dropped; an unfinished
    /// sequence is kept for the next call.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Event> {
        self.pending.extend_from_slice(bytes);
        let mut events = Vec::new();
        let mut offset = 0;
        while offset < self.pending.len() {
            match self.parse(&self.pending[offset..]) {
                Ok((event, consumed)) => {
                    events.push(event);
                    offset += consumed;
                }
                Err(ParseError::Incomplete) => break,
                Err(ParseError::PasteBufferOverflow) => offset = self.pending.len(),
                Err(ParseError::UnrecognizedSequence(seq)) => offset += seq.len().max(1),
                Err(ParseError::InvalidUtf8 | ParseError::Empty) => offset += 1,
            }
        }
        self.pending.drain(..offset);
        events
    }

    /// Drop any held-back bytes.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        let Some(&second) = input.get(1) else {
            return Err(ParseError::Incomplete);
        };
        match second {
            b'[' => self.parse_csi(input),
            b'O' => parse_ss3(input),
            0x1b => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
            0x20..=0x7e => Ok((
                KeyEvent::new(KeyCode::Char(char::from(second)), KeyModifiers::ALT).into(),
                2,
            )),
            _ => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
        }
    }

    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        let Some(end) = input
            .iter()
            .skip(2)
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 2)
        else {
            if input.len() > MAX_CSI_LEN {
                return Err(ParseError::UnrecognizedSequence(input.to_vec()));
            }
            return Err(ParseError::Incomplete);
        };
        let params = &input[2..end];
        let consumed = end + 1;
        let unrecognized = || ParseError::UnrecognizedSequence(input[..consumed].to_vec());

        if input.starts_with(PASTE_START) {
            return parse_paste(input);
        }

        match input[end] {
            b'A' => modified_key(params, KeyCode::Up, consumed),
            b'B' => modified_key(params, KeyCode::Down, consumed),
            b'C' => modified_key(params, KeyCode::Right, consumed),
            b'D' => modified_key(params, KeyCode::Left, consumed),
            b'H' => modified_key(params, KeyCode::Home, consumed),
            b'F' => modified_key(params, KeyCode::End, consumed),
            b'Z' => Ok((KeyEvent::key(KeyCode::BackTab).into(), consumed)),
            b'I' if params.is_empty() => Ok((Event::FocusGained, consumed)),
            b'O' if params.is_empty() => Ok((Event::FocusLost, consumed)),
            b'~' => {
                let (number, modifiers) = split_params(params);
                let code = match number {
                    1 | 7 => KeyCode::Home,
                    2 => KeyCode::Insert,
                    3 => KeyCode::Delete,
                    4 | 8 => KeyCode::End,
                    5 => KeyCode::PageUp,
                    6 => KeyCode::PageDown,
                    11..=15 => KeyCode::F(u8::try_from(number - 10).map_err(|_| unrecognized())?),
                    17..=21 => KeyCode::F(u8::try_from(number - 11).map_err(|_| unrecognized())?),
                    23 => KeyCode::F(11),
                    24 => KeyCode::F(12),
                    _ => return Err(unrecognized()),
                };
                Ok((KeyEvent::new(code, modifiers).into(), consumed))
            }
            b't' => {
                let fields: Vec<u32> = std::str::from_utf8(params)
                    .map_err(|_| ParseError::InvalidUtf8)?
                    .split(';')
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .map_err(|_| unrecognized())?;
                match fields.as_slice() {
                    [8, height, width] if *height > 0 && *width > 0 => Ok((
                        Event::Resize(ResizeEvent {
                            width: *width,
                            height: *height,
                        }),
                        consumed,
                    )),
                    _ => Err(unrecognized()),
                }
            }
            _ => Err(unrecognized()),
        }
    }
}

// `1;5` style parameters: key number, then xterm modifier value.
fn split_params(params: &[u8]) -> (u32, KeyModifiers) {
    let text = std::str::from_utf8(params).unwrap_or_default();
    let mut parts = text.split(';');
    let number = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1);
    let modifiers = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .map_or(KeyModifiers::empty(), KeyModifiers::from_xterm_param);
    (number, modifiers)
}

fn modified_key(params: &[u8], code: KeyCode, consumed: usize) -> ParseResult {
    let (_, modifiers) = split_params(params);
    Ok((KeyEvent::new(code, modifiers).into(), consumed))
}

fn parse_ss3(input: &[u8]) -> ParseResult {
    let Some(&last) = input.get(2) else {
        return Err(ParseError::Incomplete);
    };
    let code = match last {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'M' => KeyCode::Enter,
        b'P' => KeyCode::F(1),
        b'Q' => KeyCode::F(2),
        b'R' => KeyCode::F(3),
        b'S' => KeyCode::F(4),
        _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
    };
    Ok((KeyEvent::key(code).into(), 3))
}

fn parse_paste(input: &[u8]) -> ParseResult {
    let body = &input[PASTE_START.len()..];
    match find_subsequence(body, PASTE_END) {
        Some(pos) => {
            let text = String::from_utf8_lossy(&body[..pos]).into_owned();
            Ok((Event::Paste(text), PASTE_START.len() + pos + PASTE_END.len()))
        }
        None if body.len() > MAX_PASTE_BYTES => Err(ParseError::PasteBufferOverflow),
        None => Err(ParseError::Incomplete),
    }
}

fn parse_utf8(input: &[u8]) -> ParseResult {
    let len = match input[0] {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Err(ParseError::InvalidUtf8),
    };
    if input.len() < len {
        return Err(ParseError::Incomplete);
    }
    let text = std::str::from_utf8(&input[..len]).map_err(|_| ParseError::InvalidUtf8)?;
    let c = text.chars().next().ok_or(ParseError::InvalidUtf8)?;
    Ok((KeyEvent::char(c).into(), len))
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(input: &[u8]) -> KeyEvent {
        let (event, _) = InputParser::new().parse(input).unwrap();
        *event.key().unwrap()
    }

    #[test]
    fn test_plain_and_control() {
        assert_eq!(key(b"a"), KeyEvent::char('a'));
        assert_eq!(key(b"\r").code, KeyCode::Enter);
        assert_eq!(key(b"\x7f").code, KeyCode::Backspace);
        assert_eq!(key(b"\x03"), KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CTRL));
        assert_eq!(InputParser::new().parse(b""), Err(ParseError::Empty));
    }

    #[test]
    fn test_arrows_with_modifiers() {
        assert_eq!(key(b"\x1b[A").code, KeyCode::Up);
        assert_eq!(key(b"\x1bOB").code, KeyCode::Down);
        assert_eq!(
            key(b"\x1b[1;5C"),
            KeyEvent::new(KeyCode::Right, KeyModifiers::CTRL)
        );
    }

    #[test]
    fn test_tilde_keys() {
        assert_eq!(key(b"\x1b[3~").code, KeyCode::Delete);
        assert_eq!(key(b"\x1b[15~").code, KeyCode::F(5));
        assert_eq!(key(b"\x1b[24~").code, KeyCode::F(12));
        assert!(matches!(
            InputParser::new().parse(b"\x1b[99~"),
            Err(ParseError::UnrecognizedSequence(seq)) if seq == b"\x1b[99~"
        ));
    }

    #[test]
    fn test_utf8_and_alt() {
        assert_eq!(key("é".as_bytes()), KeyEvent::char('é'));
        assert_eq!(key(b"\x1bx"), KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(InputParser::new().parse(&[0xe6, 0x97]), Err(ParseError::Incomplete));
        assert_eq!(InputParser::new().parse(&[0xff]), Err(ParseError::InvalidUtf8));
    }

    #[test]
    fn test_resize_and_focus() {
        let parser = InputParser::new();
        assert_eq!(
            parser.parse(b"\x1b[8;24;80t"),
            Ok((Event::Resize(ResizeEvent { width: 80, height: 24 }), 10))
        );
        assert_eq!(parser.parse(b"\x1b[I"), Ok((Event::FocusGained, 3)));
        assert!(parser.parse(b"\x1b[8;x;80t").is_err());
    }

    #[test]
    fn test_paste_in_one_read() {
        let mut parser = InputParser::new();
        let events = parser.feed(b"\x1b[200~cd skills\x1b[201~\r");
        assert_eq!(
            events,
            vec![
                Event::Paste("cd skills".into()),
                KeyEvent::key(KeyCode::Enter).into()
            ]
        );
        assert!(parser.pending().is_empty());
    }

    #[test]
    fn test_feed_keeps_split_sequences() {
        let mut parser = InputParser::new();
        assert!(parser.feed(b"\x1b[").is_empty());
        assert_eq!(parser.pending(), b"\x1b[");
        assert_eq!(parser.feed(b"B"), vec![KeyEvent::key(KeyCode::Down).into()]);

        assert!(parser.feed(b"\x1b[200~hel").is_empty());
        assert_eq!(parser.feed(b"lo\x1b[201~"), vec![Event::Paste("hello".into())]);
    }

    #[test]
    fn test_feed_skips_garbage() {
        let mut parser = InputParser::new();
        let events = parser.feed(b"\x1b[<0;1;1Ma\xffb");
        assert_eq!(events, vec![KeyEvent::char('a').into(), KeyEvent::char('b').into()]);
    }

    #[test]
    fn test_runaway_csi_is_dropped() {
        let mut parser = InputParser::new();
        let mut junk = b"\x1b[".to_vec();
        junk.extend(std::iter::repeat_n(b'1', 100));
        assert!(parser.feed(&junk).is_empty());
        assert!(parser.pending().is_empty());
    }
}
