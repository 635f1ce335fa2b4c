//! Arbitrary terminal bytes must never panic the input parser, whether
//! parsed one sequence at a time or fed in chunks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termfolio::input::{InputParser, ParseError};

const MAX_ITERATIONS: usize = 10_000;

fuzz_target!(|data: &[u8]| {
    let parser = InputParser::new();
    let mut remaining = data;
    let mut iterations = 0;

    while !remaining.is_empty() && iterations < MAX_ITERATIONS {
        iterations += 1;
        match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                assert!(consumed > 0 && consumed <= remaining.len());
                remaining = &remaining[consumed..];
            }
            Err(ParseError::Empty | ParseError::Incomplete) => break,
            Err(ParseError::UnrecognizedSequence(seq)) => {
                remaining = &remaining[seq.len().clamp(1, remaining.len())..];
            }
            Err(ParseError::InvalidUtf8 | ParseError::PasteBufferOverflow) => {
                remaining = &remaining[1..];
            }
        }
    }
    assert!(iterations < MAX_ITERATIONS, "parser stopped making progress");

    // Streaming: split at every third byte.
    let mut streaming = InputParser::new();
    for chunk in data.chunks(3) {
        let _ = streaming.feed(chunk);
    }
});
