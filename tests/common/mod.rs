//! Shared helpers for integration tests.

#![allow(dead_code)]
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use termfolio::renderer::{Renderer, RendererOptions};
use termfolio::{Buffer, Effect, History, ResumeEvent, ResumeState, ShowcaseEvent, ShowcaseState};

/// Type `text` into the resume input line and press Enter.
pub fn type_line(state: &mut ResumeState, text: &str) -> Vec<Effect> {
    for ch in text.chars() {
        let _ = state.update(ResumeEvent::Char(ch));
    }
    state.update(ResumeEvent::Submit)
}

/// One line per history entry: `kind: text`.
pub fn transcript(history: &History) -> String {
    history
        .iter()
        .map(|entry| {
            let kind = format!("{:?}", entry.kind).to_lowercase();
            format!("{kind}: {}", entry.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A showcase whose intro has already finished.
pub fn ready_showcase() -> ShowcaseState {
    let mut state = ShowcaseState::default();
    let _ = state.update(ShowcaseEvent::SkipIntro);
    state
}

/// Rows of a buffer with trailing blanks trimmed.
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    (0..buf.height())
        .map(|y| buf.row_text(y).trim_end().to_string())
        .collect()
}

/// A renderer that writes into memory with no terminal mode changes.
pub fn capture_renderer(width: u32, height: u32) -> Renderer<Vec<u8>> {
    Renderer::new(Vec::new(), width, height, RendererOptions::inline())
        .expect("renderer with non-zero size")
}

/// Feed ANSI output through a VT100 emulator and return its rows.
pub fn replay(bytes: &[u8], width: u32, height: u32) -> Vec<String> {
    let mut parser = vt100::Parser::new(height as u16, width as u16, 0);
    parser.process(bytes);
    parser
        .screen()
        .rows(0, width as u16)
        .map(|row| row.trim_end().to_string())
        .collect()
}
