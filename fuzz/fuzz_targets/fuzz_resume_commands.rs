//! Arbitrary command lines through the resume dispatcher.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termfolio::resume::Command;
use termfolio::{HistoryKind, ResumeEvent, ResumeOptions, ResumeState};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = Command::parse(text);

    let mut state = ResumeState::new(ResumeOptions {
        scrollback: Some(64),
        ..ResumeOptions::default()
    });
    for line in text.split('\n') {
        let _ = state.update(ResumeEvent::Command(line.to_string()));
        let _ = state.update(ResumeEvent::NavigateDown);
        let history = state.history();
        assert_eq!(history.entries().last().map(|e| e.kind), Some(HistoryKind::Prompt));
        assert!(history.len() <= 64);
    }
});
