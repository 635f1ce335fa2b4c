//! Property-based tests for the scrollback and the resume dispatcher.

mod common;

use common::type_line;
use proptest::prelude::*;
use termfolio::content::resume::SECTIONS;
use termfolio::{History, HistoryEntry, HistoryKind, ResumeEvent, ResumeOptions, ResumeState};

// ============================================================================
// Strategies
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = HistoryKind> {
    prop_oneof![
        Just(HistoryKind::System),
        Just(HistoryKind::Prompt),
        Just(HistoryKind::Command),
        Just(HistoryKind::Output),
        Just(HistoryKind::Error),
    ]
}

fn entry_strategy() -> impl Strategy<Value = HistoryEntry> {
    (kind_strategy(), "[a-z ]{0,12}").prop_map(|(kind, text)| HistoryEntry::new(kind, text))
}

/// Anything a user might type, biased towards real commands.
fn input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("help".to_string()),
        Just("ls".to_string()),
        Just("clear".to_string()),
        Just("contact".to_string()),
        Just("exit".to_string()),
        prop::sample::select(SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>())
            .prop_map(|id| format!("cd {id}")),
        "[ a-zA-Z]{0,10}",
    ]
}

#[derive(Clone, Debug)]
enum Step {
    Line(String),
    Up,
    Down,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => input_strategy().prop_map(Step::Line),
        1 => Just(Step::Up),
        1 => Just(Step::Down),
    ]
}

fn prompt_count(history: &History) -> usize {
    history
        .iter()
        .filter(|entry| entry.kind == HistoryKind::Prompt)
        .count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_prompt_is_always_last_and_unique(
        entries in prop::collection::vec(entry_strategy(), 0..40),
        limit in 1usize..20,
    ) {
        let mut history = History::new("$", Vec::new()).with_limit(limit);
        for entry in entries {
            history.commit(entry);
            prop_assert_eq!(history.entries().last().map(|e| e.kind), Some(HistoryKind::Prompt));
            prop_assert_eq!(prompt_count(&history), 1);
            // Only the newest group may push past the limit.
            let single_group = history
                .committed()
                .iter()
                .skip(1)
                .all(|e| e.kind != HistoryKind::Command);
            prop_assert!(history.len() <= limit || single_group);
        }
    }

    #[test]
    fn prop_clear_leaves_one_prompt(
        entries in prop::collection::vec(entry_strategy(), 0..40),
    ) {
        let mut history = History::new("$", Vec::new());
        history.commit_all(entries);
        history.clear();
        prop_assert_eq!(history.len(), 1);
        prop_assert_eq!(history.entries()[0].kind, HistoryKind::Prompt);
    }

    #[test]
    fn prop_session_invariants(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let mut state = ResumeState::default();
        for step in steps {
            let before_len = state.history().len();
            let before_active = state.active();
            match step {
                Step::Up => {
                    let _ = state.update(ResumeEvent::NavigateUp);
                    prop_assert_eq!(state.active(), before_active.saturating_sub(1));
                    prop_assert_eq!(state.history().len(), before_len + 1);
                }
                Step::Down => {
                    let _ = state.update(ResumeEvent::NavigateDown);
                    prop_assert_eq!(state.active(), (before_active + 1).min(SECTIONS.len() - 1));
                    prop_assert_eq!(state.history().len(), before_len + 1);
                }
                Step::Line(line) => {
                    let _ = type_line(&mut state, &line);
                    let normalized = line.trim().to_lowercase();
                    let len = state.history().len();
                    if normalized.is_empty() {
                        prop_assert_eq!(len, before_len);
                    } else if normalized == "clear" {
                        prop_assert_eq!(len, 1);
                    } else {
                        prop_assert!(len == before_len + 1 || len == before_len + 2);
                    }
                    if matches!(normalized.as_str(), "help" | "ls" | "clear" | "exit") {
                        prop_assert_eq!(state.active(), before_active);
                    }
                    prop_assert_eq!(state.input(), "");
                }
            }
            prop_assert_eq!(
                state.history().entries().last().map(|e| e.kind),
                Some(HistoryKind::Prompt)
            );
            prop_assert_eq!(prompt_count(state.history()), 1);
            prop_assert!(state.active() < SECTIONS.len());
        }
    }

    #[test]
    fn prop_unknown_input_adds_one_error(word in "[a-z]{1,8}") {
        prop_assume!(!matches!(word.as_str(), "help" | "ls" | "clear" | "contact" | "exit"));
        let mut state = ResumeState::default();
        let before = state.history().len();
        let _ = type_line(&mut state, &word);
        prop_assert_eq!(state.history().len(), before + 2);
        let last = state.history().committed().last().unwrap();
        prop_assert_eq!(last.kind, HistoryKind::Error);
        prop_assert!(last.text.contains(&word));
        prop_assert_eq!(state.active(), 0);
    }

    #[test]
    fn prop_limited_scrollback_never_orphans_replies(
        lines in prop::collection::vec(input_strategy(), 1..40),
        limit in 0usize..12,
    ) {
        let mut state = ResumeState::new(ResumeOptions {
            scrollback: Some(limit),
            ..ResumeOptions::default()
        });
        for line in lines {
            let _ = type_line(&mut state, &line);
            let committed = state.history().committed();
            if let Some(first) = committed.first() {
                prop_assert!(
                    matches!(first.kind, HistoryKind::Command | HistoryKind::System),
                    "scrollback starts with {:?}",
                    first.kind
                );
            }
            prop_assert!(state.history().len() <= limit.max(3));
        }
    }
}
