//! Scrollback history with a live trailing prompt.
//!
//! The last entry of a [`History`] is always the prompt placeholder. New
//! entries go in front of it: the prompt is taken off, the entry appended
//! and a fresh prompt put back, so there is never more than one prompt at
//! the tail.
//!
//! Nothing is dropped unless a scrollback limit is set. With a limit, the
//! oldest *groups* go first: a group is a `command` entry together with the
//! replies that follow it (the banner before the first command is a group
//! too). The newest group is never dropped, so a command's echo and its
//! reply stay together even when the limit is smaller than the group.

use serde::{Deserialize, Serialize};

/// What a history line represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// Messages from the shell itself (banner, logout).
    System,
    /// The live prompt placeholder.
    Prompt,
    /// An echoed command line.
    Command,
    /// Command output.
    Output,
    /// Unknown command or unresolved section.
    Error,
}

/// One line of scrollback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub kind: HistoryKind,
}

impl HistoryEntry {
    /// Create an entry of the given kind.
    pub fn new(kind: HistoryKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(HistoryKind::System, text)
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(HistoryKind::Prompt, text)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(HistoryKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(HistoryKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(HistoryKind::Error, text)
    }
}

/// Append-only scrollback whose last entry is always a prompt.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    prompt: String,
    limit: Option<usize>,
}

impl History {
    /// Create a history holding `banner` followed by the prompt.
    pub fn new<I>(prompt: impl Into<String>, banner: I) -> Self
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        let prompt = prompt.into();
        let mut entries: Vec<HistoryEntry> = banner
            .into_iter()
            .filter(|entry| entry.kind != HistoryKind::Prompt)
            .collect();
        entries.push(HistoryEntry::prompt(prompt.clone()));
        Self {
            entries,
            prompt,
            limit: None,
        }
    }

    /// Cap the number of kept entries (prompt included). `None` keeps
    /// everything.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<Option<usize>>) -> Self {
        self.limit = limit.into();
        self.trim();
        self
    }

    /// Insert `entry` before the trailing prompt.
    ///
    /// Prompt entries are rejected: the buffer manages its own prompt.
    pub fn commit(&mut self, entry: HistoryEntry) {
        if entry.kind == HistoryKind::Prompt {
            return;
        }
        self.entries.pop();
        self.entries.push(entry);
        self.entries.push(HistoryEntry::prompt(self.prompt.clone()));
        self.trim();
    }

    /// Insert several entries before the trailing prompt, in order.
    pub fn commit_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        for entry in entries {
            self.commit(entry);
        }
    }

    /// Drop everything but a fresh prompt.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::prompt(self.prompt.clone()));
    }

    /// All entries, oldest first. The last one is the prompt.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries, prompt included. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the prompt is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries committed so far, without the trailing prompt.
    #[must_use]
    pub fn committed(&self) -> &[HistoryEntry] {
        &self.entries[..self.entries.len() - 1]
    }

    /// The prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Configured scrollback limit, if any.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn trim(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        while self.entries.len() > limit {
            let group = self.oldest_group_len();
            // The last group is the one being written.
            if group == 0 || group >= self.entries.len() - 1 {
                break;
            }
            self.entries.drain(..group);
        }
    }

    // Length of the leading group: entries up to the next `command`.
    fn oldest_group_len(&self) -> usize {
        let committed = self.committed();
        if committed.is_empty() {
            return 0;
        }
        committed[1..]
            .iter()
            .position(|entry| entry.kind == HistoryKind::Command)
            .map_or(committed.len(), |next| next + 1)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
