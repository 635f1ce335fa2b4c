//! Resume layout: section tabs, a content pane and the terminal pane.
//!
//! Wide terminals put the panes side by side, narrow ones stack them. The
//! terminal pane always shows the tail of the scrollback so the live prompt
//! stays on screen.

use crate::buffer::{BoxStyle, Buffer, ClipRect, wrap_text};
use crate::content::PROJECTS;
use crate::content::resume::{
    CONTACTS, EDUCATION, EXPERIENCE, Entry, LOCATION, NAME, ROLE, SKILLS, SUMMARY, Template,
};
use crate::history::{HistoryEntry, HistoryKind};
use crate::resume::ResumeState;
use crate::screen::{Pen, Theme, draw_title_bar};
use crate::style::Style;
use unicode_width::UnicodeWidthStr;

const SIDE_BY_SIDE_MIN_WIDTH: u32 = 100;
const CURSOR: &str = "█";

/// One visual row of the terminal pane.
type Row = Vec<(String, Style)>;

/// Draw the whole resume view into `buf`.
pub fn draw_resume(buf: &mut Buffer, state: &ResumeState, theme: &Theme) {
    buf.clear(theme.background);
    let (width, height) = buf.size();
    if width < 4 || height < 3 {
        return;
    }
    let section = state.active_section();
    draw_title_bar(buf, theme, &format!("guest@resume: ~/{}", section.id));
    draw_tabs(buf, state, theme, ClipRect::new(1, 1, width - 2, 1));

    let body = ClipRect::new(0, 2, width, height - 2);
    let (content, terminal) = if width >= SIDE_BY_SIDE_MIN_WIDTH {
        let left = body.width * 11 / 20;
        (
            ClipRect::new(body.x, body.y, left, body.height),
            ClipRect::new(body.x + left, body.y, body.width - left, body.height),
        )
    } else {
        let top = body.height / 2;
        (
            ClipRect::new(body.x, body.y, body.width, top),
            ClipRect::new(body.x, body.y + top, body.width, body.height - top),
        )
    };

    if content.height >= 3 {
        draw_content(buf, state, theme, content);
    }
    if terminal.height >= 3 {
        draw_terminal(buf, state, theme, terminal);
    }
}

fn draw_tabs(buf: &mut Buffer, state: &ResumeState, theme: &Theme, area: ClipRect) {
    let mut x = area.x;
    for (i, section) in state.sections().iter().enumerate() {
        let room = area.right().saturating_sub(x);
        if room == 0 {
            break;
        }
        let style = if i == state.active() {
            theme.selected()
        } else {
            theme.muted()
        };
        x += buf.draw_text_clipped(x, area.y, room, &format!(" {} ", section.title), style);
        x += 1;
    }
}

fn draw_content(buf: &mut Buffer, state: &ResumeState, theme: &Theme, area: ClipRect) {
    let section = state.active_section();
    buf.fill_rect(area, theme.panel);
    buf.draw_box(area, &BoxStyle::rounded(Style::fg(theme.border)), Some(section.title));

    let inner = ClipRect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height - 2,
    );
    let mut pen = Pen::new(buf, inner);
    match section.template {
        Template::Summary => {
            pen.line(NAME, theme.heading());
            pen.line(ROLE, theme.label());
            pen.line(LOCATION, theme.muted());
            pen.blank();
            pen.wrapped(SUMMARY, theme.text());
        }
        Template::Skills => {
            for (heading, entries) in SKILLS {
                pen.line(heading, theme.accent().with_bold());
                pen.wrapped_indent(&entries.join(" · "), theme.text(), 2);
                pen.blank();
            }
        }
        Template::Experience => entries(&mut pen, &EXPERIENCE, theme),
        Template::Education => entries(&mut pen, &EDUCATION, theme),
        Template::Projects => {
            for project in PROJECTS {
                pen.line(project.name, theme.label());
                pen.wrapped_indent(project.link, theme.link(), 2);
            }
        }
        Template::Contact => {
            for (label, value) in CONTACTS {
                let label = format!("{label}:");
                pen.spans(&[
                    (label.as_str(), theme.label()),
                    (" ", theme.text()),
                    (value, theme.link()),
                ]);
            }
        }
    }
}

fn entries(pen: &mut Pen<'_>, list: &[Entry], theme: &Theme) {
    for entry in list {
        let heading = format!("{} @ {}", entry.heading, entry.place);
        pen.line(&heading, theme.label());
        pen.line(entry.period, theme.muted());
        for detail in entry.details {
            pen.bullet("- ", theme.accent(), detail, theme.text());
        }
        pen.blank();
    }
}

fn draw_terminal(buf: &mut Buffer, state: &ResumeState, theme: &Theme, area: ClipRect) {
    buf.draw_box(area, &BoxStyle::single(Style::fg(theme.border)), Some("terminal"));
    let inner = ClipRect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height - 2,
    );
    if inner.width == 0 {
        return;
    }

    let history = state.history();
    let mut rows: Vec<Row> = Vec::new();
    for entry in history.iter() {
        let width = inner.width as usize;
        layout_entry(&mut rows, entry, history.prompt(), state.input(), theme, width);
    }

    let skip = rows.len().saturating_sub(inner.height as usize);
    for (offset, row) in rows[skip..].iter().enumerate() {
        let y = inner.y + offset as u32;
        let mut x = inner.x;
        for (text, style) in row {
            let room = inner.right().saturating_sub(x);
            if room == 0 {
                break;
            }
            x += buf.draw_text_clipped(x, y, room, text, *style);
        }
    }
}

fn layout_entry(
    rows: &mut Vec<Row>,
    entry: &HistoryEntry,
    prompt: &str,
    input: &str,
    theme: &Theme,
    width: usize,
) {
    match entry.kind {
        HistoryKind::Prompt => {
            let line = format!("{input}{CURSOR}");
            prompted(rows, prompt, &line, theme, width);
        }
        HistoryKind::Command => prompted(rows, prompt, &entry.text, theme, width),
        HistoryKind::System => block(rows, &entry.text, Style::fg(theme.purple), width),
        HistoryKind::Output => block(rows, &entry.text, theme.text(), width),
        HistoryKind::Error => block(rows, &entry.text, theme.error(), width),
    }
}

// `prompt text` on one row when it fits, wrapped in one color otherwise.
fn prompted(rows: &mut Vec<Row>, prompt: &str, text: &str, theme: &Theme, width: usize) {
    if prompt.width() + 1 + text.width() <= width {
        rows.push(vec![
            (format!("{prompt} "), theme.accent()),
            (text.to_string(), theme.text()),
        ]);
    } else {
        for line in wrap_text(&format!("{prompt} {text}"), width) {
            rows.push(vec![(line, theme.text())]);
        }
    }
}

// Lines that fit keep their leading whitespace.
fn block(rows: &mut Vec<Row>, text: &str, style: Style, width: usize) {
    for line in text.split('\n') {
        if line.width() <= width {
            rows.push(vec![(line.to_string(), style)]);
        } else {
            rows.extend(wrap_text(line, width).into_iter().map(|l| vec![(l, style)]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ResumeEvent;

    fn typed(state: &mut ResumeState, text: &str) {
        for ch in text.chars() {
            let _ = state.update(ResumeEvent::Char(ch));
        }
        let _ = state.update(ResumeEvent::Submit);
    }

    fn render(state: &ResumeState, width: u32, height: u32) -> String {
        let mut buf = Buffer::new(width, height);
        draw_resume(&mut buf, state, &Theme::default());
        buf.to_text()
    }

    #[test]
    fn test_initial_screen() {
        let text = render(&ResumeState::default(), 80, 30);
        assert!(text.contains("guest@resume: ~/summary"));
        assert!(text.contains("Welcome to TheBitty's terminal resume."));
        assert!(text.contains("guest@resume:~$ █"));
        assert!(text.contains(ROLE));
    }

    #[test]
    fn test_help_keeps_indentation() {
        let mut state = ResumeState::default();
        typed(&mut state, "help");
        let text = render(&state, 120, 40);
        assert!(text.contains("  cd <section>  Open a section"));
    }

    #[test]
    fn test_cd_switches_content() {
        let mut state = ResumeState::default();
        typed(&mut state, "cd skills");
        let text = render(&state, 80, 30);
        assert!(text.contains("guest@resume: ~/skills"));
        assert!(text.contains("Languages"));
        assert!(text.contains("Navigated to Skills"));
    }

    #[test]
    fn test_terminal_follows_tail() {
        let mut state = ResumeState::default();
        for _ in 0..30 {
            typed(&mut state, "ls");
        }
        typed(&mut state, "whoami");
        let _ = state.update(ResumeEvent::Char('x'));
        let text = render(&state, 80, 24);
        assert!(text.contains("command not found: whoami"));
        assert!(text.contains("guest@resume:~$ x█"));
        assert!(!text.contains("Welcome to"));
    }

    #[test]
    fn test_tiny_buffer_does_not_panic() {
        let mut state = ResumeState::default();
        typed(&mut state, "help");
        for (w, h) in [(0, 0), (2, 2), (5, 3), (8, 8), (300, 4)] {
            let _ = render(&state, w, h);
        }
    }
}
