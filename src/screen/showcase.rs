//! Showcase layout: title bar, banner, intro, menu, content panel.

use crate::buffer::{BoxStyle, Buffer, ClipRect};
use crate::content::showcase::{
    AUTHOR_ASCII, AUTHOR_BIO, AUTHOR_FIELDS, BANNER, CONTACTS, CYBER_SKILLS, HOME_BODY,
    HOME_FEATURED, HOME_TITLE, PUBLIC_KEY, README, SKILLS_HEXDUMP, TECH_SKILLS, TECHNOLOGY_SCAN,
};
use crate::content::{PROJECTS, Project, network_projects};
use crate::screen::{Pen, Theme, draw_title_bar};
use crate::showcase::{Action, COMMANDS, ShowcaseSection, ShowcaseState};
use crate::style::Style;
use unicode_width::UnicodeWidthStr;

const BANNER_MIN_WIDTH: u32 = 66;
const BANNER_MIN_HEIGHT: u32 = 30;
const CARET: &str = "█";

/// Draw the whole showcase view into `buf`.
pub fn draw_showcase(buf: &mut Buffer, state: &ShowcaseState, theme: &Theme) {
    buf.clear(theme.background);
    let (width, height) = buf.size();
    if width < 4 || height < 2 {
        return;
    }
    let section = state.active();
    draw_title_bar(buf, theme, &format!("~/showcase/{}", section.slug()));

    let left = 2;
    let inner_width = width - 4;
    let mut y = 2;

    if width >= BANNER_MIN_WIDTH && height >= BANNER_MIN_HEIGHT {
        for line in BANNER {
            buf.draw_text_clipped(left, y, inner_width, line, theme.accent().with_bold());
            y += 1;
        }
    } else {
        let header = "THEBITTY // project showcase";
        buf.draw_text_clipped(left, y, inner_width, header, theme.heading());
        y += 1;
    }
    y += 1;

    let rest = ClipRect::new(left, y, inner_width, height.saturating_sub(y));
    y = draw_intro(buf, state, theme, rest);

    if state.menu_visible() {
        y += 1;
        let rest = ClipRect::new(left, y, inner_width, height.saturating_sub(y));
        y = draw_menu(buf, state, theme, rest);
    }

    // Home waits for the intro; other sections can be reached through `execute`.
    let home_pending = section == ShowcaseSection::Home && !state.menu_visible();
    let panel = ClipRect::new(1, y + 1, width - 2, height.saturating_sub(y + 1));
    if panel.height >= 3 && !home_pending {
        draw_panel(buf, section, theme, panel);
    }
}

// Returns the first row below the intro text.
fn draw_intro(buf: &mut Buffer, state: &ShowcaseState, theme: &Theme, area: ClipRect) -> u32 {
    let typing = state.typing();
    let mut lines: Vec<&str> = typing.revealed().split('\n').collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let typing_now = typing.is_started() && !typing.is_complete();
    if typing_now && lines.is_empty() {
        lines.push("");
    }

    let mut y = area.y;
    let count = lines.len();
    for (i, line) in lines.into_iter().enumerate() {
        if y >= area.bottom() {
            break;
        }
        let drawn = buf.draw_text_clipped(area.x, y, area.width, line, theme.accent());
        if typing_now && i + 1 == count {
            let room = area.width.saturating_sub(drawn);
            buf.draw_text_clipped(area.x + drawn, y, room, CARET, theme.accent());
        }
        y += 1;
    }
    y
}

// Menu items flow left to right and wrap; the highlighted item's
// description goes on the row below.
fn draw_menu(buf: &mut Buffer, state: &ShowcaseState, theme: &Theme, area: ClipRect) -> u32 {
    let mut x = area.x;
    let mut y = area.y;
    for (i, entry) in COMMANDS.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, entry.command);
        let label_width = label.width() as u32;
        if x > area.x && x + label_width > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            return y;
        }
        let style = if i == state.menu_cursor() {
            theme.selected()
        } else {
            theme.text().with_bg(theme.panel)
        };
        x += buf.draw_text_clipped(x, y, area.right().saturating_sub(x), &label, style);
        x += 1;
    }
    y += 1;

    if let Some(entry) = COMMANDS.get(state.menu_cursor()) {
        let hint = format!("# {}", entry.description);
        buf.draw_text_clipped(area.x, y, area.width, &hint, theme.muted());
        y += 1;
    }
    y
}

fn panel_title(section: ShowcaseSection) -> &'static str {
    COMMANDS
        .iter()
        .find(|entry| entry.action == Action::Select(section))
        .map_or("welcome", |entry| entry.command)
}

fn draw_panel(buf: &mut Buffer, section: ShowcaseSection, theme: &Theme, area: ClipRect) {
    buf.fill_rect(area, theme.panel);
    buf.draw_box(area, &BoxStyle::rounded(Style::fg(theme.border)), Some(panel_title(section)));

    let inner = ClipRect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height - 2,
    );
    let mut pen = Pen::new(buf, inner);
    match section {
        ShowcaseSection::Home => {
            pen.line(HOME_TITLE, theme.heading());
            pen.blank();
            pen.wrapped(HOME_BODY, theme.text());
            pen.blank();
            pen.wrapped(HOME_FEATURED, theme.text());
        }
        ShowcaseSection::Projects => {
            for project in PROJECTS {
                project_entry(&mut pen, project, theme);
            }
        }
        ShowcaseSection::NetworkTools => {
            pen.line("Active Internet connections (servers and established)", theme.muted());
            pen.blank();
            let mut any = false;
            for project in network_projects() {
                project_entry(&mut pen, project, theme);
                any = true;
            }
            if !any {
                pen.line("no networking projects found", theme.error());
            }
        }
        ShowcaseSection::About => {
            for (heading, paragraph) in README {
                pen.line(heading, theme.accent().with_bold());
                pen.wrapped(paragraph, theme.text());
                pen.blank();
            }
        }
        ShowcaseSection::Technologies => {
            pen.line("Starting Nmap scan on showcase", theme.muted());
            pen.blank();
            for result in &TECHNOLOGY_SCAN {
                pen.line(result.port, theme.accent());
                pen.wrapped_indent(result.service, theme.text(), 2);
                pen.wrapped_indent(result.details, theme.muted(), 2);
                pen.blank();
            }
            let done = format!("Nmap done: {} services detected", TECHNOLOGY_SCAN.len());
            pen.line(&done, theme.muted());
        }
        ShowcaseSection::Author => {
            for line in AUTHOR_ASCII {
                pen.line(line, theme.label());
            }
            pen.blank();
            for (label, value) in AUTHOR_FIELDS {
                pen.spans(&[(label, theme.label()), (" ", theme.text()), (value, theme.text())]);
            }
            pen.blank();
            pen.wrapped(AUTHOR_BIO, theme.text());
        }
        ShowcaseSection::Skills => {
            for line in SKILLS_HEXDUMP {
                pen.line(line, theme.accent());
            }
            pen.blank();
            skill_list(&mut pen, "Cybersecurity", &CYBER_SKILLS, theme);
            pen.blank();
            skill_list(&mut pen, "Technical", &TECH_SKILLS, theme);
        }
        ShowcaseSection::Contact => {
            pen.line("Get in touch", theme.heading());
            pen.blank();
            for (label, value) in CONTACTS {
                pen.spans(&[(label, theme.label()), (" ", theme.text()), (value, theme.link())]);
            }
            pen.blank();
            pen.line("Public key:", theme.label());
            pen.wrapped(PUBLIC_KEY, theme.muted());
        }
    }
}

fn project_entry(pen: &mut Pen<'_>, project: &Project, theme: &Theme) {
    pen.spans(&[("▸ ", theme.accent()), (project.name, theme.label())]);
    pen.wrapped_indent(project.description, theme.text(), 2);
    pen.wrapped_indent(&project.tags.join(" · "), theme.muted(), 2);
    pen.wrapped_indent(project.link, theme.link(), 2);
    pen.blank();
}

fn skill_list(pen: &mut Pen<'_>, heading: &str, skills: &[&str], theme: &Theme) {
    pen.line(heading, theme.heading());
    for skill in skills {
        pen.spans(&[("• ", theme.accent()), (*skill, theme.text())]);
    }
}
