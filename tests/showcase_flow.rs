//! Showcase behavior: the intro, the command table and the rendered panels.

mod common;

use common::{buffer_rows, ready_showcase};
use std::time::Duration;
use termfolio::effect::TypingTimer;
use termfolio::screen::{Theme, draw_showcase};
use termfolio::showcase::{Action, COMMANDS, resolve};
use termfolio::{
    App, AppOptions, Buffer, Effect, RecordingOpener, ShowcaseEvent, ShowcaseSection,
    ShowcaseState, Timer, TypingTiming,
};

fn fire(state: &mut ShowcaseState, effects: Vec<Effect>) -> Vec<Effect> {
    let timer = effects
        .iter()
        .find_map(Effect::timer)
        .expect("a follow-up timer");
    state.update(ShowcaseEvent::Timer(timer))
}

#[test]
fn test_intro_reveals_lines_in_order() {
    let mut state = ShowcaseState::with_intro(["a", "bb"], TypingTiming::default());
    let mut effects = state.start();
    let mut fired = Vec::new();
    while !effects.is_empty() {
        fired.push(effects[0].timer().unwrap());
        effects = fire(&mut state, effects);
    }
    assert_eq!(state.typing().revealed(), "a\nbb\n");
    assert!(state.take_typing_completed());
    assert!(!state.take_typing_completed());
    assert_eq!(
        fired,
        [
            TypingTimer::NextChar,
            TypingTimer::NextChar,
            TypingTimer::LineBreak,
            TypingTimer::NextChar,
            TypingTimer::NextChar,
            TypingTimer::NextChar,
            TypingTimer::LineBreak,
        ]
        .map(Timer::Typing)
    );
}

#[test]
fn test_every_menu_command_maps_to_its_section() {
    for (index, entry) in COMMANDS.iter().enumerate() {
        let mut state = ready_showcase();
        let effects = state.update(ShowcaseEvent::MenuShortcut(index));
        match entry.action {
            Action::Select(section) => {
                assert!(effects.is_empty(), "{}", entry.command);
                assert_eq!(state.active(), section, "{}", entry.command);
            }
            Action::Open(url) => {
                assert_eq!(effects, vec![Effect::OpenUrl(url.to_string())]);
                assert_eq!(state.active(), ShowcaseSection::Home);
            }
        }
        assert_eq!(state.menu_cursor(), index);
    }
}

#[test]
fn test_near_misses_go_home() {
    for command in ["LS", "ls ", " ls", "cat readme.md", "cd  contact", "", "help"] {
        assert_eq!(resolve(command), Action::Select(ShowcaseSection::Home), "{command:?}");
    }
}

#[test]
fn test_menu_waits_for_intro() {
    let mut state = ShowcaseState::default();
    let _ = state.start();
    assert!(state.update(ShowcaseEvent::MenuShortcut(0)).is_empty());
    assert_eq!(state.active(), ShowcaseSection::Home);

    // Direct command execution does not depend on the menu.
    let _ = state.update(ShowcaseEvent::Execute("whoami".into()));
    assert_eq!(state.active(), ShowcaseSection::Author);
}

#[test]
fn test_menu_cursor_wraps() {
    let mut state = ready_showcase();
    let _ = state.update(ShowcaseEvent::MenuUp);
    assert_eq!(state.menu_cursor(), COMMANDS.len() - 1);
    let _ = state.update(ShowcaseEvent::MenuDown);
    assert_eq!(state.menu_cursor(), 0);
}

#[test]
fn test_host_opens_github_through_opener() {
    let opener = RecordingOpener::default();
    let options = AppOptions {
        skip_intro: true,
        ..AppOptions::default()
    };
    let mut app = App::new(options, Box::new(opener.clone()));
    app.run_command("ls");
    app.run_command("ssh git@github.com");
    assert_eq!(app.active_section(), "projects");
    assert_eq!(opener.urls(), vec!["https://github.com/TheBitty".to_string()]);
}

#[test]
fn test_host_intro_with_custom_timing() {
    let options = AppOptions {
        timing: TypingTiming {
            char_interval: Duration::from_millis(1),
            line_pause: Duration::from_millis(2),
        },
        ..AppOptions::default()
    };
    let mut app = App::new(options, Box::new(RecordingOpener::default()));
    let total: usize = termfolio::content::showcase::INTRO_LINES
        .iter()
        .map(|line| line.chars().count() + 1)
        .sum();
    let lines = termfolio::content::showcase::INTRO_LINES.len() as u64;
    let needed = Duration::from_millis(total as u64 + 2 * lines);

    app.advance(needed - Duration::from_millis(1));
    assert!(!app.typing_complete());
    app.advance(Duration::from_millis(1));
    assert!(app.typing_complete());
    assert!(app.scheduler().is_idle());
}

#[test]
fn test_panels_render_their_content() {
    let cases = [
        ("cat README.md", "# Project Philosophy"),
        ("nmap -sV showcase", "PORT 443/tcp open  https"),
        ("whoami", "EXPERTISE: Red Team Operations"),
        ("hexdump -C skills", "|Cybersecurity Sk|"),
        ("cd contact", "Email: youremail@example.com"),
        ("nope", "Welcome to TheBitty's Project Showcase"),
    ];
    for (command, needle) in cases {
        let mut state = ready_showcase();
        let _ = state.update(ShowcaseEvent::Execute(command.into()));
        let mut buf = Buffer::new(120, 70);
        draw_showcase(&mut buf, &state, &Theme::default());
        let rows = buffer_rows(&buf);
        assert!(
            rows.iter().any(|row| row.contains(needle)),
            "{command}: {needle:?} not on screen"
        );
        assert!(rows[0].contains(&format!("~/showcase/{}", state.active().slug())));
    }
}
