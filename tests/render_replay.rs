//! The ANSI stream the renderer emits, replayed through a VT100 emulator,
//! must show exactly what the cell buffer holds.

mod common;

use common::{buffer_rows, capture_renderer, ready_showcase, replay, type_line};
use termfolio::screen::{Theme, draw_resume, draw_showcase};
use termfolio::{ResumeEvent, ResumeState, ShowcaseEvent, Style};

#[test]
fn test_first_frame_replays_exactly() {
    let (width, height) = (100, 40);
    let mut renderer = capture_renderer(width, height);
    let state = ready_showcase();
    draw_showcase(renderer.buffer(), &state, &Theme::default());
    renderer.present().unwrap();

    let screen = replay(renderer.writer(), width, height);
    assert_eq!(screen, buffer_rows(renderer.front_buffer()));
    assert!(screen[0].contains("~/showcase/home"));
}

#[test]
fn test_incremental_frames_replay_exactly() {
    let (width, height) = (80, 24);
    let mut renderer = capture_renderer(width, height);
    let theme = Theme::default();
    let mut state = ResumeState::default();

    draw_resume(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();

    for line in ["ls", "cd experience", "whoami"] {
        let _ = type_line(&mut state, line);
        draw_resume(renderer.buffer(), &state, &theme);
        renderer.present().unwrap();
    }
    let _ = state.update(ResumeEvent::NavigateDown);
    draw_resume(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();

    let screen = replay(renderer.writer(), width, height);
    assert_eq!(screen, buffer_rows(renderer.front_buffer()));
    assert!(screen.iter().any(|row| row.contains("command not found: whoami")));
    assert!(screen[0].contains("~/education"));
}

#[test]
fn test_unchanged_frame_writes_nothing() {
    let mut renderer = capture_renderer(60, 20);
    let state = ready_showcase();
    let theme = Theme::default();
    draw_showcase(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();
    let first = renderer.writer().len();

    draw_showcase(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();
    assert_eq!(renderer.writer().len(), first);
    assert_eq!(renderer.stats().last_frame_cells, 0);
}

#[test]
fn test_menu_move_repaints_only_menu() {
    let mut renderer = capture_renderer(100, 40);
    let mut state = ready_showcase();
    let theme = Theme::default();
    draw_showcase(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();

    let _ = state.update(ShowcaseEvent::MenuDown);
    draw_showcase(renderer.buffer(), &state, &theme);
    renderer.present().unwrap();
    let changed = renderer.stats().last_frame_cells;
    assert!(changed > 0);
    assert!(changed < 100 * 40 / 4, "{changed} cells repainted");

    let screen = replay(renderer.writer(), 100, 40);
    assert_eq!(screen, buffer_rows(renderer.front_buffer()));
}

#[test]
fn test_wide_glyphs_survive_replay() {
    let mut renderer = capture_renderer(12, 2);
    renderer.buffer().draw_text(0, 0, "日本 ok", Style::NONE);
    renderer.buffer().draw_text(0, 1, "a😀b", Style::NONE);
    renderer.present().unwrap();
    let screen = replay(renderer.writer(), 12, 2);
    assert_eq!(screen, vec!["日本 ok".to_string(), "a😀b".to_string()]);
    assert_eq!(screen, buffer_rows(renderer.front_buffer()));
}
