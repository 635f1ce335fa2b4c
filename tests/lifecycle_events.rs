//! Lifecycle notifications emitted by the host.
//!
//! The callbacks are process-wide, so this file holds a single test.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use termfolio::event::names;
use termfolio::{
    App, AppOptions, LogLevel, RecordingOpener, ResumeOptions, ViewKind, set_event_callback,
    set_log_callback,
};

#[test]
fn test_events_and_logs_reach_callbacks() {
    let events: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
    let logs: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
    {
        let events = Arc::clone(&events);
        set_event_callback(move |name, data| {
            events.lock().unwrap().push((name.to_string(), data.to_string()));
        });
        let logs = Arc::clone(&logs);
        set_log_callback(move |level, message| {
            logs.lock().unwrap().push((level, message.to_string()));
        });
    }

    let mut showcase = App::new(AppOptions::default(), Box::new(RecordingOpener::default()));
    showcase.advance(Duration::from_secs(600));
    showcase.run_command("netstat -a");
    showcase.run_command("ssh git@github.com");
    drop(showcase);

    let options = AppOptions {
        view: ViewKind::Resume,
        resume: ResumeOptions {
            exit_delay: Duration::from_millis(5),
            ..ResumeOptions::default()
        },
        ..AppOptions::default()
    };
    let mut resume = App::new(options, Box::new(RecordingOpener::default()));
    resume.run_command("cd skills");
    resume.run_command("exit");
    resume.advance(Duration::from_millis(5));

    let events = events.lock().unwrap().clone();
    let expected: Vec<(String, String)> = [
        (names::TYPING_COMPLETE, ""),
        (names::SECTION_CHANGED, "network-tools"),
        (names::OPEN_URL, "https://github.com/TheBitty"),
        (names::SECTION_CHANGED, "skills"),
        (names::RELOAD, "resume"),
    ]
    .iter()
    .map(|(name, data)| ((*name).to_string(), (*data).to_string()))
    .collect();
    assert_eq!(events, expected);

    let logs = logs.lock().unwrap();
    assert!(
        logs.iter()
            .any(|(level, msg)| *level == LogLevel::Debug && msg == "run: cd skills")
    );
}
