mod common;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use search_box_engine::{
    ClipboardError, ClipboardWriter, EngineEvent, EngineEvents, EngineHandle, SearchOutcome,
};

use common::{init_logging, ScriptedClient};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<String>>,
    broken: bool,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn engine_with(clipboard: Arc<FakeClipboard>) -> (EngineHandle, EngineEvents) {
    init_logging();
    EngineHandle::with_parts(
        Duration::from_millis(20),
        Arc::new(ScriptedClient::new()),
        clipboard,
    )
    .expect("engine starts")
}

#[test]
fn input_produces_settled_search_event() {
    let (engine, events) = engine_with(Arc::new(FakeClipboard::default()));

    engine.input_changed("abc");
    let event = events.recv_timeout(WAIT).expect("search settles");

    match event {
        EngineEvent::SearchSettled(settled) => {
            assert_eq!(settled.ticket, 1);
            assert_eq!(settled.query, "abc");
            assert_eq!(settled.result.as_ref().map(SearchOutcome::hit_count), Ok(1));
        }
        other => panic!("unexpected event {other:?}"),
    }
    engine.shutdown();
}

#[test]
fn copy_reports_success_and_writes_text() {
    let clipboard = Arc::new(FakeClipboard::default());
    let (engine, events) = engine_with(clipboard.clone());

    engine.copy_to_clipboard("/a/b/c.txt");

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::CopyFinished { result: Ok(()) })
    );
    assert_eq!(*clipboard.written.lock().unwrap(), vec!["/a/b/c.txt"]);
    engine.shutdown();
}

#[test]
fn copy_failure_is_reported_not_raised() {
    let clipboard = Arc::new(FakeClipboard {
        broken: true,
        ..FakeClipboard::default()
    });
    let (engine, events) = engine_with(clipboard);

    engine.copy_to_clipboard("/a/b/c.txt");

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::CopyFinished {
            result: Err(ClipboardError::Unavailable("no display".to_string()))
        })
    );
    engine.shutdown();
}

#[test]
fn cursor_reset_arrives_after_delay() {
    let (engine, events) = engine_with(Arc::new(FakeClipboard::default()));

    engine.schedule_cursor_reset(3, Duration::from_millis(10));

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::CursorResetDue { generation: 3 })
    );
    engine.shutdown();
}

#[test]
fn events_stop_after_shutdown() {
    let (engine, events) = engine_with(Arc::new(FakeClipboard::default()));

    engine.input_changed("pending");
    engine.shutdown();

    assert_eq!(events.recv_timeout(Duration::from_millis(500)), None);
}

#[test]
fn try_recv_returns_at_once_while_another_thread_waits_on_commands() {
    let (engine, events) = engine_with(Arc::new(FakeClipboard::default()));
    let commands = engine.clone();
    let typist = thread::spawn(move || {
        for text in ["a", "ab", "abc"] {
            commands.input_changed(text);
        }
    });

    let started = Instant::now();
    let polled = events.try_recv();
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(matches!(polled, None | Some(EngineEvent::SearchSettled(_))));

    typist.join().unwrap();
    engine.shutdown();
}

#[test]
fn blocked_receiver_does_not_hold_up_cloned_handles() {
    let (engine, events) = engine_with(Arc::new(FakeClipboard::default()));
    let pump = thread::spawn(move || events.recv());

    // The pump is parked in `recv`; a clone must still be able to drive the engine.
    let clone = engine.clone();
    clone.copy_to_clipboard("/a/b/c.txt");

    assert_eq!(
        pump.join().unwrap(),
        Some(EngineEvent::CopyFinished { result: Ok(()) })
    );
    engine.shutdown();
}
