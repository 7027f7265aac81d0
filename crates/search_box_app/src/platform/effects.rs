use std::sync::mpsc;
use std::thread;

use pipeline_logging::{pipeline_debug, pipeline_info};
use search_box_core::{Effect, Msg, ResultEntry, ResultList};
use search_box_engine::{EngineEvent, EngineEvents, EngineHandle, SearchError, SearchOutcome};

use super::AppEvent;

/// Executes core effects against the engine and feeds engine events back to
/// the dispatch loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(
        engine: EngineHandle,
        events: EngineEvents,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_loop(events, event_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::QueryChanged { query } => {
                    pipeline_debug!("QueryChanged query_len={}", query.len());
                    self.engine.input_changed(query);
                }
                Effect::CopyToClipboard { text } => {
                    pipeline_info!("CopyToClipboard text_len={}", text.len());
                    self.engine.copy_to_clipboard(text);
                }
                Effect::ScheduleCursorReset { generation, after } => {
                    self.engine.schedule_cursor_reset(generation, after);
                }
            }
        }
    }
}

/// Pumps engine events into the dispatch loop until either side hangs up.
fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if event_tx.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchSettled(settled) => Msg::SearchSettled {
            ticket: settled.ticket,
            results: map_result(settled.result),
        },
        // The engine already logged the failure; the core only needs the verdict.
        EngineEvent::CopyFinished { result } => Msg::CopyFinished {
            succeeded: result.is_ok(),
        },
        EngineEvent::CursorResetDue { generation } => Msg::CursorResetDue { generation },
    }
}

fn map_result(result: Result<SearchOutcome, SearchError>) -> ResultList {
    match result {
        Ok(SearchOutcome::Cleared) => ResultList::Cleared,
        Ok(SearchOutcome::NoMatches) => ResultList::NoMatches,
        Ok(SearchOutcome::Matches(hits)) => ResultList::Entries(
            hits.into_iter()
                .map(|hit| ResultEntry::new(hit.full_identifier, hit.label))
                .collect(),
        ),
        Err(err) => ResultList::Failed(err.kind.to_string()),
    }
}
