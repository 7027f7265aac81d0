use crate::{AppState, Cursor, Effect, Msg, PointerEvent};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if text == state.query() {
                return (state, Vec::new());
            }
            state.set_query(text.clone());
            vec![Effect::QueryChanged { query: text }]
        }
        Msg::SearchSettled { ticket, results } => {
            state.replace_results(ticket, results);
            Vec::new()
        }
        Msg::Pointer { row, event } => handle_pointer(&mut state, row, event),
        Msg::CopyFinished { succeeded } => {
            if succeeded {
                let generation = state.begin_copy_feedback();
                vec![Effect::ScheduleCursorReset {
                    generation,
                    after: state.settings().copy_feedback,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CursorResetDue { generation } => {
            // A newer copy restarted the feedback; its own reset will follow.
            if generation == state.feedback_generation() && state.cursor() == Cursor::Copied {
                let resting = if state.hovered_row().is_some() {
                    Cursor::Copy
                } else {
                    Cursor::Default
                };
                state.set_cursor(resting);
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Single dispatch point for pointer activity; what a row reacts to is
/// decided by its capability set, not by per-row handlers.
fn handle_pointer(state: &mut AppState, row: usize, event: PointerEvent) -> Vec<Effect> {
    let Some(target) = state.rows().get(row) else {
        return Vec::new();
    };
    let capabilities = target.capabilities;
    let payload = target.payload.clone();

    match event {
        PointerEvent::Enter(pointer) => {
            if let (true, Some(text)) = (capabilities.previewable, payload) {
                state.show_preview(row, text, pointer);
            }
            if capabilities.copyable && state.cursor() != Cursor::Copied {
                state.set_cursor(Cursor::Copy);
            }
            Vec::new()
        }
        PointerEvent::Move(pointer) => {
            if capabilities.previewable {
                state.move_preview(row, pointer);
            }
            Vec::new()
        }
        PointerEvent::Leave => {
            if state.hide_preview(row) && state.cursor() == Cursor::Copy {
                state.set_cursor(Cursor::Default);
            }
            Vec::new()
        }
        PointerEvent::Click => match payload {
            Some(text) if capabilities.copyable => vec![Effect::CopyToClipboard { text }],
            _ => Vec::new(),
        },
    }
}
