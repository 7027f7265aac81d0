//! Search box core: pure state machine, result renderer and view-model helpers.
mod effect;
mod msg;
mod render;
mod settings;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use render::{
    Capabilities, Cursor, Point, PointerEvent, Preview, ResultEntry, ResultList, Row, RowKind,
    Ticket,
};
pub use settings::{RendererSettings, COPY_FEEDBACK, NO_MATCHES_TEXT, PREVIEW_OFFSET};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ListStatus, PreviewView, RowView};
