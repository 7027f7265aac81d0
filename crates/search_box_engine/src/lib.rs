//! Search box engine: debounced, serialized search pipeline and its IO.
mod clipboard;
mod client;
mod debounce;
mod engine;
mod serializer;
mod session;
mod settings;
mod types;

pub use clipboard::{ArboardClipboard, ClipboardWriter};
pub use client::{ReqwestSearchClient, SearchClient};
pub use debounce::Debouncer;
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use serializer::{ChannelRenderSink, RenderSink, RequestSerializer};
pub use session::{QueryCell, SearchSession};
pub use settings::{EngineConfig, SearchSettings, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_QUIET};
pub use types::{
    ClipboardError, EngineEvent, FailureKind, SearchError, SearchHit, SearchOutcome,
    SettledSearch, Ticket,
};
