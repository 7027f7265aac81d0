//! Terminal host for the search box: wires stdin, the engine and stdout
//! around the pure core.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;

use search_box_core::Msg;

/// Everything the dispatch loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Core(Msg),
    Quit,
}
