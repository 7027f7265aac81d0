//! Result renderer: turns a settled search into rows and decides what each
//! row does under the pointer.

use crate::RendererSettings;

/// Issue order of a search trigger; strictly increasing per session.
/// Mirrors `search_box_engine::Ticket`.
pub type Ticket = u64;

/// One search hit: the full identifier is the copy/preview payload, the
/// label is what the list shows. Core-side mirror of the engine's `SearchHit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub full_identifier: String,
    pub label: String,
}

impl ResultEntry {
    pub fn new(full_identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            full_identifier: full_identifier.into(),
            label: label.into(),
        }
    }
}

/// Everything a settled search can leave in the result area. Mirrors the
/// engine's `SearchOutcome`, with failures folded in as `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultList {
    /// Nothing searched yet, or the query was blank.
    #[default]
    Cleared,
    /// The endpoint answered with zero entries.
    NoMatches,
    Entries(Vec<ResultEntry>),
    /// The request or its decoding failed.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub previewable: bool,
    pub copyable: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        previewable: false,
        copyable: false,
    };
    pub const ENTRY: Self = Self {
        previewable: true,
        copyable: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Entry,
    Placeholder,
    Error,
}

/// A rendered list item. `payload` is hidden from the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub payload: Option<String>,
    pub kind: RowKind,
    pub capabilities: Capabilities,
}

impl Row {
    fn entry(entry: &ResultEntry) -> Self {
        Self {
            text: entry.label.clone(),
            payload: Some(entry.full_identifier.clone()),
            kind: RowKind::Entry,
            capabilities: Capabilities::ENTRY,
        }
    }

    fn inert(text: String, kind: RowKind) -> Self {
        Self {
            text,
            payload: None,
            kind,
            capabilities: Capabilities::NONE,
        }
    }
}

/// Viewport coordinates of the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Uniform pointer interface shared by every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(Point),
    Move(Point),
    Leave,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Pointer is over a copyable row.
    Copy,
    /// Transient feedback after a successful copy.
    Copied,
}

/// Floating overlay showing the full identifier of the hovered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub row: usize,
    pub text: String,
    pub position: Point,
}

/// Builds the complete row set for a result list. The caller swaps it in
/// wholesale; rows are never patched in place.
pub(crate) fn build_rows(results: &ResultList, settings: &RendererSettings) -> Vec<Row> {
    match results {
        ResultList::Cleared => Vec::new(),
        ResultList::NoMatches => vec![Row::inert(
            settings.no_matches_text.clone(),
            RowKind::Placeholder,
        )],
        ResultList::Entries(entries) => entries.iter().map(Row::entry).collect(),
        ResultList::Failed(message) => vec![Row::inert(
            format!("Search failed: {message}"),
            RowKind::Error,
        )],
    }
}
