use crate::{Capabilities, Cursor, RowKind, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Cleared,
    NoMatches,
    Matches(usize),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub status: ListStatus,
    pub rows: Vec<RowView>,
    pub rendered_ticket: Option<Ticket>,
    pub preview: Option<PreviewView>,
    pub cursor: Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub text: String,
    pub payload: Option<String>,
    pub kind: RowKind,
    pub capabilities: Capabilities,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub text: String,
    pub x: i32,
    pub y: i32,
}
