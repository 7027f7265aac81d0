use crate::render::build_rows;
use crate::view_model::{AppViewModel, ListStatus, PreviewView, RowView};
use crate::{Cursor, Point, Preview, RendererSettings, ResultList, Row, Ticket};

/// Session state for one search box. Lives as long as the page session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: RendererSettings,
    query: String,
    results: ResultList,
    rows: Vec<Row>,
    rendered_ticket: Option<Ticket>,
    preview: Option<Preview>,
    cursor: Cursor,
    feedback_generation: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RendererSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn view(&self) -> AppViewModel {
        let hovered = self.hovered_row();
        let status = match &self.results {
            ResultList::Cleared => ListStatus::Cleared,
            ResultList::NoMatches => ListStatus::NoMatches,
            ResultList::Entries(entries) => ListStatus::Matches(entries.len()),
            ResultList::Failed(_) => ListStatus::Failed,
        };
        AppViewModel {
            query: self.query.clone(),
            status,
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| RowView {
                    index,
                    text: row.text.clone(),
                    payload: row.payload.clone(),
                    kind: row.kind,
                    capabilities: row.capabilities,
                    hovered: hovered == Some(index),
                })
                .collect(),
            rendered_ticket: self.rendered_ticket,
            preview: self.preview.as_ref().map(|preview| PreviewView {
                text: preview.text.clone(),
                x: preview.position.x,
                y: preview.position.y,
            }),
            cursor: self.cursor,
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Swaps the whole result area in one step. Any overlay belonging to the
    /// old rows goes with them.
    pub(crate) fn replace_results(&mut self, ticket: Ticket, results: ResultList) {
        self.rows = build_rows(&results, &self.settings);
        self.results = results;
        self.rendered_ticket = Some(ticket);
        self.preview = None;
        if self.cursor == Cursor::Copy {
            self.cursor = Cursor::Default;
        }
        self.mark_dirty();
    }

    pub(crate) fn hovered_row(&self) -> Option<usize> {
        self.preview.as_ref().map(|preview| preview.row)
    }

    pub(crate) fn show_preview(&mut self, row: usize, text: String, pointer: Point) {
        self.preview = Some(Preview {
            row,
            text,
            position: pointer.offset_by(self.settings.preview_offset),
        });
        self.mark_dirty();
    }

    pub(crate) fn move_preview(&mut self, row: usize, pointer: Point) {
        let offset = self.settings.preview_offset;
        if let Some(preview) = self.preview.as_mut().filter(|p| p.row == row) {
            preview.position = pointer.offset_by(offset);
            self.dirty = true;
        }
    }

    pub(crate) fn hide_preview(&mut self, row: usize) -> bool {
        if self.hovered_row() == Some(row) {
            self.preview = None;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.mark_dirty();
        }
    }

    /// Starts a new copy-feedback period and returns its generation.
    pub(crate) fn begin_copy_feedback(&mut self) -> u64 {
        self.feedback_generation += 1;
        self.set_cursor(Cursor::Copied);
        self.feedback_generation
    }

    pub(crate) fn feedback_generation(&self) -> u64 {
        self.feedback_generation
    }
}
