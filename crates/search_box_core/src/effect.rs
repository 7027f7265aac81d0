use std::time::Duration;

/// Side effects requested by [`crate::update`]; executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The textbox content changed; the host feeds it to the debouncer.
    QueryChanged { query: String },
    /// Write the full identifier of a clicked row to the system clipboard.
    CopyToClipboard { text: String },
    /// Deliver `Msg::CursorResetDue { generation }` after `after`.
    ScheduleCursorReset { generation: u64, after: Duration },
}
