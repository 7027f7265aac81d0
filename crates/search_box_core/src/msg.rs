use crate::{PointerEvent, ResultList, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search textbox (raw, not yet debounced).
    InputChanged(String),
    /// A serialized search reached its turn and settled.
    SearchSettled { ticket: Ticket, results: ResultList },
    /// Pointer activity over a rendered row.
    Pointer { row: usize, event: PointerEvent },
    /// Outcome of a clipboard write requested by `Effect::CopyToClipboard`.
    CopyFinished { succeeded: bool },
    /// The copy feedback delay for `generation` elapsed.
    CursorResetDue { generation: u64 },
}
