use std::fmt;

/// Issue order of a search trigger; the first trigger of a session is 1.
pub type Ticket = u64;

/// One row of the endpoint's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub full_identifier: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query: nothing was sent and the result area should be emptied.
    Cleared,
    /// The endpoint answered `[]`.
    NoMatches,
    Matches(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn hit_count(&self) -> usize {
        match self {
            SearchOutcome::Matches(hits) => hits.len(),
            SearchOutcome::Cleared | SearchOutcome::NoMatches => 0,
        }
    }
}

/// A serializer step that reached its turn and finished, successfully or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledSearch {
    pub ticket: Ticket,
    pub query: String,
    pub result: Result<SearchOutcome, SearchError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchSettled(SettledSearch),
    CopyFinished { result: Result<(), ClipboardError> },
    CursorResetDue { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
    /// The step itself panicked; the chain carries on regardless.
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Internal => write!(f, "internal error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}
