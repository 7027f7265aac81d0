use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:6969";
/// Quiet period after the last keystroke before a search is triggered.
pub const DEFAULT_DEBOUNCE_QUIET: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub base_url: String,
    pub search_path: String,
    /// `None` leaves the connection phase unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` (the default) means a hung request stalls the chain until it
    /// settles.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: "/api/search".to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub search: SearchSettings,
    pub debounce_quiet: Duration,
}

impl EngineConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            search: SearchSettings {
                base_url: base_url.into(),
                ..SearchSettings::default()
            },
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchSettings::default(),
            debounce_quiet: DEFAULT_DEBOUNCE_QUIET,
        }
    }
}
