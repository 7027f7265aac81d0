#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use search_box_engine::{
    FailureKind, RenderSink, SearchClient, SearchError, SearchHit, SearchOutcome, SettledSearch,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pipeline_logging::initialize_for_tests);
}

/// Answers every query with one hit named after it, after a per-query delay.
/// Queries listed in `failing` error out, queries in `panicking` panic.
#[derive(Default)]
pub struct ScriptedClient {
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    panicking: Vec<String>,
    journal: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn failing(mut self, query: &str) -> Self {
        self.failing.push(query.to_string());
        self
    }

    pub fn panicking(mut self, query: &str) -> Self {
        self.panicking.push(query.to_string());
        self
    }

    /// Shared log of `start <query>` / `end <query>` lines.
    pub fn journal(&self) -> Arc<Mutex<Vec<String>>> {
        self.journal.clone()
    }
}

#[async_trait::async_trait]
impl SearchClient for ScriptedClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        self.journal.lock().unwrap().push(format!("start {query}"));
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.panicking.iter().any(|q| q == query) {
            panic!("scripted panic for {query}");
        }
        self.journal.lock().unwrap().push(format!("end {query}"));

        if self.failing.iter().any(|q| q == query) {
            return Err(SearchError {
                kind: FailureKind::Network,
                message: format!("scripted failure for {query}"),
            });
        }
        Ok(SearchOutcome::Matches(vec![SearchHit {
            full_identifier: format!("/docs/{query}.txt"),
            label: format!("{query}.txt"),
        }]))
    }
}

#[derive(Default, Clone)]
pub struct RecordingSink {
    settled: Arc<Mutex<Vec<SettledSearch>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settled(&self) -> Vec<SettledSearch> {
        self.settled.lock().unwrap().clone()
    }

    pub fn rendered(&self) -> Vec<(u64, String)> {
        self.settled()
            .into_iter()
            .map(|settled| (settled.ticket, settled.query))
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn render(&self, settled: SettledSearch) {
        self.settled.lock().unwrap().push(settled);
    }
}
