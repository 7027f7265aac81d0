use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pipeline_logging::pipeline_debug;

use crate::{Debouncer, RenderSink, RequestSerializer, SearchClient};

/// Shared textbox content. Readers always see the latest write.
#[derive(Debug, Clone, Default)]
pub struct QueryCell {
    inner: Arc<Mutex<String>>,
}

impl QueryCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, query: impl Into<String>) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = query.into();
    }

    pub fn get(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Owns the pipeline state for one session: the current query, the pending
/// debounce timer and the request chain.
pub struct SearchSession {
    query: QueryCell,
    debouncer: Debouncer,
    serializer: RequestSerializer,
}

impl SearchSession {
    /// Must be called from within a tokio runtime.
    pub fn new(
        debounce_quiet: Duration,
        client: Arc<dyn SearchClient>,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            query: QueryCell::new(),
            debouncer: Debouncer::new(debounce_quiet),
            serializer: RequestSerializer::spawn(client, sink),
        }
    }

    /// Records the new textbox content and re-arms the debounce timer. When
    /// the timer fires, a search is appended to the chain; the query it runs
    /// with is read when that search's turn comes, not now.
    pub fn input_changed(&mut self, text: impl Into<String>) {
        self.query.set(text);

        let serializer = self.serializer.clone();
        let query = self.query.clone();
        self.debouncer.schedule(move || {
            let ticket = serializer.enqueue(move || query.get());
            pipeline_debug!("debounce elapsed, search ticket {} issued", ticket);
        });
    }

    pub fn current_query(&self) -> String {
        self.query.get()
    }

    pub fn has_pending_trigger(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancels a pending trigger. Searches already in the chain still settle.
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
    }
}
