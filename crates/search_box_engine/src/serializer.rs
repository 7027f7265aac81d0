use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc, Mutex, PoisonError};

use futures_util::FutureExt;
use pipeline_logging::{pipeline_debug, pipeline_info, pipeline_warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{EngineEvent, FailureKind, SearchClient, SearchError, SettledSearch, Ticket};

/// Receives each settled search, one at a time, in ticket order.
pub trait RenderSink: Send + Sync {
    fn render(&self, settled: SettledSearch);
}

pub struct ChannelRenderSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelRenderSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl RenderSink for ChannelRenderSink {
    fn render(&self, settled: SettledSearch) {
        let _ = self.tx.send(EngineEvent::SearchSettled(settled));
    }
}

type QueryProvider = Box<dyn FnOnce() -> String + Send>;

struct PendingSearch {
    ticket: Ticket,
    query: QueryProvider,
}

struct Issuer {
    last_ticket: Ticket,
    tx: UnboundedSender<PendingSearch>,
}

/// FIFO queue of searches drained by a single worker task.
///
/// Entries run strictly one after another in the order they were enqueued;
/// an entry's query provider is only evaluated once its turn arrives. Every
/// entry settles (with a result or a contained error) before the next starts,
/// and no failure stops the worker. In-flight requests are never cancelled.
#[derive(Clone)]
pub struct RequestSerializer {
    issuer: Arc<Mutex<Issuer>>,
}

impl RequestSerializer {
    /// Spawns the worker on the current tokio runtime. The worker exits once
    /// every clone of the serializer has been dropped and the queue is drained.
    pub fn spawn(client: Arc<dyn SearchClient>, sink: Arc<dyn RenderSink>) -> Self {
        let (tx, rx) = unbounded_channel();
        tokio::spawn(run_worker(rx, client, sink));
        Self {
            issuer: Arc::new(Mutex::new(Issuer { last_ticket: 0, tx })),
        }
    }

    /// Appends a search to the chain and returns its ticket.
    pub fn enqueue<F>(&self, query: F) -> Ticket
    where
        F: FnOnce() -> String + Send + 'static,
    {
        // Ticket assignment and send happen under one lock so tickets reach
        // the worker in increasing order.
        let mut issuer = self.issuer.lock().unwrap_or_else(PoisonError::into_inner);
        issuer.last_ticket += 1;
        let ticket = issuer.last_ticket;
        if issuer
            .tx
            .send(PendingSearch {
                ticket,
                query: Box::new(query),
            })
            .is_err()
        {
            pipeline_warn!("search worker is gone; ticket {} dropped", ticket);
        } else {
            pipeline_debug!("enqueued search ticket {}", ticket);
        }
        ticket
    }
}

async fn run_worker(
    mut rx: UnboundedReceiver<PendingSearch>,
    client: Arc<dyn SearchClient>,
    sink: Arc<dyn RenderSink>,
) {
    while let Some(PendingSearch { ticket, query }) = rx.recv().await {
        let settled = run_step(ticket, query, client.as_ref()).await;
        match &settled.result {
            Ok(outcome) => pipeline_info!(
                "search ticket {} settled with {} hit(s)",
                ticket,
                outcome.hit_count()
            ),
            Err(err) => pipeline_warn!("search ticket {} failed: {}", ticket, err),
        }
        sink.render(settled);
    }
    pipeline_debug!("search worker stopped");
}

/// One link of the chain. Panics are caught here so the worker keeps going.
async fn run_step(ticket: Ticket, query: QueryProvider, client: &dyn SearchClient) -> SettledSearch {
    let query = match std::panic::catch_unwind(AssertUnwindSafe(query)) {
        Ok(query) => query,
        Err(_) => {
            return SettledSearch {
                ticket,
                query: String::new(),
                result: Err(SearchError::new(
                    FailureKind::Internal,
                    "query provider panicked",
                )),
            }
        }
    };

    let result = AssertUnwindSafe(client.search(&query))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            Err(SearchError::new(
                FailureKind::Internal,
                "search step panicked",
            ))
        });

    SettledSearch {
        ticket,
        query,
        result,
    }
}
