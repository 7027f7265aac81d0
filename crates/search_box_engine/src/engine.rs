use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use pipeline_logging::{pipeline_info, pipeline_warn};

use crate::{
    ArboardClipboard, ChannelRenderSink, ClipboardWriter, EngineConfig, EngineEvent,
    ReqwestSearchClient, SearchClient, SearchError, SearchSession,
};

/// How long shutdown waits for in-flight work before abandoning it.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("invalid search client settings: {0}")]
    Client(#[from] SearchError),
}

enum EngineCommand {
    InputChanged(String),
    CopyToClipboard { text: String },
    ScheduleCursorReset { generation: u64, after: Duration },
    Shutdown,
}

/// Runs the search pipeline on a background thread with its own tokio
/// runtime. Commands go in through the handle, which can be cloned freely;
/// results come back on the single [`EngineEvents`] receiver.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of the engine, in the order events happened. Owned by
/// exactly one consumer.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<(Self, EngineEvents), EngineError> {
        let client = ReqwestSearchClient::new(config.search)?;
        pipeline_info!("search endpoint {}", client.endpoint());
        Self::with_parts(config.debounce_quiet, Arc::new(client), Arc::new(ArboardClipboard))
    }

    /// Builds an engine around caller-provided collaborators.
    pub fn with_parts(
        debounce_quiet: Duration,
        client: Arc<dyn SearchClient>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let context = runtime.enter();
            let sink = Arc::new(ChannelRenderSink::new(event_tx.clone()));
            let mut session = SearchSession::new(debounce_quiet, client, sink);

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::InputChanged(text) => session.input_changed(text),
                    EngineCommand::CopyToClipboard { text } => {
                        let clipboard = clipboard.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn_blocking(move || {
                            let result = clipboard.write_text(&text);
                            if let Err(err) = &result {
                                pipeline_warn!("copy to clipboard failed: {}", err);
                            }
                            let _ = event_tx.send(EngineEvent::CopyFinished { result });
                        });
                    }
                    EngineCommand::ScheduleCursorReset { generation, after } => {
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            tokio::time::sleep(after).await;
                            let _ = event_tx.send(EngineEvent::CursorResetDue { generation });
                        });
                    }
                    EngineCommand::Shutdown => break,
                }
            }

            session.shutdown();
            drop(session);
            drop(context);
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
            pipeline_info!("engine stopped");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn input_changed(&self, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::InputChanged(text.into()));
    }

    pub fn copy_to_clipboard(&self, text: impl Into<String>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::CopyToClipboard { text: text.into() });
    }

    pub fn schedule_cursor_reset(&self, generation: u64, after: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleCursorReset { generation, after });
    }

    /// Cancels any pending trigger and stops the background thread.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until an event arrives or the engine has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
