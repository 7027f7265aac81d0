use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Coalesces bursts of input into one trigger after a quiet period.
///
/// Only the most recent [`Debouncer::schedule`] survives: each call cancels
/// the pending timer before arming a new one. Dropping the debouncer cancels
/// whatever is still pending, so a torn-down session never receives a late
/// trigger.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Arms the timer. `on_fire` runs at most once, after `quiet` has elapsed
    /// without another call to `schedule` or `cancel`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let timer = token.clone();
        let quiet = self.quiet;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = timer.cancelled() => {}
                _ = tokio::time::sleep(quiet) => {
                    // Marks the timer spent so `is_pending` reports false.
                    timer.cancel();
                    on_fire();
                }
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
