//! Debounced search input

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub const POPULAR_DELAY: Duration = Duration::from_millis(250);
pub const SEARCH_DELAY: Duration = Duration::from_millis(400);

/// What the grid should show once typing pauses
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    Popular,
    Search(String),
}

impl SearchAction {
    /// Map raw input to an action and its quiet period
    pub fn for_input(raw: &str) -> (Self, Duration) {
        let query = raw.trim();
        if query.is_empty() {
            (SearchAction::Popular, POPULAR_DELAY)
        } else {
            (SearchAction::Search(query.to_string()), SEARCH_DELAY)
        }
    }
}

/// Holds at most one deferred task. Scheduling aborts whatever was held.
#[derive(Clone, Default)]
pub struct Debouncer {
    slot: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    pub async fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let mut slot = self.slot.lock().await;
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        *slot = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            task.await;
        }));
    }

    pub async fn cancel(&self) {
        if let Some(pending) = self.slot.lock().await.take() {
            pending.abort();
        }
    }
}

/// Turns keystrokes into debounced [`SearchAction`]s delivered over a channel
#[derive(Clone)]
pub struct SearchCoordinator {
    debouncer: Debouncer,
    actions: mpsc::UnboundedSender<SearchAction>,
}

impl SearchCoordinator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SearchAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let coordinator = Self {
            debouncer: Debouncer::default(),
            actions: tx,
        };
        (coordinator, rx)
    }

    /// Handle one input event carrying the full current text
    pub async fn on_input(&self, raw: &str) {
        let (action, delay) = SearchAction::for_input(raw);
        tracing::trace!(?action, delay_ms = delay.as_millis() as u64, "Scheduling search action");

        let actions = self.actions.clone();
        self.debouncer
            .schedule(delay, async move {
                if actions.send(action).is_err() {
                    tracing::debug!("Search action dropped, receiver closed");
                }
            })
            .await;
    }

    /// Drop any pending action without firing it
    pub async fn cancel(&self) {
        self.debouncer.cancel().await;
    }
}
