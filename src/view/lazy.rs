//! Per-route lazy view slot.
//!
//! # Responsibilities
//! - Defer loading a view until the first navigation that needs it
//! - Share one in-flight load between concurrent callers
//! - Cache the loaded view for every later navigation
//! - Record failures and allow the next navigation to retry
//!
//! # Design Decisions
//! - State lives behind a short-lived std Mutex, never held across an await
//! - Waiters park on a Notify and re-check state when woken
//! - A dropped (cancelled) load resets the slot to NotLoaded

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::Notify;

use crate::observability::metrics;
use crate::view::loader::ViewLoader;
use crate::view::types::{LoadError, View, ViewState};

/// A view that is loaded on first use.
#[derive(Debug)]
pub struct LazyView {
    module: String,
    state: Mutex<ViewState>,
    notify: Notify,
}

impl LazyView {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            state: Mutex::new(ViewState::NotLoaded),
            notify: Notify::new(),
        }
    }

    /// Snapshot of the current load state.
    pub fn state(&self) -> ViewState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the loaded view, invoking the loader only if needed.
    ///
    /// Callers arriving while a load is in flight wait for it and receive its
    /// result. After a failure the next call starts a fresh load.
    pub async fn load(&self, loader: &dyn ViewLoader, timeout: Duration) -> Result<Arc<View>, LoadError> {
        let mut waited = false;
        loop {
            let notified = self.notify.notified();
            {
                let mut state = self.lock();
                let start_load = match &*state {
                    ViewState::Loaded(view) => return Ok(view.clone()),
                    ViewState::Failed(e) if waited => return Err(e.clone()),
                    ViewState::Loading => false,
                    ViewState::NotLoaded | ViewState::Failed(_) => true,
                };
                if start_load {
                    *state = ViewState::Loading;
                    break;
                }
            }
            notified.await;
            waited = true;
        }

        let guard = LoadingGuard { view: self, done: false };
        let started = Instant::now();
        tracing::debug!(module = %self.module, "Loading view");

        let result = match tokio::time::timeout(timeout, loader.load(&self.module)).await {
            Ok(result) => result.map(Arc::new),
            Err(_) => Err(LoadError::Timeout(timeout)),
        };

        metrics::record_view_load(&self.module, result.is_ok(), started);
        match &result {
            Ok(view) => {
                tracing::info!(
                    module = %self.module,
                    bytes = view.body.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "View loaded"
                );
                guard.finish(ViewState::Loaded(view.clone()));
            }
            Err(e) => {
                tracing::warn!(module = %self.module, error = %e, "View load failed");
                guard.finish(ViewState::Failed(e.clone()));
            }
        }
        result
    }
}

/// Publishes the outcome of a load, or resets the slot if the load is dropped.
struct LoadingGuard<'a> {
    view: &'a LazyView,
    done: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, state: ViewState) {
        *self.view.lock() = state;
        self.done = true;
        self.view.notify.notify_waiters();
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            *self.view.lock() = ViewState::NotLoaded;
            self.view.notify.notify_waiters();
        }
    }
}
