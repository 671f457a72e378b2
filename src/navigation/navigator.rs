//! The router object applications navigate with.
//!
//! # Responsibilities
//! - Resolve targets against the route table
//! - Load the target view (lazily, may suspend)
//! - Commit the location to history once the view is ready
//! - Announce completed navigations
//!
//! # Design Decisions
//! - Constructed explicitly and shared via Arc; no global instance
//! - One navigation at a time: the history lock is held for the whole
//!   navigation, so navigations apply in the order they were issued
//! - History only changes after a successful load

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch, Mutex};

use crate::error::{RouterError, RouterResult};
use crate::history::History;
use crate::observability::metrics;
use crate::routing::{Params, RouteMatch, RouteTable};
use crate::view::{LazyView, View, ViewLoader, ViewState};

/// Default upper bound on a single view load.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

const EVENT_CAPACITY: usize = 64;

/// A completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Name of the activated route.
    pub route: String,
    /// App-relative location now current in history.
    pub location: String,
    pub params: Params,
    pub view: Arc<View>,
}

enum HistoryOp {
    Push,
    Replace,
    Go(isize),
}

/// Navigates between the views of one route table.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    /// One slot per table entry, same order.
    views: Vec<LazyView>,
    loader: Arc<dyn ViewLoader>,
    load_timeout: Duration,
    history: Mutex<Box<dyn History>>,
    current: watch::Sender<Option<Navigation>>,
    events: broadcast::Sender<Navigation>,
}

impl Navigator {
    /// Create a navigator. No view is loaded until it is navigated to.
    pub fn new(table: Arc<RouteTable>, history: Box<dyn History>, loader: Arc<dyn ViewLoader>) -> Self {
        let views = table
            .entries()
            .iter()
            .map(|entry| LazyView::new(entry.view.clone()))
            .collect();
        let (current, _) = watch::channel(None);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            table,
            views,
            loader,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            history: Mutex::new(history),
            current,
            events,
        }
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Look up a path or route name. No side effects.
    pub fn resolve(&self, target: &str) -> RouterResult<RouteMatch<'_>> {
        self.table.resolve(target)
    }

    /// Resolve a target and load its view without touching history.
    pub async fn load(&self, target: &str) -> RouterResult<Arc<View>> {
        let route = self.table.resolve(target)?;
        self.load_view(&route).await
    }

    /// Navigate to a named route.
    pub async fn navigate(&self, name: &str, params: Params) -> RouterResult<Navigation> {
        let mut history = self.history.lock().await;
        let location = self.table.href(name, &params).inspect_err(|e| {
            metrics::record_navigation(name, failure_outcome(e));
        })?;
        let route = self.table.resolve_name(name)?;
        // Keep only what the location carries, as a later history move would see it.
        let params = route.entry.path.matches(&location).unwrap_or_default();
        let route = RouteMatch { params, ..route };
        self.commit(&mut **history, route, location, HistoryOp::Push).await
    }

    /// Navigate to an app-relative location, pushing a history entry.
    pub async fn push(&self, location: &str) -> RouterResult<Navigation> {
        let mut history = self.history.lock().await;
        let route = self.match_location(location)?;
        self.commit(&mut **history, route, location.to_string(), HistoryOp::Push).await
    }

    /// Navigate to an app-relative location, replacing the current entry.
    pub async fn replace(&self, location: &str) -> RouterResult<Navigation> {
        let mut history = self.history.lock().await;
        let route = self.match_location(location)?;
        self.commit(&mut **history, route, location.to_string(), HistoryOp::Replace).await
    }

    /// Move `delta` entries through history and activate that entry's view.
    ///
    /// Returns `Ok(None)` without changes when the move is out of range.
    pub async fn go(&self, delta: isize) -> RouterResult<Option<Navigation>> {
        let mut history = self.history.lock().await;
        let Some(location) = history.peek(delta).map(str::to_string) else {
            tracing::debug!(delta, "History move out of range");
            return Ok(None);
        };
        let route = self.match_location(&location)?;
        self.commit(&mut **history, route, location, HistoryOp::Go(delta))
            .await
            .map(Some)
    }

    pub async fn back(&self) -> RouterResult<Option<Navigation>> {
        self.go(-1).await
    }

    pub async fn forward(&self) -> RouterResult<Option<Navigation>> {
        self.go(1).await
    }

    /// The active navigation, if any.
    pub fn current(&self) -> Option<Navigation> {
        self.current.borrow().clone()
    }

    /// Receive every completed navigation, in order.
    pub fn subscribe(&self) -> broadcast::Receiver<Navigation> {
        self.events.subscribe()
    }

    /// Snapshot of the history stack and the current full URL.
    pub async fn history(&self) -> (Vec<String>, Option<String>) {
        let history = self.history.lock().await;
        (history.entries(), history.url())
    }

    /// Load state of a route's view.
    pub fn view_state(&self, name: &str) -> Option<ViewState> {
        self.table
            .resolve_name(name)
            .ok()
            .map(|route| self.views[route.index].state())
    }

    fn match_location(&self, location: &str) -> RouterResult<RouteMatch<'_>> {
        self.table.resolve_path(location).inspect_err(|_| {
            tracing::warn!(location = %location, "No route matched");
            metrics::record_navigation("none", "not_found");
        })
    }

    async fn load_view(&self, route: &RouteMatch<'_>) -> RouterResult<Arc<View>> {
        self.views[route.index]
            .load(self.loader.as_ref(), self.load_timeout)
            .await
            .map_err(|source| RouterError::Load {
                route: route.entry.name.clone(),
                source,
            })
    }

    async fn commit(
        &self,
        history: &mut dyn History,
        route: RouteMatch<'_>,
        location: String,
        op: HistoryOp,
    ) -> RouterResult<Navigation> {
        let view = match self.load_view(&route).await {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(route = %route.name(), location = %location, error = %e, "Navigation aborted");
                metrics::record_navigation(route.name(), failure_outcome(&e));
                return Err(e);
            }
        };

        match op {
            HistoryOp::Push => history.push(location.clone()),
            HistoryOp::Replace => history.replace(location.clone()),
            HistoryOp::Go(delta) => {
                history.go(delta);
            }
        }

        let navigation = Navigation {
            route: route.name().to_string(),
            location,
            params: route.params,
            view,
        };

        tracing::info!(
            route = %navigation.route,
            location = %navigation.location,
            history_len = history.len(),
            "Navigation complete"
        );
        metrics::record_navigation(&navigation.route, "ok");

        self.current.send_replace(Some(navigation.clone()));
        let _ = self.events.send(navigation.clone());
        Ok(navigation)
    }
}

/// Metrics label for a failed navigation.
fn failure_outcome(err: &RouterError) -> &'static str {
    match err {
        RouterError::NotFound(_) => "not_found",
        RouterError::MissingParam { .. } => "missing_param",
        RouterError::InvalidParam { .. } => "invalid_param",
        RouterError::Load { .. } => "load_error",
    }
}
