//! HTTP dev server for the route table.
//!
//! # Responsibilities
//! - Serve every route of the table at `<base>/<path>` (history mode)
//! - Load the matched view lazily and return its content
//! - List the table at `/__routes`
//! - Wire up middleware (tracing, timeout, request ID)
//!
//! # Status codes
//! - 200: view content
//! - 404: no route matches, or the path lies outside the base
//! - 405: anything but GET/HEAD
//! - 502: the view failed to load

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::lifecycle::shutdown;
use crate::navigation::Navigator;
use crate::observability::metrics;
use crate::routing::matcher::{normalize_base, strip_base};

/// Path of the route listing endpoint.
pub const ROUTES_PATH: &str = "/__routes";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<Navigator>,
    /// Normalised base path.
    pub base_path: String,
}

/// One row of the route listing.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: String,
    pub state: &'static str,
}

/// HTTP server serving the views of a navigator.
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
}

impl HttpServer {
    pub fn new(config: RouterConfig, navigator: Arc<Navigator>) -> Self {
        let state = AppState {
            navigator,
            base_path: normalize_base(&config.base_path),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route(ROUTES_PATH, get(routes_handler))
            .fallback(view_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.listener.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run until a shutdown is broadcast.
    pub async fn run(self, listener: TcpListener, shutdown_rx: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for in-process testing.
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn routes_handler(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let navigator = &state.navigator;
    let routes = navigator
        .table()
        .entries()
        .iter()
        .map(|entry| RouteSummary {
            name: entry.name.clone(),
            path: entry.path.as_str().to_string(),
            view: entry.view.clone(),
            state: navigator
                .view_state(&entry.name)
                .map(|s| s.label())
                .unwrap_or("unknown"),
        })
        .collect();
    Json(routes)
}

/// Resolve the request path and respond with the route's view.
async fn view_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let start = Instant::now();
    let response = render_view(&state, &method, &uri).await;
    metrics::record_http_request(response.status().as_u16(), start);
    response
}

async fn render_view(state: &AppState, method: &Method, uri: &Uri) -> Response {
    if *method != Method::GET && *method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, "Only GET and HEAD are supported").into_response();
    }

    let Some(location) = strip_base(&state.base_path, uri.path()) else {
        tracing::debug!(path = %uri.path(), base = %state.base_path, "Path outside base");
        return (StatusCode::NOT_FOUND, "No matching route found").into_response();
    };

    let route = match state.navigator.resolve(location) {
        Ok(route) => route.name().to_string(),
        Err(_) => {
            tracing::warn!(path = %uri.path(), "No route matched");
            return (StatusCode::NOT_FOUND, "No matching route found").into_response();
        }
    };

    match state.navigator.load(&route).await {
        Ok(view) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, view.content_type.clone())],
            view.body.clone(),
        )
            .into_response(),
        Err(RouterError::NotFound(_)) => (StatusCode::NOT_FOUND, "No matching route found").into_response(),
        Err(e) => {
            tracing::error!(path = %uri.path(), route = %route, error = %e, "View load failed");
            (StatusCode::BAD_GATEWAY, "Failed to load view").into_response()
        }
    }
}
