//! View values, load state and load errors.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// A loaded view module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Module identifier the view was loaded from.
    pub module: String,
    /// MIME type of `body`.
    pub content_type: String,
    pub body: Vec<u8>,
}

impl View {
    pub fn new(module: impl Into<String>, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            module: module.into(),
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}

/// Errors that can occur while loading a view module.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The module does not exist at its source.
    #[error("view module `{0}` not found")]
    Missing(String),

    /// The module identifier cannot be turned into a source location.
    #[error("invalid view module `{0}`")]
    InvalidModule(String),

    /// Reading the module failed.
    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// Fetching the module over HTTP failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The load did not finish in time.
    #[error("view load timed out after {0:?}")]
    Timeout(Duration),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(Arc::new(e))
    }
}

/// Load state of a single route's view.
#[derive(Debug, Clone)]
pub enum ViewState {
    NotLoaded,
    Loading,
    Loaded(Arc<View>),
    Failed(LoadError),
}

impl ViewState {
    /// Short label for logs and the routes listing.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::NotLoaded => "not_loaded",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }
}

/// Guess a MIME type from a module's file extension.
pub fn content_type_for(module: &str) -> &'static str {
    let ext = module
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json",
        "wasm" => "application/wasm",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
