//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the route table from validated configuration
//! - Build the configured view loader
//! - Create the history and the navigator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order: table, loader, history, navigator
//! - Nothing is loaded here; views load on first navigation

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, LoaderConfig, LoaderKind, RouterConfig, ValidationError};
use crate::history::MemoryHistory;
use crate::navigation::Navigator;
use crate::routing::RouteTable;
use crate::view::{FsViewLoader, HttpViewLoader, ViewLoader};

/// Build the view loader described by the configuration.
pub fn build_loader(config: &LoaderConfig) -> Result<Arc<dyn ViewLoader>, ConfigError> {
    let loader: Arc<dyn ViewLoader> = match config.kind {
        LoaderKind::Fs => Arc::new(FsViewLoader::new(&config.root)),
        LoaderKind::Http => {
            let loader = HttpViewLoader::new(&config.base_url).map_err(|e| {
                ConfigError::Validation(vec![ValidationError::InvalidLoader(format!(
                    "base_url `{}`: {}",
                    config.base_url, e
                ))])
            })?;
            Arc::new(loader)
        }
    };
    Ok(loader)
}

/// Build a navigator from configuration.
pub fn build_navigator(config: &RouterConfig) -> Result<Navigator, ConfigError> {
    let table = RouteTable::new(&config.routes)?;
    let loader = build_loader(&config.loader)?;
    let history = MemoryHistory::new(&config.base_path);

    tracing::info!(
        routes = table.len(),
        base_path = %config.base_path,
        loader = ?config.loader.kind,
        "Route table compiled"
    );

    Ok(Navigator::new(Arc::new(table), Box::new(history), loader)
        .with_load_timeout(Duration::from_secs(config.loader.timeout_secs)))
}
