//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the view router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path the application is mounted under (e.g., "/app/").
    pub base_path: String,

    /// Route definitions mapping paths and names to views.
    pub routes: Vec<RouteConfig>,

    /// View loader settings.
    pub loader: LoaderConfig,

    /// Dev server listener configuration.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            routes: Vec::new(),
            loader: LoaderConfig::default(),
            listener: ListenerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route name used for programmatic navigation.
    pub name: String,

    /// Path pattern. `:segment` declares a parameter.
    pub path: String,

    /// Module identifier handed to the view loader.
    pub view: String,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            view: view.into(),
        }
    }
}

/// Which loader resolves view modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// Read modules from a local directory.
    Fs,
    /// Fetch modules relative to a base URL.
    Http,
}

/// View loader configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub kind: LoaderKind,

    /// Directory holding view modules (fs loader).
    pub root: String,

    /// URL prefix for view modules (http loader).
    pub base_url: String,

    /// Upper bound on a single view load in seconds.
    pub timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            kind: LoaderKind::Fs,
            root: "views".to_string(),
            base_url: "http://127.0.0.1:8080/views/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Dev server listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5173").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5173".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
