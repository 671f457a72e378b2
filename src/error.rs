//! Error types surfaced by the router.

use thiserror::Error;

use crate::view::LoadError;

/// Errors returned by route resolution and navigation.
#[derive(Debug, Clone, Error)]
pub enum RouterError {
    /// No route matches the requested path or name.
    #[error("no route matches `{0}`")]
    NotFound(String),

    /// The route pattern needs a parameter the caller did not supply.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    /// A parameter value cannot be placed in a single path segment.
    #[error("route `{route}` parameter `{param}` has invalid value `{value}`")]
    InvalidParam { route: String, param: String, value: String },

    /// The lazy view for a matched route failed to load.
    #[error("failed to load view for route `{route}`: {source}")]
    Load {
        route: String,
        #[source]
        source: LoadError,
    },
}

pub type RouterResult<T> = Result<T, RouterError>;
