//! The deferred module loading seam.

use async_trait::async_trait;

use crate::view::types::{LoadError, View};

/// Resolves a view module identifier into a loaded view.
///
/// Implementations may suspend (disk or network) and are called at most once
/// per successful load of a route; caching is handled by [`LazyView`].
///
/// [`LazyView`]: crate::view::LazyView
#[async_trait]
pub trait ViewLoader: Send + Sync + std::fmt::Debug {
    async fn load(&self, module: &str) -> Result<View, LoadError>;
}
