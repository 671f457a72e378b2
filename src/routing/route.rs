//! Route entries and match results.

use crate::config::RouteConfig;
use crate::routing::matcher::{Params, PathPattern};

/// A compiled route: name, path pattern and the view module it defers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: String,
    pub path: PathPattern,
    /// Module identifier resolved by the view loader on first navigation.
    pub view: String,
}

impl RouteEntry {
    pub(crate) fn compile(config: &RouteConfig, path: PathPattern) -> Self {
        Self {
            name: config.name.clone(),
            path,
            view: config.view.clone(),
        }
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Position of the entry in the table.
    pub index: usize,
    pub entry: &'a RouteEntry,
    /// Parameters captured from the path (empty for name lookups).
    pub params: Params,
}

impl RouteMatch<'_> {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}
