//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up a route by name or by path
//! - Build locations for named routes
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(1) name lookup via HashMap
//! - O(n) path scan in declaration order, first match wins
//! - Explicit NotFound rather than a silent default

use std::collections::HashMap;

use crate::config::{RouteConfig, ValidationError};
use crate::config::validation::validate_routes;
use crate::error::{RouterError, RouterResult};
use crate::routing::matcher::{BuildError, Params};
use crate::routing::route::{RouteEntry, RouteMatch};

/// The ordered, immutable set of routes of one application.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile route declarations, rejecting duplicate names or paths.
    pub fn new(routes: &[RouteConfig]) -> Result<Self, Vec<ValidationError>> {
        let patterns = validate_routes(routes)?;

        let entries: Vec<RouteEntry> = routes
            .iter()
            .zip(patterns)
            .map(|(config, pattern)| RouteEntry::compile(config, pattern))
            .collect();

        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.name.clone(), index))
            .collect();

        Ok(Self { entries, by_name })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a target: paths start with '/', anything else is a route name.
    pub fn resolve(&self, target: &str) -> RouterResult<RouteMatch<'_>> {
        if target.starts_with('/') {
            self.resolve_path(target)
        } else {
            self.resolve_name(target)
        }
    }

    /// Find the first route whose pattern matches the location.
    pub fn resolve_path(&self, location: &str) -> RouterResult<RouteMatch<'_>> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(index, entry)| {
                entry.path.matches(location).map(|params| RouteMatch {
                    index,
                    entry,
                    params,
                })
            })
            .ok_or_else(|| RouterError::NotFound(location.to_string()))
    }

    /// Find a route by name.
    pub fn resolve_name(&self, name: &str) -> RouterResult<RouteMatch<'_>> {
        self.by_name
            .get(name)
            .map(|&index| RouteMatch {
                index,
                entry: &self.entries[index],
                params: Params::new(),
            })
            .ok_or_else(|| RouterError::NotFound(name.to_string()))
    }

    /// Build the location of a named route.
    pub fn href(&self, name: &str, params: &Params) -> RouterResult<String> {
        let route = self.resolve_name(name)?;
        route
            .entry
            .path
            .build(params)
            .map_err(|e| match e {
                BuildError::Missing(param) => RouterError::MissingParam {
                    route: name.to_string(),
                    param,
                },
                BuildError::Invalid { param, value } => RouterError::InvalidParam {
                    route: name.to_string(),
                    param,
                    value,
                },
            })
    }
}
