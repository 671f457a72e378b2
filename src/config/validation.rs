//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate route names and duplicate paths
//! - Check every path parses as a pattern
//! - Validate loader settings (timeouts > 0, base URL parses)
//! - Validate listener settings (request timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use thiserror::Error;
use url::Url;

use crate::config::schema::{ListenerConfig, LoaderConfig, LoaderKind, RouteConfig, RouterConfig};
use crate::routing::matcher::{PathPattern, PatternError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route `{0}` has no view module")]
    EmptyView(String),

    #[error("route name `{0}` must not start with '/'")]
    InvalidName(String),

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("route `{route}` reuses path `{path}` of route `{existing}`")]
    DuplicatePath {
        route: String,
        path: String,
        existing: String,
    },

    #[error("route `{route}` has invalid path `{path}`: {reason}")]
    InvalidPath {
        route: String,
        path: String,
        reason: PatternError,
    },

    #[error("base path `{0}` must start with '/'")]
    InvalidBase(String),

    #[error("invalid loader configuration: {0}")]
    InvalidLoader(String),

    #[error("invalid listener configuration: {0}")]
    InvalidListener(String),
}

/// Validate route declarations and compile their paths.
///
/// Patterns are returned in declaration order when every route is valid.
pub fn validate_routes(routes: &[RouteConfig]) -> Result<Vec<PathPattern>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut patterns = Vec::with_capacity(routes.len());
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut shapes: HashMap<String, &str> = HashMap::new();

    for (index, route) in routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if route.name.starts_with('/') {
            errors.push(ValidationError::InvalidName(route.name.clone()));
        } else if names.insert(route.name.as_str(), index).is_some() {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView(route.name.clone()));
        }

        match PathPattern::parse(&route.path) {
            Ok(pattern) => {
                match shapes.get(&pattern.shape()) {
                    Some(existing) => errors.push(ValidationError::DuplicatePath {
                        route: route.name.clone(),
                        path: route.path.clone(),
                        existing: existing.to_string(),
                    }),
                    None => {
                        shapes.insert(pattern.shape(), route.name.as_str());
                    }
                }
                patterns.push(pattern);
            }
            Err(reason) => errors.push(ValidationError::InvalidPath {
                route: route.name.clone(),
                path: route.path.clone(),
                reason,
            }),
        }
    }

    if errors.is_empty() {
        Ok(patterns)
    } else {
        Err(errors)
    }
}

fn validate_loader(loader: &LoaderConfig, errors: &mut Vec<ValidationError>) {
    if loader.timeout_secs == 0 {
        errors.push(ValidationError::InvalidLoader(
            "timeout_secs must be greater than 0".to_string(),
        ));
    }

    match loader.kind {
        LoaderKind::Fs if loader.root.trim().is_empty() => {
            errors.push(ValidationError::InvalidLoader("fs loader needs a root directory".to_string()));
        }
        LoaderKind::Http => {
            if let Err(e) = Url::parse(&loader.base_url) {
                errors.push(ValidationError::InvalidLoader(format!(
                    "base_url `{}`: {}",
                    loader.base_url, e
                )));
            }
        }
        _ => {}
    }
}

fn validate_listener(listener: &ListenerConfig, errors: &mut Vec<ValidationError>) {
    if listener.request_timeout_secs == 0 {
        errors.push(ValidationError::InvalidListener(
            "request_timeout_secs must be greater than 0".to_string(),
        ));
    }
}

/// Validate a complete configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = match validate_routes(&config.routes) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    };

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.base_path.clone()));
    }

    validate_loader(&config.loader, &mut errors);
    validate_listener(&config.listener, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
