//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse route paths into static and `:param` segments
//! - Match request paths segment-wise and capture parameters
//! - Build locations from a pattern and a parameter set
//! - Normalise and strip the application base path
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - Query string and fragment never take part in matching
//! - Empty segments are ignored, so `/home/` and `//home` match `/home`
//! - No regex: a match is a single linear pass over the segments

use std::collections::BTreeMap;
use thiserror::Error;

/// Parameters captured from (or substituted into) a path.
pub type Params = BTreeMap<String, String>;

/// Why a path pattern was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("path must start with '/'")]
    MissingLeadingSlash,

    #[error("path contains an empty segment")]
    EmptySegment,

    #[error("parameter segment has no name")]
    EmptyParam,

    #[error("parameter `{0}` is declared twice")]
    DuplicateParam(String),

    #[error("path contains reserved character '{0}'")]
    ReservedChar(char),
}

/// Why a location could not be built from a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("parameter `{0}` is missing")]
    Missing(String),

    /// The value would not come back as a single segment when matched.
    #[error("parameter `{param}` has value `{value}` that does not fit one path segment")]
    Invalid { param: String, value: String },
}

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/user/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a route path.
    ///
    /// A single trailing slash is tolerated; any other empty segment is an error.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash);
        }
        if let Some(c) = raw.chars().find(|c| matches!(c, '?' | '#' | '*')) {
            return Err(PatternError::ReservedChar(c));
        }

        let body = &raw[1..];
        let body = body.strip_suffix('/').unwrap_or(body);

        let mut segments = Vec::new();
        if !body.is_empty() {
            for part in body.split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment);
                }
                match part.strip_prefix(':') {
                    Some("") => return Err(PatternError::EmptyParam),
                    Some(name) => {
                        if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
                            return Err(PatternError::DuplicateParam(name.to_string()));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Static(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The path as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Canonical form with parameter names erased.
    ///
    /// `/user/:id` and `/user/:name` share the shape `/user/:`.
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(text) => format!("/{}", text),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }

    /// Match a location against this pattern, returning captured parameters.
    pub fn matches(&self, location: &str) -> Option<Params> {
        let parts = split_location(location);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) if text == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Build a location by substituting parameters.
    ///
    /// Values must be non-empty and free of `/`, `?` and `#`, so the location
    /// matches this pattern again with the same parameters.
    pub fn build(&self, params: &Params) -> Result<String, BuildError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut location = String::new();
        for segment in &self.segments {
            location.push('/');
            match segment {
                Segment::Static(text) => location.push_str(text),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if value.is_empty() => return Err(BuildError::Missing(name.clone())),
                    Some(value) if value.contains(['/', '?', '#']) => {
                        return Err(BuildError::Invalid {
                            param: name.clone(),
                            value: value.clone(),
                        })
                    }
                    Some(value) => location.push_str(value),
                    None => return Err(BuildError::Missing(name.clone())),
                },
            }
        }
        Ok(location)
    }
}

/// Split a location into its non-empty path segments.
fn split_location(location: &str) -> Vec<&str> {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Normalise a base path: leading slash, no trailing slash, root becomes "".
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strip a normalised base from a full URL path.
///
/// Returns `None` when the path lies outside the base.
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with(['/', '?', '#']) {
        Some(rest)
    } else {
        None
    }
}

/// Prefix a location with a normalised base.
pub fn join_base(base: &str, location: &str) -> String {
    format!("{}{}", base, location)
}
