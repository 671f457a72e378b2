//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path or route name)
//!     → table.rs (route lookup)
//!     → matcher.rs (segment-wise path matching)
//!     → Return: RouteMatch or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → validate names and paths
//!     → parse path patterns
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod route;
pub mod table;

pub use matcher::{BuildError, Params, PathPattern};
pub use route::{RouteEntry, RouteMatch};
pub use table::RouteTable;
