//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, deserialize, BASE_URL override)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → compiled once into the route table at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table is never mutated at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::RouterConfig;
pub use schema::{ListenerConfig, LoaderConfig, LoaderKind, ObservabilityConfig, RouteConfig};
pub use validation::ValidationError;
