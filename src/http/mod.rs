//! HTTP dev server subsystem.
//!
//! # Data Flow
//! ```text
//! GET <base>/<path>
//!     → server.rs (request ID, trace, timeout)
//!     → strip base path
//!     → navigator (resolve + lazy load, history untouched)
//!     → view body with its content type
//! ```

pub mod server;

pub use server::{AppState, HttpServer, ROUTES_PATH};
