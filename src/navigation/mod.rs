//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(name, params) / push(path) / go(delta)
//!     → routing (resolve target)
//!     → view (lazy load, may suspend)
//!     → history (push / replace / move cursor)
//!     → watch + broadcast (current navigation, event stream)
//! ```

pub mod navigator;

pub use navigator::{Navigation, Navigator, DEFAULT_LOAD_TIMEOUT};
