//! Navigation history subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator confirms a navigation
//!     → History::push / replace (new location)
//!     → History::go (back/forward, cursor move)
//!
//! Queries:
//!     location() → current app-relative location
//!     url()      → base path + location
//! ```
//!
//! # Design Decisions
//! - Locations are stored relative to the base path
//! - Pushing discards every entry forward of the cursor
//! - Moving past either end of the stack is a no-op

pub mod memory;

pub use memory::MemoryHistory;

use crate::routing::matcher::join_base;

/// Tracks back/forward navigation state.
pub trait History: Send + Sync + std::fmt::Debug {
    /// Normalised base path ("" for root).
    fn base(&self) -> &str;

    /// The active location, if anything has been navigated to.
    fn location(&self) -> Option<&str>;

    /// Location `delta` steps from the cursor, without moving.
    fn peek(&self, delta: isize) -> Option<&str>;

    /// Append a location after the cursor and make it current.
    fn push(&mut self, location: String);

    /// Overwrite the current location (pushes when the stack is empty).
    fn replace(&mut self, location: String);

    /// Move the cursor. Returns false and stays put when out of range.
    fn go(&mut self, delta: isize) -> bool;

    /// Number of entries in the stack.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, oldest first.
    fn entries(&self) -> Vec<String>;

    /// Full URL path of the active location.
    fn url(&self) -> Option<String> {
        self.location().map(|loc| join_base(self.base(), loc))
    }
}
