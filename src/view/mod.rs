//! View loading subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation to route R (first time)
//!     → lazy.rs (NotLoaded → Loading)
//!     → loader.rs (ViewLoader::load, may suspend)
//!         - fs.rs (read from a directory)
//!         - http.rs (fetch relative to a base URL)
//!         - memory.rs (preregistered modules)
//!     → Loaded(Arc<View>) or Failed(LoadError)
//!
//! Navigation to route R (again)
//!     → lazy.rs returns the cached Arc<View>
//! ```
//!
//! # Design Decisions
//! - Nothing is loaded when the route table is built
//! - One load per route at a time; concurrent callers share it
//! - Failures are recorded, not cached: the next navigation retries

pub mod fs;
pub mod http;
pub mod lazy;
pub mod loader;
pub mod memory;
pub mod types;

pub use fs::FsViewLoader;
pub use http::HttpViewLoader;
pub use lazy::LazyView;
pub use loader::ViewLoader;
pub use memory::MemoryViewLoader;
pub use types::{LoadError, View, ViewState};
