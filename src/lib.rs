//! Client-side view router.
//!
//! Maps URL paths and route names to lazily-loaded views, and keeps the
//! back/forward history of navigations between them.
//!
//! ```text
//!   navigate("Home") / push("/home") / back()
//!              │
//!              ▼
//!   ┌────────────────────┐     ┌──────────────┐
//!   │     Navigator      │────▶│  RouteTable  │  name/path → RouteEntry
//!   │ (one nav at a time)│     └──────────────┘
//!   │                    │     ┌──────────────┐
//!   │                    │────▶│   LazyView   │──▶ ViewLoader (fs / http)
//!   │                    │     └──────────────┘
//!   │                    │     ┌──────────────┐
//!   │                    │────▶│   History    │  push / replace / go
//!   └────────────────────┘     └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::schema::RouterConfig;
pub use error::{RouterError, RouterResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use navigation::{Navigation, Navigator};
pub use routing::{Params, RouteTable};
