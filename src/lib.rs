//! Static file HTTP server with access logging.
//!
//! # Data Flow
//! ```text
//! CLI flags
//!     → config.rs (immutable ServerConfig)
//!     → paths.rs (~ expansion + lexical normalization of the root)
//!     → http/server.rs (bind listener, ServeDir router)
//!     → http/access_log.rs (per-request status/byte capture, log line)
//!     → lifecycle/shutdown.rs (signal-triggered graceful close)
//! ```
//!
//! File serving itself (directory index, MIME types, range requests,
//! conditional GETs) is delegated to `tower_http::services::ServeDir`; this
//! crate only composes it, wraps it with the access-log middleware, and
//! manages the listener lifecycle.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod paths;

pub use config::ServerConfig;
pub use http::{AccessLogLayer, ServeError, Server};
