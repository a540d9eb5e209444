//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ServeDir file serving)
//!     → access_log.rs (capture status + bytes, emit one log line)
//!     → Send to client
//! ```

pub mod access_log;
pub mod server;

pub use access_log::{AccessLogLayer, ResponseRecord};
pub use server::{ServeError, Server};
