//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! SIGINT/SIGTERM/SIGQUIT
//!     → shutdown.rs (signal future resolves)
//!     → server stops accepting, listener closes
//!     → process exits 0
//! ```

pub mod shutdown;

pub use shutdown::shutdown_signal;
