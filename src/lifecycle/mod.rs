//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Shutdown::trigger() → every subscribed server drains and exits
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → same graceful path as an in-process trigger
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
