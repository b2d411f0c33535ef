//! TURBOMARK AI Engine library.
//!
//! An HTTP service answering marketing-automation requests (campaign copy,
//! revenue forecasts, lead scores) with canned payloads.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod marketing;
pub mod observability;

pub use config::EngineConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
