//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → extract.rs (campaign body parsing)
//!     → handlers.rs (canned payloads from the marketing engine)
//!     → error.rs (422 / 404 JSON bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{build_router, HttpServer};
