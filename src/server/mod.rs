//! HTTP server exposing document previews and rendering
//!
//! The server is a thin shell around the renderer: it accepts order JSON or a
//! generated document, and answers with `text/html`. Every failure becomes a
//! JSON error response; no request can take the process down.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
