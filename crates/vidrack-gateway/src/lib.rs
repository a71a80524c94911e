//! HTTP gateway for the Vidrack video catalog.
//!
//! Exposes the `/video/{id}` resource over HTTP and wires it to a
//! [`vidrack_core::Repository`] through an explicitly constructed
//! [`AppState`]; there is no process-wide global state.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
