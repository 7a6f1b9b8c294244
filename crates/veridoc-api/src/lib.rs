//! Veridoc API Library
//!
//! This crate provides the HTTP API handlers, middleware, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod services;

// Public modules
pub mod auth;
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
