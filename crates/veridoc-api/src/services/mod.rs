//! Request-handling services.

pub mod upload;
