//! Veridoc Processing Library
//!
//! Metadata validation for document submissions. Validation is advisory
//! inspection of declared size, filename, and content type only; file
//! contents are never decoded here.

pub mod validator;

pub use validator::{DocumentValidator, ValidationError};
