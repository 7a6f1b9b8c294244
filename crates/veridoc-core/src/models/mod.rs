//! Domain models

pub mod document;
pub mod user;

pub use document::{DocumentKind, DocumentRef, DocumentRefResponse, DocumentSet, DocumentSetResponse};
pub use user::User;
