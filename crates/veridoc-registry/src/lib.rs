//! Veridoc Registry Library
//!
//! Durable record registry for user accounts and their document sets, backed
//! by a single JSON record file.
//!
//! # Durability model
//!
//! The full record map lives in memory behind a `RwLock`; every mutation is
//! persisted by writing a temp file next to the registry file, fsyncing, and
//! renaming over it (copy-on-write swap). Readers never observe a partially
//! applied document replacement: the in-memory record is swapped as a whole
//! under the write lock, and the on-disk file is replaced atomically by the
//! rename.
//!
//! Concurrent `replace_documents` calls for the same identity serialize on
//! the write lock (queueing policy): both succeed, the later commit wins and
//! the earlier commit's references are returned to it for cleanup.

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
