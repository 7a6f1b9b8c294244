//! Application state.
//!
//! Every component dependency (storage, registry, token service, validator)
//! is constructed once at startup and passed in explicitly so tests can wire
//! fakes.

use std::sync::Arc;

use veridoc_core::Config;
use veridoc_processing::DocumentValidator;
use veridoc_registry::Registry;
use veridoc_storage::Storage;

use crate::auth::JwtService;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub registry: Registry,
    pub jwt: Arc<JwtService>,
    pub validator: DocumentValidator,
}
