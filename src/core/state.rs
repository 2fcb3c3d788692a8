use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::repository::{MemoryOrderStore, OrderStore};
use crate::orders::OrderService;

/// Server state - shared handles for every request
///
/// Cloning is shallow; all services sit behind `Arc`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | store | order repository (contract object) |
/// | jwt_service | bearer credential validation |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Order store
    pub store: Arc<dyn OrderStore>,
    /// JWT validation service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize state with the in-process store
    pub fn initialize(config: &Config) -> Self {
        Self::with_store(config.clone(), Arc::new(MemoryOrderStore::new()))
    }

    /// Build state around an explicit store implementation
    ///
    /// Used by tests and by deployments with a real storage backend.
    pub fn with_store(config: Config, store: Arc<dyn OrderStore>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            store,
            jwt_service,
        }
    }

    /// Order lifecycle service bound to this state's store
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.store.clone())
    }
}
