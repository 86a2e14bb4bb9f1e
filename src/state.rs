//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the server configuration and the in-memory product registry. The
//! registry is the only mutable state; it lives behind an async `RwLock` so
//! verification lookups proceed concurrently and registrations serialize on
//! the insert.

use std::collections::HashMap;
use std::sync::Arc;

use products::Product;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

// =============================================================================
// REGISTRY
// =============================================================================

/// Registered products plus the verification-code index.
#[derive(Debug, Default)]
pub struct Registry {
    /// Products keyed by `productId`.
    pub products: HashMap<String, Product>,
    /// Issued verification code -> `productId`.
    pub codes: HashMap<String, String>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<RwLock<Registry>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), registry: Arc::new(RwLock::new(Registry::default())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
