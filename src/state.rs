//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It is immutable after startup: the route table is static and the config
//! is shared behind an `Arc`.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with default config (access gate on, no static dir).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    /// `AppState` with the access gate switched off.
    #[must_use]
    pub fn test_app_state_without_gate() -> AppState {
        AppState::new(ServerConfig { access_gate: false, ..ServerConfig::default() })
    }
}
