//! Application state for the Shift Summary Calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::FieldRegistry;
use crate::logo::LogoLoader;

/// Shared application state.
///
/// Holds the field registry and the logo loader, whose cache lives as long
/// as the state does.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<FieldRegistry>,
    logo: Arc<LogoLoader>,
    logo_url: Arc<str>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(registry: FieldRegistry, logo: LogoLoader, logo_url: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            logo: Arc::new(logo),
            logo_url: Arc::from(logo_url.into()),
        }
    }

    /// Returns the field registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns the logo loader.
    pub fn logo(&self) -> &LogoLoader {
        &self.logo
    }

    /// Returns the configured logo URL.
    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::RetryPolicy;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_logo_loader() {
        let state = AppState::new(
            FieldRegistry::default(),
            LogoLoader::new(RetryPolicy::default()),
            "http://localhost/logo.jpg",
        );
        let clone = state.clone();
        assert!(std::ptr::eq(state.logo(), clone.logo()));
        assert_eq!(clone.logo_url(), "http://localhost/logo.jpg");
    }
}
