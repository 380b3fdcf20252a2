//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxConfiguration;

/// Shared application state.
///
/// Holds the tax configuration used when a request does not bring its own.
#[derive(Clone)]
pub struct AppState {
    /// The default tax configuration.
    config: Arc<TaxConfiguration>,
}

impl AppState {
    /// Creates a new application state around the given configuration.
    pub fn new(config: TaxConfiguration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the default configuration.
    pub fn config(&self) -> &TaxConfiguration {
        &self.config
    }
}
