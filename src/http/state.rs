//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::DatasetStore;
use crate::suggest::GenerativeClient;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Per-state facility dataset store
    pub datasets: Arc<DatasetStore>,
    /// Generative-text backend for the suggestion endpoints
    pub generative: Arc<dyn GenerativeClient>,
}

impl AppState {
    /// Create a new application state from its two collaborators.
    pub fn new(datasets: Arc<DatasetStore>, generative: Arc<dyn GenerativeClient>) -> Self {
        Self {
            datasets,
            generative,
        }
    }
}
