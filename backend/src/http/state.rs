//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for inspection, rig and inspector storage
    pub repository: Arc<dyn FullRepository>,
    /// Bearer token required on `/api/*` routes; `None` disables auth.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    /// Create a new application state with the given repository and no auth.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            api_token: None,
        }
    }

    /// Require `Authorization: Bearer <token>` on API routes.
    ///
    /// An empty token leaves auth disabled.
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token
            .filter(|t| !t.trim().is_empty())
            .map(|t| Arc::from(t.trim()));
        self
    }
}
