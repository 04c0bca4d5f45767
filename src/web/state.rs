//! Application state shared across handlers

use crate::auth::UserStore;
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::metrics::Metrics;
use crate::search::SearchPipeline;
use crate::session::SessionStore;
use std::sync::Arc;

/// Shared application state
///
/// The catalog is immutable; the user and session stores are the only
/// mutable shared state and guard themselves internally.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Matching/generation/ranking pipeline
    pub pipeline: Arc<SearchPipeline>,
    /// Account store
    pub users: Arc<UserStore>,
    /// Active sessions
    pub sessions: Arc<SessionStore>,
    /// Request counters
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create state over a catalog and a pre-populated user store
    pub fn new(settings: Settings, catalog: Catalog, users: UserStore) -> Self {
        let metrics = Arc::new(Metrics::new());
        let pipeline = Arc::new(SearchPipeline::new(Arc::new(catalog), metrics.clone()));

        Self {
            settings: Arc::new(settings),
            pipeline,
            users: Arc::new(users),
            sessions: Arc::new(SessionStore::new()),
            metrics,
        }
    }

    /// State with the built-in catalog and demo account
    pub fn builtin(settings: Settings) -> Self {
        Self::new(settings, Catalog::builtin(), UserStore::with_demo_user())
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
