//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Datasets};
use crate::services::{AuthService, HistoryService, LookupService, Services, TranslationService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Concept lookup service
    pub lookup_service: Arc<dyn LookupService>,
    /// Code translation service
    pub translation_service: Arc<dyn TranslationService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Translation history service
    pub history_service: Arc<dyn HistoryService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database connection, the shared
    /// immutable datasets, and configuration.
    pub fn from_config(database: Arc<Database>, datasets: Arc<Datasets>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), datasets, config);

        Self {
            lookup_service: services.lookup(),
            translation_service: services.translation(),
            auth_service: services.auth(),
            history_service: services.history(),
            database,
        }
    }

    /// Create application state with manually injected services (for tests).
    pub fn new(
        lookup_service: Arc<dyn LookupService>,
        translation_service: Arc<dyn TranslationService>,
        auth_service: Arc<dyn AuthService>,
        history_service: Arc<dyn HistoryService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            lookup_service,
            translation_service,
            auth_service,
            history_service,
            database,
        }
    }
}
