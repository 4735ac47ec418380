//! Service container - wires repositories and datasets into services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, ConceptSearcher, HistoryKeeper, HistoryService, LookupService,
    TranslationService, Translator,
};
use crate::config::Config;
use crate::infra::{Datasets, HistoryStore, UserStore};

/// Holds one instance of every application service.
pub struct Services {
    lookup_service: Arc<dyn LookupService>,
    translation_service: Arc<dyn TranslationService>,
    auth_service: Arc<dyn AuthService>,
    history_service: Arc<dyn HistoryService>,
}

impl Services {
    /// Build all services from a database connection, the shared immutable
    /// datasets, and configuration.
    pub fn from_connection(
        db: DatabaseConnection,
        datasets: Arc<Datasets>,
        config: Config,
    ) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let history_repo = Arc::new(HistoryStore::new(db));

        let auth_service: Arc<dyn AuthService> = Arc::new(Authenticator::new(user_repo, config));
        let history_service: Arc<dyn HistoryService> = Arc::new(HistoryKeeper::new(history_repo));
        let lookup_service: Arc<dyn LookupService> =
            Arc::new(ConceptSearcher::new(datasets.clone()));
        let translation_service: Arc<dyn TranslationService> = Arc::new(Translator::new(
            datasets,
            auth_service.clone(),
            history_service.clone(),
        ));

        Self {
            lookup_service,
            translation_service,
            auth_service,
            history_service,
        }
    }

    /// Get lookup service
    pub fn lookup(&self) -> Arc<dyn LookupService> {
        self.lookup_service.clone()
    }

    /// Get translation service
    pub fn translation(&self) -> Arc<dyn TranslationService> {
        self.translation_service.clone()
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get history service
    pub fn history(&self) -> Arc<dyn HistoryService> {
        self.history_service.clone()
    }
}
