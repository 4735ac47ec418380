//! History service - per-user audit trail of translation lookups.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewTranslationRecord, TranslationRecord};
use crate::errors::AppResult;
use crate::infra::HistoryRepository;

#[cfg(test)]
use mockall::automock;

/// History service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Append one history entry and return its assigned id.
    ///
    /// Storage failures propagate; there is no retry.
    async fn save(&self, record: NewTranslationRecord) -> AppResult<i32>;

    /// All entries for a user, newest first. Unbounded.
    async fn list_for_user(&self, abha_id: &str) -> AppResult<Vec<TranslationRecord>>;
}

/// Concrete implementation of HistoryService backed by the history repository.
pub struct HistoryKeeper {
    repo: Arc<dyn HistoryRepository>,
}

impl HistoryKeeper {
    /// Create new history service instance
    pub fn new(repo: Arc<dyn HistoryRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl HistoryService for HistoryKeeper {
    async fn save(&self, record: NewTranslationRecord) -> AppResult<i32> {
        let saved = self.repo.insert(record).await?;
        Ok(saved.id)
    }

    async fn list_for_user(&self, abha_id: &str) -> AppResult<Vec<TranslationRecord>> {
        self.repo.list_for_user(abha_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockHistoryRepository;
    use chrono::Utc;

    fn new_record() -> NewTranslationRecord {
        NewTranslationRecord {
            abha_id: "ABHA123".to_string(),
            source_system: "NAMASTE".to_string(),
            source_code: "NAM001".to_string(),
            target_system: "ICD11_TM2".to_string(),
            target_code: "SM27".to_string(),
            snomed_ct_code: "49727002".to_string(),
            loinc_code: "64145-6".to_string(),
        }
    }

    #[tokio::test]
    async fn save_returns_assigned_id() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_insert().returning(|record| {
            Ok(TranslationRecord {
                id: 42,
                abha_id: record.abha_id,
                source_system: record.source_system,
                source_code: record.source_code,
                target_system: record.target_system,
                target_code: record.target_code,
                snomed_ct_code: record.snomed_ct_code,
                loinc_code: record.loinc_code,
                timestamp: Utc::now(),
            })
        });

        let service = HistoryKeeper::new(Arc::new(repo));
        let id = service.save(new_record()).await.unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn list_passes_through_repository_order() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_list_for_user().returning(|abha_id| {
            let make = |id: i32| TranslationRecord {
                id,
                abha_id: abha_id.to_string(),
                source_system: "NAMASTE".to_string(),
                source_code: "NAM001".to_string(),
                target_system: "ICD11_TM2".to_string(),
                target_code: "SM27".to_string(),
                snomed_ct_code: "49727002".to_string(),
                loinc_code: "64145-6".to_string(),
                timestamp: Utc::now(),
            };
            Ok(vec![make(2), make(1)])
        });

        let service = HistoryKeeper::new(Arc::new(repo));
        let history = service.list_for_user("ABHA123").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, 2);
    }
}
