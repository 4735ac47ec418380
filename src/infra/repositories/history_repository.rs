//! Translation history repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::translation_history::{self, ActiveModel, Entity as HistoryEntity};
use crate::domain::{NewTranslationRecord, TranslationRecord};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// History repository trait for dependency injection.
///
/// Entries are append-only; there is no update or delete.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append a new history entry, returning the persisted record
    async fn insert(&self, record: NewTranslationRecord) -> AppResult<TranslationRecord>;

    /// List all entries for a user, newest first
    async fn list_for_user(&self, abha_id: &str) -> AppResult<Vec<TranslationRecord>>;
}

/// Concrete implementation of HistoryRepository backed by SeaORM
pub struct HistoryStore {
    db: DatabaseConnection,
}

impl HistoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepository for HistoryStore {
    async fn insert(&self, record: NewTranslationRecord) -> AppResult<TranslationRecord> {
        let active_model = ActiveModel {
            abha_id: Set(record.abha_id),
            source_system: Set(record.source_system),
            source_code: Set(record.source_code),
            target_system: Set(record.target_system),
            target_code: Set(record.target_code),
            snomed_ct_code: Set(record.snomed_ct_code),
            loinc_code: Set(record.loinc_code),
            timestamp: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(TranslationRecord::from(model))
    }

    async fn list_for_user(&self, abha_id: &str) -> AppResult<Vec<TranslationRecord>> {
        let rows = HistoryEntity::find()
            .filter(translation_history::Column::AbhaId.eq(abha_id))
            // id breaks ties between entries written in the same instant
            .order_by_desc(translation_history::Column::Timestamp)
            .order_by_desc(translation_history::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(TranslationRecord::from).collect())
    }
}
