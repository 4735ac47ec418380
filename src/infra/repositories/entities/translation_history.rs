//! Translation history database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::TranslationRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "translation_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub abha_id: String,
    pub source_system: String,
    pub source_code: String,
    pub target_system: String,
    pub target_code: String,
    pub snomed_ct_code: String,
    pub loinc_code: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for TranslationRecord {
    fn from(model: Model) -> Self {
        TranslationRecord {
            id: model.id,
            abha_id: model.abha_id,
            source_system: model.source_system,
            source_code: model.source_code,
            target_system: model.target_system,
            target_code: model.target_code,
            snomed_ct_code: model.snomed_ct_code,
            loinc_code: model.loinc_code,
            timestamp: model.timestamp,
        }
    }
}
