//! Translation history entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A persisted translation lookup, append-only.
///
/// `abha_id` references a user but is deliberately not a foreign key;
/// orphaned entries are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TranslationRecord {
    pub id: i32,
    pub abha_id: String,
    pub source_system: String,
    pub source_code: String,
    pub target_system: String,
    pub target_code: String,
    pub snomed_ct_code: String,
    pub loinc_code: String,
    pub timestamp: DateTime<Utc>,
}

/// Data for a translation record about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslationRecord {
    pub abha_id: String,
    pub source_system: String,
    pub source_code: String,
    pub target_system: String,
    pub target_code: String,
    pub snomed_ct_code: String,
    pub loinc_code: String,
}
