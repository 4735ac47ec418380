//! Translation service - bidirectional code translation over the mapping table.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{CONCEPT_MAP_NAME, RESOURCE_TYPE_CONCEPT_MAP};
use crate::domain::{ConceptMap, ConceptMapping, NewTranslationRecord, SourceSystem};
use crate::errors::{AppError, AppResult};
use crate::infra::Datasets;
use crate::services::{AuthService, HistoryService};

/// Translation service trait for dependency injection.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate a code between NAMASTE and ICD-11 TM2.
    ///
    /// `system` selects the direction (NAM or TM2, case/whitespace lenient);
    /// anything else is a 400. Zero matches yields an empty mapping list,
    /// not an error.
    ///
    /// When `save_history` is set and a bearer token accompanies the
    /// request, a successful translation is additionally recorded to the
    /// user's history. That side effect is best-effort: a bad token or a
    /// storage failure never affects the returned mapping.
    async fn translate(
        &self,
        system: &str,
        code: &str,
        save_history: bool,
        token: Option<&str>,
    ) -> AppResult<ConceptMap>;
}

/// Concrete implementation reading the shared immutable mapping table.
pub struct Translator {
    datasets: Arc<Datasets>,
    auth: Arc<dyn AuthService>,
    history: Arc<dyn HistoryService>,
}

impl Translator {
    /// Create new translation service instance
    pub fn new(
        datasets: Arc<Datasets>,
        auth: Arc<dyn AuthService>,
        history: Arc<dyn HistoryService>,
    ) -> Self {
        Self {
            datasets,
            auth,
            history,
        }
    }

    /// Record the first mapping to the requesting user's history.
    ///
    /// Fire-and-forget: every failure is swallowed so the primary translate
    /// response is returned unchanged.
    async fn record_lookup(
        &self,
        system: SourceSystem,
        code: &str,
        token: &str,
        first: &ConceptMapping,
    ) {
        let outcome: AppResult<i32> = async {
            let claims = self.auth.verify_token(token)?;
            self.history
                .save(NewTranslationRecord {
                    abha_id: claims.abha_id,
                    source_system: system.source_label().to_string(),
                    source_code: code.to_string(),
                    target_system: system.target_label().to_string(),
                    target_code: first.target_code.clone(),
                    snomed_ct_code: first.snomed_ct_code.clone(),
                    loinc_code: first.loinc_code.clone(),
                })
                .await
        }
        .await;

        if let Err(e) = outcome {
            tracing::debug!("Skipping translation history save: {}", e);
        }
    }
}

#[async_trait]
impl TranslationService for Translator {
    async fn translate(
        &self,
        system: &str,
        code: &str,
        save_history: bool,
        token: Option<&str>,
    ) -> AppResult<ConceptMap> {
        let system = SourceSystem::parse(system)
            .ok_or_else(|| AppError::bad_request("Unsupported system. Use NAM or TM2."))?;
        let code = code.trim();

        let mappings: Vec<ConceptMapping> = self
            .datasets
            .mappings
            .iter()
            .filter(|row| match system {
                SourceSystem::Nam => row.source_code == code,
                SourceSystem::Tm2 => row.target_code == code,
            })
            .map(|row| {
                // Source/target in the output follow the requested direction
                let (src_code, tgt_code) = match system {
                    SourceSystem::Nam => (row.source_code.clone(), row.target_code.clone()),
                    SourceSystem::Tm2 => (row.target_code.clone(), row.source_code.clone()),
                };
                ConceptMapping {
                    source_code: src_code,
                    target_code: tgt_code,
                    relationship: row.relationship.clone(),
                    snomed_ct_code: row.snomed_ct_code.clone(),
                    loinc_code: row.loinc_code.clone(),
                }
            })
            .collect();

        if save_history && !mappings.is_empty() {
            if let Some(token) = token {
                self.record_lookup(system, code, token, &mappings[0]).await;
            }
        }

        Ok(ConceptMap {
            resource_type: RESOURCE_TYPE_CONCEPT_MAP.to_string(),
            id: "ConceptMap".to_string(),
            name: CONCEPT_MAP_NAME.to_string(),
            mappings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MappingRow;
    use crate::services::{Claims, MockAuthService, MockHistoryService};
    use chrono::Utc;
    use std::sync::Mutex;

    fn mapping_rows() -> Vec<MappingRow> {
        vec![
            MappingRow {
                source_code: "NAM001".to_string(),
                target_code: "SM27".to_string(),
                relationship: "equivalent".to_string(),
                snomed_ct_code: "49727002".to_string(),
                loinc_code: "64145-6".to_string(),
            },
            MappingRow {
                source_code: "NAM002".to_string(),
                target_code: "SM31".to_string(),
                relationship: "equivalent".to_string(),
                snomed_ct_code: "386661006".to_string(),
                loinc_code: "8310-5".to_string(),
            },
            // Second target for NAM001 to exercise multi-row results
            MappingRow {
                source_code: "NAM001".to_string(),
                target_code: "SM28".to_string(),
                relationship: "broader".to_string(),
                snomed_ct_code: "11833005".to_string(),
                loinc_code: "64145-6".to_string(),
            },
        ]
    }

    fn translator_with(auth: MockAuthService, history: MockHistoryService) -> Translator {
        Translator::new(
            Arc::new(Datasets::from_rows(vec![], mapping_rows())),
            Arc::new(auth),
            Arc::new(history),
        )
    }

    fn translator() -> Translator {
        translator_with(MockAuthService::new(), MockHistoryService::new())
    }

    fn valid_claims() -> Claims {
        Claims {
            abha_id: "ABHA123".to_string(),
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        }
    }

    #[tokio::test]
    async fn nam_direction_matches_source_code() {
        let result = translator().translate("NAM", "NAM001", false, None).await.unwrap();

        assert_eq!(result.resource_type, "ConceptMap");
        assert_eq!(result.mappings.len(), 2);
        assert_eq!(result.mappings[0].source_code, "NAM001");
        assert_eq!(result.mappings[0].target_code, "SM27");
        assert_eq!(result.mappings[1].target_code, "SM28");
    }

    #[tokio::test]
    async fn tm2_direction_swaps_source_and_target() {
        let result = translator().translate("TM2", "SM27", false, None).await.unwrap();

        assert_eq!(result.mappings.len(), 1);
        assert_eq!(result.mappings[0].source_code, "SM27");
        assert_eq!(result.mappings[0].target_code, "NAM001");
        // Auxiliary codes travel verbatim in both directions
        assert_eq!(result.mappings[0].snomed_ct_code, "49727002");
        assert_eq!(result.mappings[0].loinc_code, "64145-6");
    }

    #[tokio::test]
    async fn both_directions_reference_the_same_row() {
        let t = translator();
        let forward = t.translate("NAM", "NAM002", false, None).await.unwrap();
        let backward = t.translate("TM2", "SM31", false, None).await.unwrap();

        assert_eq!(forward.mappings[0].source_code, backward.mappings[0].target_code);
        assert_eq!(forward.mappings[0].target_code, backward.mappings[0].source_code);
        assert_eq!(
            forward.mappings[0].snomed_ct_code,
            backward.mappings[0].snomed_ct_code
        );
    }

    #[tokio::test]
    async fn system_is_normalized_and_code_trimmed() {
        let result = translator().translate(" nam ", "  NAM001 ", false, None).await.unwrap();
        assert_eq!(result.mappings.len(), 2);
    }

    #[tokio::test]
    async fn unknown_system_is_a_bad_request() {
        let err = translator().translate("XYZ", "NAM001", false, None).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn unmatched_code_yields_empty_mapping_list() {
        let result = translator().translate("NAM", "NAM999", false, None).await.unwrap();
        assert!(result.mappings.is_empty());
    }

    #[tokio::test]
    async fn history_saved_from_first_mapping_with_valid_token() {
        let saved: Arc<Mutex<Vec<NewTranslationRecord>>> = Arc::new(Mutex::new(Vec::new()));

        let mut auth = MockAuthService::new();
        auth.expect_verify_token().returning(|_| Ok(valid_claims()));

        let mut history = MockHistoryService::new();
        let sink = saved.clone();
        history.expect_save().returning(move |record| {
            sink.lock().unwrap().push(record);
            Ok(1)
        });

        let t = translator_with(auth, history);
        let result = t.translate("NAM", "NAM001", true, Some("token")).await.unwrap();
        assert_eq!(result.mappings.len(), 2);

        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].abha_id, "ABHA123");
        assert_eq!(saved[0].source_system, "NAMASTE");
        assert_eq!(saved[0].target_system, "ICD11_TM2");
        // Entry derives from the requested code and the FIRST mapping
        assert_eq!(saved[0].source_code, "NAM001");
        assert_eq!(saved[0].target_code, "SM27");
        assert_eq!(saved[0].snomed_ct_code, "49727002");
    }

    #[tokio::test]
    async fn invalid_token_does_not_fail_the_translation() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token()
            .returning(|_| Err(AppError::Unauthorized));

        let mut history = MockHistoryService::new();
        history.expect_save().never();

        let t = translator_with(auth, history);
        let result = t.translate("NAM", "NAM001", true, Some("bad")).await.unwrap();
        assert_eq!(result.mappings.len(), 2);
    }

    #[tokio::test]
    async fn storage_failure_does_not_fail_the_translation() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().returning(|_| Ok(valid_claims()));

        let mut history = MockHistoryService::new();
        history
            .expect_save()
            .returning(|_| Err(AppError::internal("disk full")));

        let t = translator_with(auth, history);
        let result = t.translate("NAM", "NAM001", true, Some("token")).await.unwrap();
        assert_eq!(result.mappings.len(), 2);
    }

    #[tokio::test]
    async fn no_history_attempt_without_matches_or_token() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().never();
        let mut history = MockHistoryService::new();
        history.expect_save().never();

        let t = translator_with(auth, history);
        // No matches
        t.translate("NAM", "NAM999", true, Some("token")).await.unwrap();
        // No token
        t.translate("NAM", "NAM001", true, None).await.unwrap();
    }
}
