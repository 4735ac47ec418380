//! Lookup service - substring search over the ICD-11 TM2 concept table.

use std::sync::Arc;

use crate::domain::Concept;
use crate::errors::{AppError, AppResult};
use crate::infra::Datasets;

/// Lookup service trait for dependency injection.
pub trait LookupService: Send + Sync {
    /// Case-insensitive substring search against concept code and display.
    ///
    /// Returns matches in table order, unranked. An empty result set is a
    /// valid outcome; an empty query is not.
    fn search(&self, query: &str) -> AppResult<Vec<Concept>>;
}

/// Concrete implementation reading the shared immutable concept table.
pub struct ConceptSearcher {
    datasets: Arc<Datasets>,
}

impl ConceptSearcher {
    /// Create new lookup service instance
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }
}

impl LookupService for ConceptSearcher {
    fn search(&self, query: &str) -> AppResult<Vec<Concept>> {
        if query.trim().is_empty() {
            return Err(AppError::validation("query must not be empty"));
        }

        let needle = query.to_lowercase();
        let results = self
            .datasets
            .concepts
            .iter()
            .filter(|c| c.matches(&needle))
            .cloned()
            .collect();

        Ok(results)
    }
}
