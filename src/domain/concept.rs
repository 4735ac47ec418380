//! ICD-11 TM2 concept entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single row of the ICD-11 TM2 concept table.
///
/// Loaded once from CSV at startup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Concept {
    /// ICD-11 TM2 code
    #[schema(example = "SM27")]
    pub code: String,
    /// Human-readable display term
    #[schema(example = "Cough disorder (TM2)")]
    pub display: String,
    /// Optional longer definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Concept {
    /// Case-insensitive containment check against code and display.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.code.to_lowercase().contains(needle_lower)
            || self.display.to_lowercase().contains(needle_lower)
    }
}
