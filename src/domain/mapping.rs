//! Code mapping entities and the translation source-system enum.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{SYSTEM_ICD11_TM2, SYSTEM_NAMASTE};

/// A single row of the pre-joined mapping table.
///
/// The SNOMED CT and LOINC codes are carried verbatim as strings even where
/// the source data is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingRow {
    pub source_code: String,
    pub target_code: String,
    pub relationship: String,
    pub snomed_ct_code: String,
    pub loinc_code: String,
}

/// Supported translation source systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSystem {
    /// NAMASTE traditional medicine codes
    Nam,
    /// ICD-11 Traditional Medicine Module 2 codes
    Tm2,
}

impl SourceSystem {
    /// Parse a raw query value, case- and whitespace-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "NAM" => Some(SourceSystem::Nam),
            "TM2" => Some(SourceSystem::Tm2),
            _ => None,
        }
    }

    /// Label of the system codes are translated from.
    pub fn source_label(&self) -> &'static str {
        match self {
            SourceSystem::Nam => SYSTEM_NAMASTE,
            SourceSystem::Tm2 => SYSTEM_ICD11_TM2,
        }
    }

    /// Label of the system codes are translated to.
    pub fn target_label(&self) -> &'static str {
        match self {
            SourceSystem::Nam => SYSTEM_ICD11_TM2,
            SourceSystem::Tm2 => SYSTEM_NAMASTE,
        }
    }
}

/// One source-to-target equivalence emitted by a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConceptMapping {
    /// Code as seen from the requested direction
    #[schema(example = "NAM001")]
    pub source_code: String,
    /// Equivalent code in the target system
    #[schema(example = "SM27")]
    pub target_code: String,
    /// Relationship qualifier (e.g. "equivalent")
    pub relationship: String,
    /// Auxiliary SNOMED CT code, verbatim
    pub snomed_ct_code: String,
    /// Auxiliary LOINC code, verbatim
    pub loinc_code: String,
}

/// FHIR-flavoured translation result envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConceptMap {
    #[serde(rename = "resourceType")]
    #[schema(example = "ConceptMap")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub mappings: Vec<ConceptMapping>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(SourceSystem::parse("nam"), Some(SourceSystem::Nam));
        assert_eq!(SourceSystem::parse("  TM2 "), Some(SourceSystem::Tm2));
        assert_eq!(SourceSystem::parse("Nam"), Some(SourceSystem::Nam));
        assert_eq!(SourceSystem::parse("XYZ"), None);
        assert_eq!(SourceSystem::parse(""), None);
    }

    #[test]
    fn labels_swap_with_direction() {
        assert_eq!(SourceSystem::Nam.source_label(), "NAMASTE");
        assert_eq!(SourceSystem::Nam.target_label(), "ICD11_TM2");
        assert_eq!(SourceSystem::Tm2.source_label(), "ICD11_TM2");
        assert_eq!(SourceSystem::Tm2.target_label(), "NAMASTE");
    }
}
