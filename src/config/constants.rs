//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Coding systems
// =============================================================================

/// Label for the NAMASTE traditional medicine code system
pub const SYSTEM_NAMASTE: &str = "NAMASTE";

/// Label for WHO ICD-11 Traditional Medicine Module 2 codes
pub const SYSTEM_ICD11_TM2: &str = "ICD11_TM2";

/// FHIR resource type for concept search results
pub const RESOURCE_TYPE_CODE_SYSTEM: &str = "CodeSystem";

/// FHIR resource type for translation results
pub const RESOURCE_TYPE_CONCEPT_MAP: &str = "ConceptMap";

/// Display name of the combined concept map
pub const CONCEPT_MAP_NAME: &str = "NAMASTE-ICD11-SNOMED-LOINC Map";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Frontend origins allowed by CORS (dev servers)
pub const ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];

// =============================================================================
// Database & Datasets
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/namaste_bridge.db?mode=rwc";

/// Default path of the ICD-11 TM2 concept table
pub const DEFAULT_CONCEPT_CSV: &str = "data/icd_tm2_concepts.csv";

/// Default path of the pre-joined NAMASTE/ICD11/SNOMED/LOINC mapping table
pub const DEFAULT_MAPPING_CSV: &str = "data/namaste_icd11_snomed_loinc.csv";

/// Default path of the ABHA user seed file
pub const DEFAULT_USER_SEED_CSV: &str = "data/abha_users.csv";
