//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{abha_handler, icd_handler, mapping_handler};
use crate::domain::{AbhaUser, Concept, ConceptMap, ConceptMapping, TranslationRecord};

/// OpenAPI documentation for the NAMASTE Bridge API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NAMASTE Bridge",
        version = "0.1.0",
        description = "Terminology bridge between NAMASTE, ICD-11 TM2, SNOMED CT and LOINC with ABHA login and per-user translation history",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Lookup
        icd_handler::search,
        // Translation
        mapping_handler::translate,
        // ABHA
        abha_handler::login,
        abha_handler::get_profile,
        abha_handler::save_translation,
        abha_handler::translation_history,
    ),
    components(
        schemas(
            // Domain types
            Concept,
            ConceptMap,
            ConceptMapping,
            AbhaUser,
            TranslationRecord,
            // Handler types
            icd_handler::CodeSystemResponse,
            abha_handler::LoginRequest,
            abha_handler::LoginResponse,
            abha_handler::SaveTranslationRequest,
            abha_handler::SaveTranslationResponse,
            abha_handler::HistoryResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "ICD-11", description = "Concept lookup"),
        (name = "Mapping", description = "Code translation"),
        (name = "ABHA", description = "Login, profile and translation history")
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
