//! ICD-11 TM2 concept lookup handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::config::RESOURCE_TYPE_CODE_SYSTEM;
use crate::domain::Concept;
use crate::errors::AppResult;

/// Concept search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Search text matched against concept code and display
    pub query: String,
}

/// FHIR-flavoured search result envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct CodeSystemResponse {
    #[serde(rename = "resourceType")]
    #[schema(example = "CodeSystem")]
    pub resource_type: String,
    pub concepts: Vec<Concept>,
}

/// Create ICD lookup routes
pub fn icd_routes() -> Router<AppState> {
    Router::new().route("/icd11/tm2/search", get(search))
}

/// Autocomplete search for ICD-11 TM2 terms by code or display text
#[utoipa::path(
    get,
    path = "/icd/icd11/tm2/search",
    tag = "ICD-11",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching concepts in table order", body = CodeSystemResponse),
        (status = 400, description = "Empty query")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<CodeSystemResponse>> {
    let concepts = state.lookup_service.search(&params.query)?;

    Ok(Json(CodeSystemResponse {
        resource_type: RESOURCE_TYPE_CODE_SYSTEM.to_string(),
        concepts,
    }))
}
