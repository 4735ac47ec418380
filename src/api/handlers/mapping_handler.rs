//! Code translation handlers.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::middleware::bearer_token;
use crate::api::AppState;
use crate::domain::ConceptMap;
use crate::errors::AppResult;

/// Translation query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct TranslateParams {
    /// Source system (NAM or TM2)
    pub system: String,
    /// Code to translate
    pub code: String,
    /// Whether to save this lookup to user history
    #[serde(default)]
    pub save_history: bool,
}

/// Create mapping routes
pub fn mapping_routes() -> Router<AppState> {
    Router::new().route("/translate", get(translate))
}

/// Bidirectional translation across NAMASTE, ICD11_TM2, SNOMED CT and LOINC
///
/// The bearer token is optional; it is only consulted for the best-effort
/// history side effect and never gates the translation itself.
#[utoipa::path(
    get,
    path = "/mapping/translate",
    tag = "Mapping",
    params(TranslateParams),
    responses(
        (status = 200, description = "ConceptMap with zero or more mappings", body = ConceptMap),
        (status = 400, description = "Unsupported system value")
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn translate(
    State(state): State<AppState>,
    Query(params): Query<TranslateParams>,
    headers: HeaderMap,
) -> AppResult<Json<ConceptMap>> {
    let token = bearer_token(&headers);

    let result = state
        .translation_service
        .translate(&params.system, &params.code, params.save_history, token)
        .await?;

    Ok(Json(result))
}
