//! ABHA authentication and history handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::{AbhaUser, NewTranslationRecord, TranslationRecord};
use crate::errors::AppResult;

/// ABHA login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// ABHA identifier
    #[validate(length(min = 1, message = "abha_id is required"))]
    #[schema(example = "ABHA123")]
    pub abha_id: String,
    /// Registered phone number
    #[validate(length(min = 1, message = "phone is required"))]
    #[schema(example = "9999999999")]
    pub phone: String,
}

/// ABHA login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub abha_user: AbhaUser,
    /// JWT access token, valid 24 hours
    pub access_token: String,
}

/// Translation save request.
///
/// Every field is required and non-empty; the ad-hoc free-form payload of
/// earlier revisions is gone.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveTranslationRequest {
    #[validate(length(min = 1, message = "source_system is required"))]
    #[schema(example = "NAMASTE")]
    pub source_system: String,
    #[validate(length(min = 1, message = "source_code is required"))]
    #[schema(example = "NAM001")]
    pub source_code: String,
    #[validate(length(min = 1, message = "target_system is required"))]
    #[schema(example = "ICD11_TM2")]
    pub target_system: String,
    #[validate(length(min = 1, message = "target_code is required"))]
    #[schema(example = "SM27")]
    pub target_code: String,
    #[validate(length(min = 1, message = "snomed_ct_code is required"))]
    pub snomed_ct_code: String,
    #[validate(length(min = 1, message = "loinc_code is required"))]
    pub loinc_code: String,
}

/// Translation save response
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveTranslationResponse {
    #[schema(example = "Translation history saved successfully")]
    pub message: String,
    pub entry_id: i32,
}

/// Translation history response
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub history: Vec<TranslationRecord>,
}

/// Create ABHA routes; everything except login requires a bearer token.
pub fn abha_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(get_profile))
        .route("/save-translation", post(save_translation))
        .route("/translation-history", get(translation_history))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/login", post(login)).merge(protected)
}

/// ABHA login with ABHA ID and phone verification
#[utoipa::path(
    post,
    path = "/abha/login",
    tag = "ABHA",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid ABHA ID or phone number")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (abha_user, access_token) = state
        .auth_service
        .login(&payload.abha_id, &payload.phone)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        abha_user,
        access_token,
    }))
}

/// Get the authenticated user's ABHA profile
#[utoipa::path(
    get,
    path = "/abha/profile",
    tag = "ABHA",
    responses(
        (status = 200, description = "ABHA user profile", body = AbhaUser),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<AbhaUser>> {
    let user = state.auth_service.get_profile(&current_user.abha_id).await?;
    Ok(Json(user))
}

/// Save a translation history entry for the authenticated user
#[utoipa::path(
    post,
    path = "/abha/save-translation",
    tag = "ABHA",
    request_body = SaveTranslationRequest,
    responses(
        (status = 200, description = "Entry saved", body = SaveTranslationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_translation(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<SaveTranslationRequest>,
) -> AppResult<Json<SaveTranslationResponse>> {
    let entry_id = state
        .history_service
        .save(NewTranslationRecord {
            abha_id: current_user.abha_id,
            source_system: payload.source_system,
            source_code: payload.source_code,
            target_system: payload.target_system,
            target_code: payload.target_code,
            snomed_ct_code: payload.snomed_ct_code,
            loinc_code: payload.loinc_code,
        })
        .await?;

    Ok(Json(SaveTranslationResponse {
        message: "Translation history saved successfully".to_string(),
        entry_id,
    }))
}

/// Get the authenticated user's translation history, newest first
#[utoipa::path(
    get,
    path = "/abha/translation-history",
    tag = "ABHA",
    responses(
        (status = 200, description = "History entries, newest first", body = HistoryResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn translation_history(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<HistoryResponse>> {
    let history = state
        .history_service
        .list_for_user(&current_user.abha_id)
        .await?;

    Ok(Json(HistoryResponse { history }))
}
