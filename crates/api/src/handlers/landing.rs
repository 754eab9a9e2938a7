//! Handlers for the `/landings` resource.
//!
//! Reads are public; every mutation requires an authenticated admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use landex_core::error::CoreError;
use landex_core::render::{reconstruct, Reconstruction, SideEffect};
use landex_core::types::DbId;
use landex_db::models::landing::{Landing, LandingDraft, LandingSummary};
use landex_db::repositories::LandingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Request body for `PATCH /landings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub is_active: bool,
}

/// Response for `DELETE /landings/{id}`: the pre-deletion snapshot.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub landing: Landing,
}

/// Response for `GET /landings/{id}/view`.
///
/// An inactive landing is a business outcome, not an error: the payload
/// says so and carries nothing else, so the public page can render its
/// "unavailable" state.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<Value>,
    pub side_effects: Vec<SideEffect>,
}

/// GET /api/v1/landings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LandingSummary>>> {
    let landings = LandingRepo::list(&state.pool).await?;
    Ok(Json(landings))
}

/// GET /api/v1/landings/{id}
///
/// Full record; collection fields are returned in their persisted text
/// form. Rendering clients that want decoded sections use `/view`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Landing>> {
    let landing = LandingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Landing",
            id,
        }))?;
    Ok(Json(landing))
}

/// GET /api/v1/landings/{id}/view
///
/// Run the reconstruction pipeline: decode all collections and derive
/// the ordered document side effects for public presentation.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ViewResponse>> {
    let landing = LandingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Landing",
            id,
        }))?;

    let document = serde_json::to_value(&landing)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize landing: {e}")))?;

    let response = match reconstruct(document)? {
        Reconstruction::Unavailable => ViewResponse {
            available: false,
            landing: None,
            side_effects: Vec::new(),
        },
        Reconstruction::Ready(rendered) => ViewResponse {
            available: true,
            landing: Some(rendered.landing),
            side_effects: rendered.side_effects,
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/landings
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(draft): Json<LandingDraft>,
) -> AppResult<(StatusCode, Json<Landing>)> {
    draft.validate()?;

    let landing = LandingRepo::create(&state.pool, &draft).await?;
    tracing::info!(id = landing.id, admin = %admin.email, "landing created");
    Ok((StatusCode::CREATED, Json(landing)))
}

/// PUT /api/v1/landings/{id}
///
/// Full replacement of every field except `id` and `created_at`.
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(draft): Json<LandingDraft>,
) -> AppResult<Json<Landing>> {
    draft.validate()?;

    let landing = LandingRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Landing",
            id,
        }))?;
    tracing::info!(id, admin = %admin.email, "landing updated");
    Ok(Json(landing))
}

/// PATCH /api/v1/landings/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(body): Json<StatusRequest>,
) -> AppResult<Json<Landing>> {
    let landing = LandingRepo::set_active(&state.pool, id, body.is_active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Landing",
            id,
        }))?;
    tracing::info!(id, is_active = body.is_active, admin = %admin.email, "landing status changed");
    Ok(Json(landing))
}

/// DELETE /api/v1/landings/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let landing = LandingRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Landing",
            id,
        }))?;
    tracing::info!(id, admin = %admin.email, "landing deleted");
    Ok(Json(DeleteResponse {
        message: "Landing deleted",
        landing,
    }))
}
