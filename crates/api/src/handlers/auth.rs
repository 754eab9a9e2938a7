//! Handlers for the `/auth` resource (Google login, verify, profile).
//!
//! Token verification with Google happens in the frontend; this service
//! receives the asserted profile and reconciles it against the `admins`
//! table by external id or email, whichever resolves first.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use landex_core::error::CoreError;
use landex_db::models::admin::{Admin, GoogleProfile};
use landex_db::repositories::AdminRepo;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Response for `POST /auth/google`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Admin,
    pub token: String,
    /// Whether this login created the admin (first sign-in).
    pub created: bool,
}

/// Response for `GET /auth/verify` and `GET /auth/profile`.
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub user: Admin,
}

/// POST /api/v1/auth/google
///
/// Upsert-by-either-key reconciliation: an existing admin (matched on
/// google_id, then email) gets its name/picture refreshed; an unknown
/// identity is registered with the default role. Returns a signed JWT.
pub async fn google_login(
    State(state): State<AppState>,
    Json(profile): Json<GoogleProfile>,
) -> AppResult<Json<LoginResponse>> {
    profile.validate()?;

    let (admin, created) = AdminRepo::reconcile_google(&state.pool, &profile).await?;

    if created {
        tracing::info!(email = %admin.email, "registered new admin");
    } else {
        tracing::info!(email = %admin.email, "admin logged in");
    }

    let token = generate_access_token(admin.id, &admin.email, &admin.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(Json(LoginResponse {
        user: admin,
        token,
        created,
    }))
}

/// GET /api/v1/auth/verify
///
/// Validate the bearer token and confirm the admin still exists and is
/// active.
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> AppResult<Json<AdminResponse>> {
    let admin = AdminRepo::find_by_id(&state.pool, auth.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id: auth.admin_id,
        }))?;

    if !admin.is_active() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(Json(AdminResponse { user: admin }))
}

/// GET /api/v1/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> AppResult<Json<AdminResponse>> {
    let admin = AdminRepo::find_by_id(&state.pool, auth.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id: auth.admin_id,
        }))?;

    Ok(Json(AdminResponse { user: admin }))
}
