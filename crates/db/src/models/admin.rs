//! Admin (operator) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use landex_core::types::{DbId, Timestamp};

/// Status value marking an admin account as active.
pub const ADMIN_STATUS_ACTIVE: &str = "1";

/// An admin row from the `admins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub google_id: String,
    pub name: Option<String>,
    pub email: String,
    pub picture: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Admin {
    pub fn is_active(&self) -> bool {
        self.status == ADMIN_STATUS_ACTIVE
    }
}

/// Profile asserted by the external identity provider on login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GoogleProfile {
    #[validate(length(min = 1, message = "google_id is required"))]
    pub google_id: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}
