//! Repository for the `admins` table.

use sqlx::PgPool;

use landex_core::types::DbId;

use crate::error::StoreError;
use crate::models::admin::{Admin, GoogleProfile};

const COLUMNS: &str = "id, google_id, name, email, picture, role, status, created_at, updated_at";

/// Provides lookup and login reconciliation for admins.
pub struct AdminRepo;

impl AdminRepo {
    /// Reconcile an external identity on login: find-or-create with two
    /// candidate keys, resolved inside one transaction.
    ///
    /// Lookup is an explicit two-step: by external id first, then by
    /// email. A hit refreshes the mutable profile fields; a miss inserts
    /// a new admin with the default role and active status. Returns the
    /// row plus whether it was newly created.
    pub async fn reconcile_google(
        pool: &PgPool,
        profile: &GoogleProfile,
    ) -> Result<(Admin, bool), StoreError> {
        let mut tx = pool.begin().await?;

        let by_google_id = format!("SELECT {COLUMNS} FROM admins WHERE google_id = $1");
        let mut existing = sqlx::query_as::<_, Admin>(&by_google_id)
            .bind(&profile.google_id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_none() {
            let by_email = format!("SELECT {COLUMNS} FROM admins WHERE email = $1");
            existing = sqlx::query_as::<_, Admin>(&by_email)
                .bind(&profile.email)
                .fetch_optional(&mut *tx)
                .await?;
        }

        let (admin, created) = match existing {
            Some(found) => {
                let query = format!(
                    "UPDATE admins SET name = $2, picture = $3, updated_at = NOW() \
                     WHERE id = $1 RETURNING {COLUMNS}"
                );
                let updated = sqlx::query_as::<_, Admin>(&query)
                    .bind(found.id)
                    .bind(&profile.name)
                    .bind(&profile.picture)
                    .fetch_one(&mut *tx)
                    .await?;
                (updated, false)
            }
            None => {
                let query = format!(
                    "INSERT INTO admins (google_id, name, email, picture, role, status) \
                     VALUES ($1, $2, $3, $4, 'admin', '1') RETURNING {COLUMNS}"
                );
                let inserted = sqlx::query_as::<_, Admin>(&query)
                    .bind(&profile.google_id)
                    .bind(&profile.name)
                    .bind(&profile.email)
                    .bind(&profile.picture)
                    .fetch_one(&mut *tx)
                    .await?;
                (inserted, true)
            }
        };

        tx.commit().await?;
        Ok((admin, created))
    }

    /// Find an admin by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(admin)
    }
}
