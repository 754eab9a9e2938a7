//! Repository for the `landings` table.
//!
//! Create and update touch ~55 heterogeneous columns, several of which
//! are independently encoded collections; both run inside an explicit
//! transaction so a failure on any single field leaves no partial row.

use sqlx::PgPool;

use landex_core::types::DbId;

use crate::error::StoreError;
use crate::models::landing::{Landing, LandingDraft, LandingSummary};

/// Column list shared across queries to avoid repetition. Order matches
/// the section grouping of the schema.
const COLUMNS: &str = "id, nombre_empresa, correo_contacto, telefono_contacto, title, main_color, \
    logo_url, favicon_url, banner_url, is_active, \
    show_inicio, inicio_title, inicio_subtitle, inicio_description, inicio_background_url, \
    show_descripcion, descripcion_title, descripcion_text, descripcion_image_url, \
    show_caracteristicas, caracteristicas_title, caracteristicas_text, caracteristicas_list, \
    show_horarios, horarios_title, horarios_json, \
    show_testimonios, testimonios_title, testimonios_json, \
    show_pagos, pagos_title, pagos_descripcion, pagos_metodos, \
    show_productos, productos_title, productos_descripcion, productos_json, \
    show_galeria, galeria_title, galeria_imagenes, \
    show_contacto, contacto_title, contacto_descripcion, contacto_telefono, \
    contacto_email, contacto_direccion, contacto_whatsapp, \
    show_mapa, mapa_title, mapa_lat, mapa_lng, \
    fuente_principal, fondo_color, fondo_imagen_url, seo_keywords, seo_description, \
    created_at, updated_at";

/// Provides the six landing operations.
pub struct LandingRepo;

impl LandingRepo {
    /// Insert a new landing as one atomic unit.
    ///
    /// Applies the creation default policy, encodes every collection via
    /// the codec, and writes the full row inside a transaction. A bad
    /// payload for one section aborts the whole write.
    pub async fn create(pool: &PgPool, draft: &LandingDraft) -> Result<Landing, StoreError> {
        let draft = draft.clone().with_creation_defaults();
        let collections = draft.encode_collections()?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO landings (
                nombre_empresa, correo_contacto, telefono_contacto, title, main_color,
                logo_url, favicon_url, banner_url, is_active,
                show_inicio, inicio_title, inicio_subtitle, inicio_description, inicio_background_url,
                show_descripcion, descripcion_title, descripcion_text, descripcion_image_url,
                show_caracteristicas, caracteristicas_title, caracteristicas_text, caracteristicas_list,
                show_horarios, horarios_title, horarios_json,
                show_testimonios, testimonios_title, testimonios_json,
                show_pagos, pagos_title, pagos_descripcion, pagos_metodos,
                show_productos, productos_title, productos_descripcion, productos_json,
                show_galeria, galeria_title, galeria_imagenes,
                show_contacto, contacto_title, contacto_descripcion, contacto_telefono,
                contacto_email, contacto_direccion, contacto_whatsapp,
                show_mapa, mapa_title, mapa_lat, mapa_lng,
                fuente_principal, fondo_color, fondo_imagen_url, seo_keywords, seo_description
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
                $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                $31, $32, $33, $34, $35, $36, $37, $38, $39, $40,
                $41, $42, $43, $44, $45, $46, $47, $48, $49, $50,
                $51, $52, $53, $54, $55
            ) RETURNING {COLUMNS}"
        );

        let landing = sqlx::query_as::<_, Landing>(&query)
            .bind(&draft.nombre_empresa)
            .bind(&draft.correo_contacto)
            .bind(&draft.telefono_contacto)
            .bind(&draft.title)
            .bind(&draft.main_color)
            .bind(&draft.logo_url)
            .bind(&draft.favicon_url)
            .bind(&draft.banner_url)
            .bind(draft.is_active)
            .bind(draft.show_inicio)
            .bind(&draft.inicio_title)
            .bind(&draft.inicio_subtitle)
            .bind(&draft.inicio_description)
            .bind(&draft.inicio_background_url)
            .bind(draft.show_descripcion)
            .bind(&draft.descripcion_title)
            .bind(&draft.descripcion_text)
            .bind(&draft.descripcion_image_url)
            .bind(draft.show_caracteristicas)
            .bind(&draft.caracteristicas_title)
            .bind(&draft.caracteristicas_text)
            .bind(&collections.caracteristicas_list)
            .bind(draft.show_horarios)
            .bind(&draft.horarios_title)
            .bind(&collections.horarios_json)
            .bind(draft.show_testimonios)
            .bind(&draft.testimonios_title)
            .bind(&collections.testimonios_json)
            .bind(draft.show_pagos)
            .bind(&draft.pagos_title)
            .bind(&draft.pagos_descripcion)
            .bind(&collections.pagos_metodos)
            .bind(draft.show_productos)
            .bind(&draft.productos_title)
            .bind(&draft.productos_descripcion)
            .bind(&collections.productos_json)
            .bind(draft.show_galeria)
            .bind(&draft.galeria_title)
            .bind(&collections.galeria_imagenes)
            .bind(draft.show_contacto)
            .bind(&draft.contacto_title)
            .bind(&draft.contacto_descripcion)
            .bind(&draft.contacto_telefono)
            .bind(&draft.contacto_email)
            .bind(&draft.contacto_direccion)
            .bind(&draft.contacto_whatsapp)
            .bind(draft.show_mapa)
            .bind(&draft.mapa_title)
            .bind(&draft.mapa_lat)
            .bind(&draft.mapa_lng)
            .bind(&draft.fuente_principal)
            .bind(&draft.fondo_color)
            .bind(&draft.fondo_imagen_url)
            .bind(&draft.seo_keywords)
            .bind(&draft.seo_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(landing)
    }

    /// List all landings as summaries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LandingSummary>, StoreError> {
        let summaries = sqlx::query_as::<_, LandingSummary>(
            "SELECT id, nombre_empresa, title, is_active, created_at, updated_at \
             FROM landings ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(summaries)
    }

    /// Fetch a full landing row. Collections stay in their persisted
    /// text form; decoding is the caller's concern.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Landing>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM landings WHERE id = $1");
        let landing = sqlx::query_as::<_, Landing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(landing)
    }

    /// Full replacement of every field except `id` and `created_at`.
    ///
    /// Returns `None` (and writes nothing) if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &LandingDraft,
    ) -> Result<Option<Landing>, StoreError> {
        let draft = draft.clone().with_toggle_defaults();
        let collections = draft.encode_collections()?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE landings SET
                nombre_empresa = $2, correo_contacto = $3, telefono_contacto = $4,
                title = $5, main_color = $6, logo_url = $7, favicon_url = $8,
                banner_url = $9, is_active = $10,
                show_inicio = $11, inicio_title = $12, inicio_subtitle = $13,
                inicio_description = $14, inicio_background_url = $15,
                show_descripcion = $16, descripcion_title = $17, descripcion_text = $18,
                descripcion_image_url = $19,
                show_caracteristicas = $20, caracteristicas_title = $21,
                caracteristicas_text = $22, caracteristicas_list = $23,
                show_horarios = $24, horarios_title = $25, horarios_json = $26,
                show_testimonios = $27, testimonios_title = $28, testimonios_json = $29,
                show_pagos = $30, pagos_title = $31, pagos_descripcion = $32,
                pagos_metodos = $33,
                show_productos = $34, productos_title = $35, productos_descripcion = $36,
                productos_json = $37,
                show_galeria = $38, galeria_title = $39, galeria_imagenes = $40,
                show_contacto = $41, contacto_title = $42, contacto_descripcion = $43,
                contacto_telefono = $44, contacto_email = $45, contacto_direccion = $46,
                contacto_whatsapp = $47,
                show_mapa = $48, mapa_title = $49, mapa_lat = $50, mapa_lng = $51,
                fuente_principal = $52, fondo_color = $53, fondo_imagen_url = $54,
                seo_keywords = $55, seo_description = $56,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let landing = sqlx::query_as::<_, Landing>(&query)
            .bind(id)
            .bind(&draft.nombre_empresa)
            .bind(&draft.correo_contacto)
            .bind(&draft.telefono_contacto)
            .bind(&draft.title)
            .bind(&draft.main_color)
            .bind(&draft.logo_url)
            .bind(&draft.favicon_url)
            .bind(&draft.banner_url)
            .bind(draft.is_active)
            .bind(draft.show_inicio)
            .bind(&draft.inicio_title)
            .bind(&draft.inicio_subtitle)
            .bind(&draft.inicio_description)
            .bind(&draft.inicio_background_url)
            .bind(draft.show_descripcion)
            .bind(&draft.descripcion_title)
            .bind(&draft.descripcion_text)
            .bind(&draft.descripcion_image_url)
            .bind(draft.show_caracteristicas)
            .bind(&draft.caracteristicas_title)
            .bind(&draft.caracteristicas_text)
            .bind(&collections.caracteristicas_list)
            .bind(draft.show_horarios)
            .bind(&draft.horarios_title)
            .bind(&collections.horarios_json)
            .bind(draft.show_testimonios)
            .bind(&draft.testimonios_title)
            .bind(&collections.testimonios_json)
            .bind(draft.show_pagos)
            .bind(&draft.pagos_title)
            .bind(&draft.pagos_descripcion)
            .bind(&collections.pagos_metodos)
            .bind(draft.show_productos)
            .bind(&draft.productos_title)
            .bind(&draft.productos_descripcion)
            .bind(&collections.productos_json)
            .bind(draft.show_galeria)
            .bind(&draft.galeria_title)
            .bind(&collections.galeria_imagenes)
            .bind(draft.show_contacto)
            .bind(&draft.contacto_title)
            .bind(&draft.contacto_descripcion)
            .bind(&draft.contacto_telefono)
            .bind(&draft.contacto_email)
            .bind(&draft.contacto_direccion)
            .bind(&draft.contacto_whatsapp)
            .bind(draft.show_mapa)
            .bind(&draft.mapa_title)
            .bind(&draft.mapa_lat)
            .bind(&draft.mapa_lng)
            .bind(&draft.fuente_principal)
            .bind(&draft.fondo_color)
            .bind(&draft.fondo_imagen_url)
            .bind(&draft.seo_keywords)
            .bind(&draft.seo_description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(landing)
    }

    /// The one partial mutation: flip `is_active`, stamp `updated_at`,
    /// touch nothing else.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Landing>, StoreError> {
        let query = format!(
            "UPDATE landings SET is_active = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let landing = sqlx::query_as::<_, Landing>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await?;
        Ok(landing)
    }

    /// Delete a landing, returning the pre-deletion snapshot.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Landing>, StoreError> {
        let query = format!("DELETE FROM landings WHERE id = $1 RETURNING {COLUMNS}");
        let landing = sqlx::query_as::<_, Landing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(landing)
    }
}
