//! Landing entity model and DTOs.
//!
//! A landing is one wide row: per-section visibility toggles, per-section
//! scalar content, and six collection columns holding the JSON-array text
//! encoding of their items (see `landex_core::codec`). The entity keeps
//! collections in the persisted text form; decoding is the render
//! pipeline's job, which keeps this layer codec-agnostic on reads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use landex_core::codec::CollectionField;
use landex_core::error::CoreError;
use landex_core::sections::{
    Feature, PaymentMethod, Product, ScheduleEntry, Testimonial, DEFAULT_FONT, DEFAULT_MAIN_COLOR,
};
use landex_core::types::Timestamp;

/// A landing row from the `landings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Landing {
    pub id: landex_core::types::DbId,

    // Identity / branding
    pub nombre_empresa: String,
    pub correo_contacto: Option<String>,
    pub telefono_contacto: Option<String>,
    pub title: Option<String>,
    pub main_color: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub banner_url: Option<String>,
    pub is_active: bool,

    // Hero
    pub show_inicio: bool,
    pub inicio_title: Option<String>,
    pub inicio_subtitle: Option<String>,
    pub inicio_description: Option<String>,
    pub inicio_background_url: Option<String>,

    // Description
    pub show_descripcion: bool,
    pub descripcion_title: Option<String>,
    pub descripcion_text: Option<String>,
    pub descripcion_image_url: Option<String>,

    // Features
    pub show_caracteristicas: bool,
    pub caracteristicas_title: Option<String>,
    pub caracteristicas_text: Option<String>,
    pub caracteristicas_list: String,

    // Schedule
    pub show_horarios: bool,
    pub horarios_title: Option<String>,
    pub horarios_json: String,

    // Testimonials
    pub show_testimonios: bool,
    pub testimonios_title: Option<String>,
    pub testimonios_json: String,

    // Payment methods
    pub show_pagos: bool,
    pub pagos_title: Option<String>,
    pub pagos_descripcion: Option<String>,
    pub pagos_metodos: String,

    // Products
    pub show_productos: bool,
    pub productos_title: Option<String>,
    pub productos_descripcion: Option<String>,
    pub productos_json: String,

    // Gallery
    pub show_galeria: bool,
    pub galeria_title: Option<String>,
    pub galeria_imagenes: String,

    // Contact
    pub show_contacto: bool,
    pub contacto_title: Option<String>,
    pub contacto_descripcion: Option<String>,
    pub contacto_telefono: Option<String>,
    pub contacto_email: Option<String>,
    pub contacto_direccion: Option<String>,
    pub contacto_whatsapp: Option<String>,

    // Map
    pub show_mapa: bool,
    pub mapa_title: Option<String>,
    pub mapa_lat: Option<String>,
    pub mapa_lng: Option<String>,

    // Presentation / SEO
    pub fuente_principal: Option<String>,
    pub fondo_color: Option<String>,
    pub fondo_imagen_url: Option<String>,
    pub seo_keywords: Option<String>,
    pub seo_description: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary projection for the landing list (no section content).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LandingSummary {
    pub id: landex_core::types::DbId,
    pub nombre_empresa: String,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full-record write DTO, used by both create and update (updates are
/// full replacements, not patches). Collection fields accept either a
/// native array or pre-encoded text and default to the empty sequence.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LandingDraft {
    #[validate(length(min = 1, message = "nombre_empresa is required"))]
    pub nombre_empresa: String,
    pub correo_contacto: Option<String>,
    pub telefono_contacto: Option<String>,
    pub title: Option<String>,
    pub main_color: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub banner_url: Option<String>,
    pub is_active: Option<bool>,

    pub show_inicio: Option<bool>,
    pub inicio_title: Option<String>,
    pub inicio_subtitle: Option<String>,
    pub inicio_description: Option<String>,
    pub inicio_background_url: Option<String>,

    pub show_descripcion: Option<bool>,
    pub descripcion_title: Option<String>,
    pub descripcion_text: Option<String>,
    pub descripcion_image_url: Option<String>,

    pub show_caracteristicas: Option<bool>,
    pub caracteristicas_title: Option<String>,
    pub caracteristicas_text: Option<String>,
    #[serde(default)]
    pub caracteristicas_list: CollectionField<Feature>,

    pub show_horarios: Option<bool>,
    pub horarios_title: Option<String>,
    #[serde(default)]
    pub horarios_json: CollectionField<ScheduleEntry>,

    pub show_testimonios: Option<bool>,
    pub testimonios_title: Option<String>,
    #[serde(default)]
    pub testimonios_json: CollectionField<Testimonial>,

    pub show_pagos: Option<bool>,
    pub pagos_title: Option<String>,
    pub pagos_descripcion: Option<String>,
    #[serde(default)]
    pub pagos_metodos: CollectionField<PaymentMethod>,

    pub show_productos: Option<bool>,
    pub productos_title: Option<String>,
    pub productos_descripcion: Option<String>,
    #[serde(default)]
    pub productos_json: CollectionField<Product>,

    pub show_galeria: Option<bool>,
    pub galeria_title: Option<String>,
    #[serde(default)]
    pub galeria_imagenes: CollectionField<String>,

    pub show_contacto: Option<bool>,
    pub contacto_title: Option<String>,
    pub contacto_descripcion: Option<String>,
    pub contacto_telefono: Option<String>,
    pub contacto_email: Option<String>,
    pub contacto_direccion: Option<String>,
    pub contacto_whatsapp: Option<String>,

    pub show_mapa: Option<bool>,
    pub mapa_title: Option<String>,
    pub mapa_lat: Option<String>,
    pub mapa_lng: Option<String>,

    pub fuente_principal: Option<String>,
    pub fondo_color: Option<String>,
    pub fondo_imagen_url: Option<String>,
    pub seo_keywords: Option<String>,
    pub seo_description: Option<String>,
}

/// The six collection columns in their persisted text encoding.
#[derive(Debug, Clone)]
pub struct EncodedCollections {
    pub caracteristicas_list: String,
    pub horarios_json: String,
    pub testimonios_json: String,
    pub pagos_metodos: String,
    pub productos_json: String,
    pub galeria_imagenes: String,
}

impl LandingDraft {
    /// Apply the creation-time default policy: brand color and font when
    /// blank, activation and every section toggle when omitted. Explicit
    /// values are never overwritten. Applies on create only.
    pub fn with_creation_defaults(mut self) -> Self {
        fill_if_blank(&mut self.main_color, DEFAULT_MAIN_COLOR);
        fill_if_blank(&mut self.fuente_principal, DEFAULT_FONT);
        self.with_toggle_defaults()
    }

    /// Resolve omitted visibility toggles to their catalog defaults
    /// (everything visible except payments). Used on both create and
    /// update, where a full-record client normally sends all of them.
    pub fn with_toggle_defaults(mut self) -> Self {
        self.is_active.get_or_insert(true);
        self.show_inicio.get_or_insert(true);
        self.show_descripcion.get_or_insert(true);
        self.show_caracteristicas.get_or_insert(true);
        self.show_horarios.get_or_insert(true);
        self.show_testimonios.get_or_insert(true);
        self.show_pagos.get_or_insert(false);
        self.show_productos.get_or_insert(true);
        self.show_galeria.get_or_insert(true);
        self.show_contacto.get_or_insert(true);
        self.show_mapa.get_or_insert(true);
        self
    }

    /// Encode all six collection fields to their persisted text form.
    ///
    /// Fails (rather than persisting garbage) if any submitted collection
    /// is not a valid sequence of its item type.
    pub fn encode_collections(&self) -> Result<EncodedCollections, CoreError> {
        Ok(EncodedCollections {
            caracteristicas_list: self.caracteristicas_list.encode("caracteristicas_list")?,
            horarios_json: self.horarios_json.encode("horarios_json")?,
            testimonios_json: self.testimonios_json.encode("testimonios_json")?,
            pagos_metodos: self.pagos_metodos.encode("pagos_metodos")?,
            productos_json: self.productos_json.encode("productos_json")?,
            galeria_imagenes: self.galeria_imagenes.encode("galeria_imagenes")?,
        })
    }
}

fn fill_if_blank(slot: &mut Option<String>, default: &str) {
    if slot.as_deref().is_none_or(|s| s.is_empty()) {
        *slot = Some(default.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_draft() -> LandingDraft {
        serde_json::from_value(serde_json::json!({
            "nombre_empresa": "Panadería San José"
        }))
        .unwrap()
    }

    #[test]
    fn creation_defaults_fill_blanks_only() {
        let draft = minimal_draft().with_creation_defaults();
        assert_eq!(draft.main_color.as_deref(), Some("#21365E"));
        assert_eq!(draft.fuente_principal.as_deref(), Some("Poppins"));
        assert_eq!(draft.is_active, Some(true));
        assert_eq!(draft.show_pagos, Some(false));
        assert_eq!(draft.show_galeria, Some(true));

        let mut explicit = minimal_draft();
        explicit.main_color = Some("#FF0000".into());
        explicit.show_pagos = Some(true);
        let explicit = explicit.with_creation_defaults();
        assert_eq!(explicit.main_color.as_deref(), Some("#FF0000"));
        assert_eq!(explicit.show_pagos, Some(true));
    }

    #[test]
    fn empty_main_color_counts_as_absent() {
        let mut draft = minimal_draft();
        draft.main_color = Some(String::new());
        let draft = draft.with_creation_defaults();
        assert_eq!(draft.main_color.as_deref(), Some("#21365E"));
    }

    #[test]
    fn omitted_collections_encode_as_empty_sequences() {
        let encoded = minimal_draft().encode_collections().unwrap();
        assert_eq!(encoded.caracteristicas_list, "[]");
        assert_eq!(encoded.galeria_imagenes, "[]");
    }

    #[test]
    fn structured_collections_encode_to_text() {
        let draft: LandingDraft = serde_json::from_value(serde_json::json!({
            "nombre_empresa": "Panadería San José",
            "testimonios_json": [
                {"nombre": "Ana", "cargo": "Cliente", "comentario": "Muy bueno"}
            ],
            "galeria_imagenes": ["http://localhost:3000/uploads/a_1.jpg"]
        }))
        .unwrap();
        let encoded = draft.encode_collections().unwrap();
        assert!(encoded.testimonios_json.contains("\"nombre\":\"Ana\""));
        // Absent optional field is not coerced into the encoding.
        assert!(!encoded.testimonios_json.contains("foto_url"));
        assert_eq!(
            encoded.galeria_imagenes,
            "[\"http://localhost:3000/uploads/a_1.jpg\"]"
        );
    }

    #[test]
    fn malformed_submitted_collection_is_rejected() {
        let draft: LandingDraft = serde_json::from_value(serde_json::json!({
            "nombre_empresa": "Panadería San José",
            "horarios_json": "{broken"
        }))
        .unwrap();
        assert!(draft.encode_collections().is_err());
    }

    #[test]
    fn draft_requires_nombre_empresa() {
        use validator::Validate;
        let mut draft = minimal_draft();
        draft.nombre_empresa = String::new();
        assert!(draft.validate().is_err());
    }
}
