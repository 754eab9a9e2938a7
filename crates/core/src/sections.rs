//! Static catalog of landing sections and their field shapes.
//!
//! A landing is assembled from a fixed set of toggleable sections. This
//! module is the single source of truth for which fields belong to which
//! section, which of them are collections, and what the creation-time
//! defaults are. The codec and the store consult this catalog instead of
//! hard-coding field lists.

use serde::{Deserialize, Serialize};

/// Brand color applied when a draft omits `main_color`.
pub const DEFAULT_MAIN_COLOR: &str = "#21365E";

/// Font applied when a draft omits `fuente_principal`. The render
/// pipeline skips font loading when the configured font equals this.
pub const DEFAULT_FONT: &str = "Poppins";

/// The fixed section kinds of a landing, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Inicio,
    Descripcion,
    Caracteristicas,
    Horarios,
    Testimonios,
    Pagos,
    Productos,
    Galeria,
    Contacto,
    Mapa,
}

/// Declarative shape of one section: its toggle column, its scalar
/// columns, and (for list sections) the collection column.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub kind: SectionKind,
    /// Column gating visibility of the section in the renderer.
    pub toggle: &'static str,
    /// Whether the toggle is on for a freshly created landing.
    pub toggle_default: bool,
    pub scalar_fields: &'static [&'static str],
    /// Column holding a JSON-array encoding of the section's items.
    pub collection_field: Option<&'static str>,
}

/// The full catalog. Only `show_pagos` defaults to hidden.
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        kind: SectionKind::Inicio,
        toggle: "show_inicio",
        toggle_default: true,
        scalar_fields: &[
            "inicio_title",
            "inicio_subtitle",
            "inicio_description",
            "inicio_background_url",
        ],
        collection_field: None,
    },
    SectionSpec {
        kind: SectionKind::Descripcion,
        toggle: "show_descripcion",
        toggle_default: true,
        scalar_fields: &["descripcion_title", "descripcion_text", "descripcion_image_url"],
        collection_field: None,
    },
    SectionSpec {
        kind: SectionKind::Caracteristicas,
        toggle: "show_caracteristicas",
        toggle_default: true,
        scalar_fields: &["caracteristicas_title", "caracteristicas_text"],
        collection_field: Some("caracteristicas_list"),
    },
    SectionSpec {
        kind: SectionKind::Horarios,
        toggle: "show_horarios",
        toggle_default: true,
        scalar_fields: &["horarios_title"],
        collection_field: Some("horarios_json"),
    },
    SectionSpec {
        kind: SectionKind::Testimonios,
        toggle: "show_testimonios",
        toggle_default: true,
        scalar_fields: &["testimonios_title"],
        collection_field: Some("testimonios_json"),
    },
    SectionSpec {
        kind: SectionKind::Pagos,
        toggle: "show_pagos",
        toggle_default: false,
        scalar_fields: &["pagos_title", "pagos_descripcion"],
        collection_field: Some("pagos_metodos"),
    },
    SectionSpec {
        kind: SectionKind::Productos,
        toggle: "show_productos",
        toggle_default: true,
        scalar_fields: &["productos_title", "productos_descripcion"],
        collection_field: Some("productos_json"),
    },
    SectionSpec {
        kind: SectionKind::Galeria,
        toggle: "show_galeria",
        toggle_default: true,
        scalar_fields: &["galeria_title"],
        collection_field: Some("galeria_imagenes"),
    },
    SectionSpec {
        kind: SectionKind::Contacto,
        toggle: "show_contacto",
        toggle_default: true,
        scalar_fields: &[
            "contacto_title",
            "contacto_descripcion",
            "contacto_telefono",
            "contacto_email",
            "contacto_direccion",
            "contacto_whatsapp",
        ],
        collection_field: None,
    },
    SectionSpec {
        kind: SectionKind::Mapa,
        toggle: "show_mapa",
        toggle_default: true,
        scalar_fields: &["mapa_title", "mapa_lat", "mapa_lng"],
        collection_field: None,
    },
];

/// Look up a section's spec by kind.
pub fn section(kind: SectionKind) -> &'static SectionSpec {
    SECTIONS
        .iter()
        .find(|s| s.kind == kind)
        .expect("every SectionKind has a catalog entry")
}

// ---------------------------------------------------------------------------
// Collection item shapes
// ---------------------------------------------------------------------------
//
// Field names are the wire names used by the admin editor and stored in
// the JSON-array encodings; they must not be renamed.

/// One entry of `caracteristicas_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icono: String,
    pub titulo: String,
    pub descripcion: String,
}

/// One entry of `horarios_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub dia: String,
    pub horas: String,
}

/// One entry of `testimonios_json`. The photo is optional and must stay
/// absent (not empty-string) through an encode/decode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub nombre: String,
    pub cargo: String,
    pub comentario: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
}

/// One entry of `pagos_metodos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub nombre: String,
    pub icono_url: String,
}

/// One entry of `productos_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
    pub imagen_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_sections() {
        assert_eq!(SECTIONS.len(), 10);
        // Exactly six sections carry a collection field.
        let collections: Vec<_> = SECTIONS
            .iter()
            .filter_map(|s| s.collection_field)
            .collect();
        assert_eq!(
            collections,
            vec![
                "caracteristicas_list",
                "horarios_json",
                "testimonios_json",
                "pagos_metodos",
                "productos_json",
                "galeria_imagenes",
            ]
        );
    }

    #[test]
    fn only_pagos_hidden_by_default() {
        for s in SECTIONS {
            let expected = s.kind != SectionKind::Pagos;
            assert_eq!(s.toggle_default, expected, "toggle default for {:?}", s.kind);
        }
    }

    #[test]
    fn testimonial_without_photo_serializes_without_key() {
        let t = Testimonial {
            nombre: "Ana Torres".into(),
            cargo: "Cliente".into(),
            comentario: "Excelente servicio".into(),
            foto_url: None,
        };
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("foto_url"));
    }
}
