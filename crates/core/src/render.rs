//! Read-side reconstruction of a stored landing.
//!
//! Takes the landing record as a JSON document (exactly as the store
//! hands it over, collection fields still in their persisted text form),
//! resolves every collection to its typed item sequence, and derives the
//! ordered list of document side effects the public page needs (title,
//! favicon, meta tags, font loading). The pipeline itself performs no
//! side effect; the presentation layer applies the returned list.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::codec::CollectionField;
use crate::error::CoreError;
use crate::presentation::google_font_url;
use crate::sections::{Feature, PaymentMethod, Product, ScheduleEntry, Testimonial};

/// Outcome of reconstructing a stored landing.
#[derive(Debug)]
pub enum Reconstruction {
    /// The landing exists but `is_active` is false. A business outcome,
    /// not a fault: the renderer shows an "unavailable" page and no
    /// side effect is emitted.
    Unavailable,
    Ready(RenderedLanding),
}

/// A fully decoded, render-ready landing.
#[derive(Debug, Serialize)]
pub struct RenderedLanding {
    /// The landing document with every collection field replaced by its
    /// decoded array form, ready for a rendering client.
    pub landing: Value,
    /// The same six collections, typed.
    #[serde(skip)]
    pub sections: DecodedSections,
    /// Ordered, idempotent side effects to apply to the page.
    pub side_effects: Vec<SideEffect>,
}

/// Typed view of the six collection fields.
#[derive(Debug, Default)]
pub struct DecodedSections {
    pub caracteristicas: Vec<Feature>,
    pub horarios: Vec<ScheduleEntry>,
    pub testimonios: Vec<Testimonial>,
    pub pagos: Vec<PaymentMethod>,
    pub productos: Vec<Product>,
    pub galeria: Vec<String>,
}

/// One document-level side effect of presenting a landing.
///
/// Each is idempotent: setting the same title/meta/favicon twice is a
/// no-op, and a font stylesheet is only requested once per URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffect {
    SetTitle { title: String },
    SetFavicon { href: String },
    SetMetaTag { name: String, content: String },
    LoadFont { family: String, href: String },
}

/// Reconstruct a stored landing document.
///
/// Collection fields are accepted in either representation (persisted
/// text or native array). A single malformed collection degrades to the
/// empty sequence with a warning; it never blanks the rest of the page.
pub fn reconstruct(document: Value) -> Result<Reconstruction, CoreError> {
    let Value::Object(mut doc) = document else {
        return Err(CoreError::Internal(
            "landing record is not a JSON object".to_string(),
        ));
    };

    // Public visibility is gated solely by is_active.
    let is_active = doc
        .get("is_active")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_active {
        return Ok(Reconstruction::Unavailable);
    }

    let sections = DecodedSections {
        caracteristicas: resolve_collection(&mut doc, "caracteristicas_list"),
        horarios: resolve_collection(&mut doc, "horarios_json"),
        testimonios: resolve_collection(&mut doc, "testimonios_json"),
        pagos: resolve_collection(&mut doc, "pagos_metodos"),
        productos: resolve_collection(&mut doc, "productos_json"),
        galeria: resolve_collection(&mut doc, "galeria_imagenes"),
    };

    let side_effects = derive_side_effects(&doc);

    Ok(Reconstruction::Ready(RenderedLanding {
        landing: Value::Object(doc),
        sections,
        side_effects,
    }))
}

/// Decode one collection field in place: the document entry is replaced
/// by the decoded array form, and the typed items are returned.
fn resolve_collection<T>(doc: &mut Map<String, Value>, field: &str) -> Vec<T>
where
    T: Serialize + DeserializeOwned,
{
    let stored = match doc.remove(field) {
        None | Some(Value::Null) => CollectionField::default(),
        Some(value) => match serde_json::from_value::<CollectionField<T>>(value) {
            Ok(cf) => cf,
            Err(err) => {
                tracing::warn!(field, %err, "collection has unexpected shape, degrading to empty");
                CollectionField::default()
            }
        },
    };
    let items = stored.decode_or_empty(field);
    let array = serde_json::to_value(&items).unwrap_or_else(|_| Value::Array(Vec::new()));
    doc.insert(field.to_string(), array);
    items
}

/// Side effects in presentation order, each gated on field presence.
fn derive_side_effects(doc: &Map<String, Value>) -> Vec<SideEffect> {
    let mut effects = Vec::new();

    if let Some(title) = nonempty(doc, "title") {
        effects.push(SideEffect::SetTitle {
            title: title.to_string(),
        });
    }
    if let Some(href) = nonempty(doc, "favicon_url") {
        effects.push(SideEffect::SetFavicon {
            href: href.to_string(),
        });
    }
    if let Some(content) = nonempty(doc, "seo_description") {
        effects.push(SideEffect::SetMetaTag {
            name: "description".to_string(),
            content: content.to_string(),
        });
    }
    if let Some(content) = nonempty(doc, "seo_keywords") {
        effects.push(SideEffect::SetMetaTag {
            name: "keywords".to_string(),
            content: content.to_string(),
        });
    }
    if let Some(family) = nonempty(doc, "fuente_principal") {
        // The default font ships with the page; no request for it.
        if let Some(href) = google_font_url(family) {
            effects.push(SideEffect::LoadFont {
                family: family.to_string(),
                href,
            });
        }
    }

    effects
}

fn nonempty<'a>(doc: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn active_landing() -> Value {
        json!({
            "id": 7,
            "nombre_empresa": "Panadería San José",
            "title": "Panadería San José",
            "is_active": true,
            "favicon_url": "http://localhost:3000/uploads/fav_123.png",
            "seo_description": "Pan artesanal en Lima",
            "seo_keywords": "pan, panadería, lima",
            "fuente_principal": "Open Sans",
            "caracteristicas_list": "[{\"icono\":\"star\",\"titulo\":\"Calidad\",\"descripcion\":\"Insumos frescos\"}]",
            "horarios_json": [{"dia": "Lunes", "horas": "7-20"}],
            "testimonios_json": "[]",
            "pagos_metodos": "[]",
            "productos_json": "[]",
            "galeria_imagenes": "[]",
        })
    }

    #[test]
    fn inactive_landing_is_unavailable_with_no_side_effects() {
        let mut doc = active_landing();
        doc["is_active"] = json!(false);
        assert_matches!(reconstruct(doc).unwrap(), Reconstruction::Unavailable);
    }

    #[test]
    fn decodes_both_text_and_structured_collections() {
        let rendered = match reconstruct(active_landing()).unwrap() {
            Reconstruction::Ready(r) => r,
            other => panic!("expected Ready, got {other:?}"),
        };
        // Text form.
        assert_eq!(rendered.sections.caracteristicas.len(), 1);
        assert_eq!(rendered.sections.caracteristicas[0].titulo, "Calidad");
        // Structured form passes through unchanged.
        assert_eq!(rendered.sections.horarios.len(), 1);
        assert_eq!(rendered.sections.horarios[0].dia, "Lunes");
        // The outgoing document carries arrays, never text.
        assert!(rendered.landing["caracteristicas_list"].is_array());
        assert!(rendered.landing["galeria_imagenes"].is_array());
    }

    #[test]
    fn missing_collection_decodes_to_empty_not_error() {
        let mut doc = active_landing();
        doc.as_object_mut().unwrap().remove("galeria_imagenes");
        let rendered = match reconstruct(doc).unwrap() {
            Reconstruction::Ready(r) => r,
            other => panic!("expected Ready, got {other:?}"),
        };
        assert!(rendered.sections.galeria.is_empty());
        assert_eq!(rendered.landing["galeria_imagenes"], json!([]));
    }

    #[test]
    fn one_malformed_collection_degrades_only_itself() {
        let mut doc = active_landing();
        doc["productos_json"] = json!("{{not an array");
        let rendered = match reconstruct(doc).unwrap() {
            Reconstruction::Ready(r) => r,
            other => panic!("expected Ready, got {other:?}"),
        };
        assert!(rendered.sections.productos.is_empty());
        // The sibling sections survive untouched.
        assert_eq!(rendered.sections.caracteristicas.len(), 1);
        assert_eq!(rendered.sections.horarios.len(), 1);
    }

    #[test]
    fn side_effects_are_ordered_and_gated() {
        let rendered = match reconstruct(active_landing()).unwrap() {
            Reconstruction::Ready(r) => r,
            other => panic!("expected Ready, got {other:?}"),
        };
        assert_eq!(
            rendered.side_effects,
            vec![
                SideEffect::SetTitle {
                    title: "Panadería San José".into()
                },
                SideEffect::SetFavicon {
                    href: "http://localhost:3000/uploads/fav_123.png".into()
                },
                SideEffect::SetMetaTag {
                    name: "description".into(),
                    content: "Pan artesanal en Lima".into()
                },
                SideEffect::SetMetaTag {
                    name: "keywords".into(),
                    content: "pan, panadería, lima".into()
                },
                SideEffect::LoadFont {
                    family: "Open Sans".into(),
                    href: google_font_url("Open Sans").unwrap(),
                },
            ]
        );
    }

    #[test]
    fn default_font_and_absent_fields_emit_nothing() {
        let mut doc = active_landing();
        doc["fuente_principal"] = json!("Poppins");
        doc["favicon_url"] = json!("");
        doc.as_object_mut().unwrap().remove("seo_description");
        doc.as_object_mut().unwrap().remove("seo_keywords");
        let rendered = match reconstruct(doc).unwrap() {
            Reconstruction::Ready(r) => r,
            other => panic!("expected Ready, got {other:?}"),
        };
        assert_eq!(
            rendered.side_effects,
            vec![SideEffect::SetTitle {
                title: "Panadería San José".into()
            }]
        );
    }
}
