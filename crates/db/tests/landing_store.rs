//! Integration tests for the repository layer against a real database:
//! - Creation defaults and full-record round trips
//! - Status toggling touching nothing but `is_active` / `updated_at`
//! - Delete semantics for present and missing rows
//! - Admin login reconciliation by either candidate key

use serde_json::{json, Value};
use sqlx::PgPool;

use landex_core::sections::Testimonial;
use landex_db::models::admin::GoogleProfile;
use landex_db::models::landing::LandingDraft;
use landex_db::repositories::{AdminRepo, LandingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft_from(value: Value) -> LandingDraft {
    serde_json::from_value(value).expect("draft should deserialize")
}

fn minimal_draft(name: &str) -> LandingDraft {
    draft_from(json!({ "nombre_empresa": name }))
}

fn google_profile(google_id: &str, email: &str) -> GoogleProfile {
    GoogleProfile {
        google_id: google_id.to_string(),
        email: email.to_string(),
        name: Some("Admin Uno".to_string()),
        picture: None,
    }
}

/// Serialize a landing and strip the fields a status flip is allowed to
/// change, so the rest can be compared wholesale.
fn without_status_fields(landing: &landex_db::models::landing::Landing) -> Value {
    let mut doc = serde_json::to_value(landing).expect("landing should serialize");
    let obj = doc.as_object_mut().unwrap();
    obj.remove("is_active");
    obj.remove("updated_at");
    doc
}

async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM landings")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: create applies defaults only where the draft is silent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_defaults_to_omitted_fields(pool: PgPool) {
    let landing = LandingRepo::create(&pool, &minimal_draft("Panadería San José"))
        .await
        .unwrap();

    assert_eq!(landing.main_color.as_deref(), Some("#21365E"));
    assert_eq!(landing.fuente_principal.as_deref(), Some("Poppins"));
    assert!(landing.is_active);
    assert!(landing.show_inicio);
    assert!(!landing.show_pagos, "payments section hidden by default");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_preserves_explicit_values(pool: PgPool) {
    let draft = draft_from(json!({
        "nombre_empresa": "Ferretería El Tornillo",
        "main_color": "#FF0000",
        "show_pagos": true,
        "is_active": false,
    }));
    let landing = LandingRepo::create(&pool, &draft).await.unwrap();

    assert_eq!(landing.main_color.as_deref(), Some("#FF0000"));
    assert!(landing.show_pagos);
    assert!(!landing.is_active);
}

// ---------------------------------------------------------------------------
// Test: an empty gallery persists and reads back as the empty sequence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_gallery_round_trips_as_empty_sequence(pool: PgPool) {
    let draft = draft_from(json!({
        "nombre_empresa": "Estudio Foto Luz",
        "galeria_imagenes": [],
    }));
    let created = LandingRepo::create(&pool, &draft).await.unwrap();

    let fetched = LandingRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created landing should be fetchable");
    assert_eq!(fetched.galeria_imagenes, "[]");
}

// ---------------------------------------------------------------------------
// Test: testimonial with no photo keeps the field absent through the store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn testimonial_without_photo_stays_absent(pool: PgPool) {
    let draft = draft_from(json!({
        "nombre_empresa": "Clínica Dental Sonrisa",
        "testimonios_json": [
            {
                "nombre": "María López",
                "cargo": "Paciente",
                "comentario": "Excelente atención",
                "foto_url": "http://localhost:3000/uploads/maria_1.jpg"
            },
            {
                "nombre": "Luis Paz",
                "cargo": "Paciente",
                "comentario": "Muy recomendable"
            }
        ],
    }));
    let created = LandingRepo::create(&pool, &draft).await.unwrap();

    let fetched = LandingRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    let testimonials: Vec<Testimonial> = serde_json::from_str(&fetched.testimonios_json).unwrap();
    assert_eq!(testimonials.len(), 2);
    assert_eq!(
        testimonials[0].foto_url.as_deref(),
        Some("http://localhost:3000/uploads/maria_1.jpg")
    );
    assert_eq!(testimonials[1].nombre, "Luis Paz");
    assert_eq!(testimonials[1].foto_url, None, "absent photo stays absent");
}

// ---------------------------------------------------------------------------
// Test: set_active changes only is_active and updated_at
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_active_touches_only_status_fields(pool: PgPool) {
    let draft = draft_from(json!({
        "nombre_empresa": "Gimnasio Fuerza",
        "title": "Gimnasio Fuerza",
        "contacto_whatsapp": "987654321",
        "horarios_json": [{"dia": "Lunes", "horas": "6-22"}],
    }));
    let created = LandingRepo::create(&pool, &draft).await.unwrap();
    let before = without_status_fields(&created);

    let deactivated = LandingRepo::set_active(&pool, created.id, false)
        .await
        .unwrap()
        .expect("existing landing should be updatable");
    assert!(!deactivated.is_active);
    assert!(deactivated.updated_at >= created.updated_at);
    assert_eq!(without_status_fields(&deactivated), before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_active_round_trip_leaves_record_unchanged(pool: PgPool) {
    let created = LandingRepo::create(&pool, &minimal_draft("Barbería Clásica"))
        .await
        .unwrap();
    let before = without_status_fields(&created);

    LandingRepo::set_active(&pool, created.id, false)
        .await
        .unwrap()
        .unwrap();
    let reactivated = LandingRepo::set_active(&pool, created.id, true)
        .await
        .unwrap()
        .unwrap();

    assert!(reactivated.is_active);
    assert_eq!(
        without_status_fields(&reactivated),
        before,
        "two status flips must not disturb any other field"
    );
}

// ---------------------------------------------------------------------------
// Test: delete of a missing id is None and removes nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_id_removes_nothing(pool: PgPool) {
    LandingRepo::create(&pool, &minimal_draft("Florería Rosa"))
        .await
        .unwrap();
    let count_before = row_count(&pool).await;

    let deleted = LandingRepo::delete(&pool, 999_999).await.unwrap();
    assert!(deleted.is_none());
    assert_eq!(row_count(&pool).await, count_before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_the_removed_row(pool: PgPool) {
    let created = LandingRepo::create(&pool, &minimal_draft("Cafetería Andina"))
        .await
        .unwrap();

    let deleted = LandingRepo::delete(&pool, created.id)
        .await
        .unwrap()
        .expect("existing landing should be deletable");
    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.nombre_empresa, "Cafetería Andina");
    assert!(LandingRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: update is a full replacement and misses cleanly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_the_full_record(pool: PgPool) {
    let created = LandingRepo::create(&pool, &minimal_draft("Taller Motor"))
        .await
        .unwrap();

    let replacement = draft_from(json!({
        "nombre_empresa": "Taller Motor y Frenos",
        "title": "Taller Motor y Frenos",
        "productos_json": [
            {"nombre": "Cambio de aceite", "descripcion": "Sintético",
             "precio": "S/ 120", "imagen_url": "http://localhost:3000/uploads/aceite_1.jpg"}
        ],
    }));
    let updated = LandingRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.nombre_empresa, "Taller Motor y Frenos");
    assert!(updated.productos_json.contains("Cambio de aceite"));
    assert_eq!(updated.created_at, created.created_at);
    // Omitted toggles resolve to catalog defaults, not NULL.
    assert!(updated.show_galeria);
    assert!(!updated.show_pagos);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_id_is_none(pool: PgPool) {
    let updated = LandingRepo::update(&pool, 999_999, &minimal_draft("Nadie"))
        .await
        .unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Test: list is the summary projection, newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_summaries_newest_first(pool: PgPool) {
    let first = LandingRepo::create(&pool, &minimal_draft("Primera"))
        .await
        .unwrap();
    let second = LandingRepo::create(&pool, &minimal_draft("Segunda"))
        .await
        .unwrap();

    let summaries = LandingRepo::list(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);
    let position = |id| summaries.iter().position(|s| s.id == id).unwrap();
    assert!(
        position(second.id) <= position(first.id),
        "newer landing should sort first"
    );
}

// ---------------------------------------------------------------------------
// Test: admin reconciliation matches on either key
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reconcile_google_creates_then_matches_by_google_id(pool: PgPool) {
    let profile = google_profile("g-100", "uno@example.com");
    let (admin, created) = AdminRepo::reconcile_google(&pool, &profile).await.unwrap();
    assert!(created);
    assert_eq!(admin.role, "admin");
    assert!(admin.is_active());

    let mut refreshed = google_profile("g-100", "uno@example.com");
    refreshed.name = Some("Admin Renombrado".to_string());
    let (again, created_again) = AdminRepo::reconcile_google(&pool, &refreshed)
        .await
        .unwrap();
    assert!(!created_again);
    assert_eq!(again.id, admin.id);
    assert_eq!(again.name.as_deref(), Some("Admin Renombrado"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reconcile_google_falls_back_to_email(pool: PgPool) {
    let (admin, _) = AdminRepo::reconcile_google(&pool, &google_profile("g-200", "dos@example.com"))
        .await
        .unwrap();

    // Same email under a different external id still resolves to the
    // existing account instead of inserting a duplicate.
    let (matched, created) =
        AdminRepo::reconcile_google(&pool, &google_profile("g-201", "dos@example.com"))
            .await
            .unwrap();
    assert!(!created);
    assert_eq!(matched.id, admin.id);
}
