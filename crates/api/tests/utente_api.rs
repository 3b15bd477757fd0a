//! Integration tests for login, logout, profile edits and meeting
//! feedback.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, mint_token, post_json_auth, seed_stanza, seed_utente,
};
use metaclass_db::models::utente::Utente;
use metaclass_db::repositories::UtenteRepo;
use serde_json::json;
use sqlx::PgPool;

fn login_body() -> serde_json::Value {
    json!({
        "nome": "Mario",
        "cognome": "Rossi",
        "email": "mario.rossi@example.com",
        "eta": 25,
        "sesso": "M"
    })
}

// ---------------------------------------------------------------------------
// POST /login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_registers_new_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), &[]);
    let token = mint_token("meta-1");

    let response = post_json_auth(app, "/login", &token, login_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login effettuato con successo");

    let utente = UtenteRepo::find_by_meta_id(&pool, "meta-1")
        .await
        .unwrap()
        .expect("user must be registered");
    assert_eq!(utente.nome, "Mario");
    assert_eq!(utente.token_auth, token);
    assert!(!utente.is_admin);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn relogin_updates_stored_token_in_place(pool: PgPool) {
    let first_token = mint_token("meta-1");
    let second_token = mint_token("meta-1");

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(app, "/login", &first_token, login_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(app, "/login", &second_token, login_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Still one row, carrying the latest token.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM utenti")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let utente = UtenteRepo::find_by_meta_id(&pool, "meta-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(utente.token_auth, second_token);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_derives_admin_flag_from_allowlist(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), &["meta-admin"]);

    let response = post_json_auth(app, "/login", &mint_token("meta-admin"), login_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let utente = UtenteRepo::find_by_meta_id(&pool, "meta-admin")
        .await
        .unwrap()
        .unwrap();
    assert!(utente.is_admin);
}

// ---------------------------------------------------------------------------
// POST /logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_resets_stored_token(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(app, "/logout", &mint_token(&utente.meta_id), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let utente = UtenteRepo::find_by_meta_id(&pool, "meta-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(utente.token_auth, Utente::DEFAULT_TOKEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_of_unknown_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool, &[]);

    let response = post_json_auth(app, "/logout", &mint_token("meta-ghost"), json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// POST /modifyUserData and GET /visualizzaUtente
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn modifica_dati_updates_profile_fields(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;
    let token = mint_token(&utente.meta_id);

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(
        app,
        "/modifyUserData",
        &token,
        json!({ "nome": "Luigi", "eta": 30 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let utente = UtenteRepo::find_by_meta_id(&pool, "meta-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(utente.nome, "Luigi");
    assert_eq!(utente.eta, Some(30));
    // Untouched fields keep their values.
    assert_eq!(utente.cognome, "Rossi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn modifica_dati_of_unregistered_user_is_403(pool: PgPool) {
    let app = common::build_test_app(pool, &[]);

    let response = post_json_auth(
        app,
        "/modifyUserData",
        &mint_token("meta-ghost"),
        json!({ "nome": "Luigi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Utente non registrato nei sistemi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn visualizza_utente_never_exposes_token(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;

    let app = common::build_test_app(pool, &[]);
    let response = get_auth(app, "/visualizzaUtente", &mint_token(&utente.meta_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["value"]["metaId"], "meta-1");
    assert_eq!(body["value"]["nome"], "Mario");
    assert!(body["value"].get("tokenAuth").is_none());
}

// ---------------------------------------------------------------------------
// GET /visualizzaStanze
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn visualizza_stanze_lists_joined_rooms(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;
    seed_stanza(&pool, "123456", 30).await;
    seed_stanza(&pool, "654321", 30).await;
    let token = mint_token(&utente.meta_id);

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(app, "/accessoStanza", &token, json!({ "codice": "123456" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool, &[]);
    let response = get_auth(app, "/visualizzaStanze", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let stanze = body["value"].as_array().unwrap();
    assert_eq!(stanze.len(), 1);
    assert_eq!(stanze[0]["codiceStanza"], "123456");
}

// ---------------------------------------------------------------------------
// POST /compilaQuestionario/{idmeeting}
// ---------------------------------------------------------------------------

async fn seed_meeting(pool: &PgPool, stanza_id: i64) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO meetings (nome, stanza_id, inizio, fine)
         VALUES ('Lezione', $1, now(), now() + interval '1 hour')
         RETURNING id",
    )
    .bind(stanza_id)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn questionario_records_feedback(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;
    let stanza = seed_stanza(&pool, "123456", 30).await;
    let meeting_id = seed_meeting(&pool, stanza.id).await;

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(
        app,
        &format!("/compilaQuestionario/{meeting_id}"),
        &mint_token(&utente.meta_id),
        json!({ "valutazione": 4, "commento": "Ottima lezione" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Questionario compilato con successo");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_questionario_is_refused(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;
    let stanza = seed_stanza(&pool, "123456", 30).await;
    let meeting_id = seed_meeting(&pool, stanza.id).await;
    let token = mint_token(&utente.meta_id);

    let app = common::build_test_app(pool.clone(), &[]);
    let response = post_json_auth(
        app,
        &format!("/compilaQuestionario/{meeting_id}"),
        &token,
        json!({ "valutazione": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool, &[]);
    let response = post_json_auth(
        app,
        &format!("/compilaQuestionario/{meeting_id}"),
        &token,
        json!({ "valutazione": 2 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Questionario già compilato");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn questionario_rejects_out_of_range_rating(pool: PgPool) {
    let utente = seed_utente(&pool, "meta-1").await;
    let stanza = seed_stanza(&pool, "123456", 30).await;
    let meeting_id = seed_meeting(&pool, stanza.id).await;

    let app = common::build_test_app(pool, &[]);
    let response = post_json_auth(
        app,
        &format!("/compilaQuestionario/{meeting_id}"),
        &mint_token(&utente.meta_id),
        json!({ "valutazione": 6 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
