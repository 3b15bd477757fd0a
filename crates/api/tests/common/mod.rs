//! Shared harness for integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the
//! same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use metaclass_api::auth::jwt::{generate_access_token, JwtConfig};
use metaclass_api::config::ServerConfig;
use metaclass_api::routes;
use metaclass_api::state::AppState;
use metaclass_core::admin::AdminRegistry;
use metaclass_core::stanza::NuovaStanza;
use metaclass_db::models::stanza::Stanza;
use metaclass_db::models::utente::{UpsertUtente, Utente};
use metaclass_db::repositories::{StanzaRepo, UtenteRepo};

/// Signing secret shared by the test config and minted tokens.
pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_allowlist_path: "admins.txt".to_string(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Mint a valid bearer token for the given meta-id.
pub fn mint_token(meta_id: &str) -> String {
    generate_access_token(meta_id, &test_config().jwt).expect("token generation should succeed")
}

/// Build the full application router with all middleware layers, using
/// the given database pool and admin allow-list.
pub fn build_test_app(pool: PgPool, admins: &[&str]) -> Router {
    let config = test_config();
    let admins = AdminRegistry::new(admins.iter().map(|s| s.to_string()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        admins: Arc::new(admins),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Perform a GET request without authentication.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a GET request with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a POST request with a raw text body and a bearer token.
pub async fn post_raw_auth(app: Router, path: &str, token: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Insert a user directly through the repository, returning the row.
pub async fn seed_utente(pool: &PgPool, meta_id: &str) -> Utente {
    UtenteRepo::upsert_login(
        pool,
        &UpsertUtente {
            meta_id: meta_id.to_string(),
            nome: "Mario".to_string(),
            cognome: "Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            eta: Some(25),
            sesso: Some("M".to_string()),
            token_auth: mint_token(meta_id),
            is_admin: false,
        },
    )
    .await
    .expect("seeding a user should succeed")
}

/// Insert a room directly through the repository, returning the row.
pub async fn seed_stanza(pool: &PgPool, codice: &str, max_posti: i32) -> Stanza {
    StanzaRepo::create(
        pool,
        &NuovaStanza {
            nome: "Aula1".to_string(),
            codice_stanza: codice.to_string(),
            descrizione: "Lezione di prova".to_string(),
            tipo_accesso: true,
            max_posti,
        },
    )
    .await
    .expect("seeding a room should succeed")
}
