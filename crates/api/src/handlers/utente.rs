//! Handlers for user login, logout and profile management.
//!
//! Identity always comes from the validated bearer token, never from
//! the request body. Login is an upsert keyed by meta-id: an existing
//! user gets their stored auth token (and admin flag) refreshed in
//! place, a new user is registered.

use axum::extract::State;
use axum::Json;
use metaclass_core::error::CoreError;
use metaclass_db::models::stanza::Stanza;
use metaclass_db::models::utente::{UpdateUtente, UpsertUtente, Utente};
use metaclass_db::repositories::{StanzaRepo, UtenteRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{OutcomeResponse, ValueResponse};
use crate::state::AppState;

/// Request body for `POST /login`: the caller's display attributes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub eta: Option<i32>,
    pub sesso: Option<String>,
}

/// POST /login
///
/// Registers the caller on first login; on re-login refreshes the
/// stored auth token. The admin flag is derived from allow-list
/// membership at every login.
pub async fn login(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<OutcomeResponse>> {
    let upsert = UpsertUtente {
        meta_id: user.meta_id.clone(),
        nome: input.nome,
        cognome: input.cognome,
        email: input.email,
        eta: input.eta,
        sesso: input.sesso,
        token_auth: user.token.clone(),
        is_admin: state.admins.is_admin(&user.meta_id),
    };

    let utente = UtenteRepo::upsert_login(&state.pool, &upsert).await?;
    tracing::info!(utente_id = utente.id, meta_id = %utente.meta_id, "User logged in");

    Ok(Json(OutcomeResponse::ok("Login effettuato con successo")))
}

/// POST /logout
///
/// Resets the stored auth token to the sentinel value.
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<OutcomeResponse>> {
    let updated =
        UtenteRepo::set_token(&state.pool, &user.meta_id, Utente::DEFAULT_TOKEN).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: user.meta_id.clone(),
        }));
    }

    Ok(Json(OutcomeResponse::ok("Logout effettuato con successo")))
}

/// POST /modifyUserData
///
/// Updates the caller's display attributes. Only registered users can
/// edit their profile.
pub async fn modifica_dati_utente(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateUtente>,
) -> AppResult<Json<OutcomeResponse>> {
    let updated = UtenteRepo::update_profile(&state.pool, &user.meta_id, &input).await?;
    if updated.is_none() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Utente non registrato nei sistemi".into(),
        )));
    }

    Ok(Json(OutcomeResponse::ok(
        "Dati utente aggiornati con successo",
    )))
}

/// GET /visualizzaUtente
///
/// Returns the caller's profile (the stored auth token is never
/// serialized).
pub async fn visualizza_utente(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ValueResponse<Utente>>> {
    let utente = UtenteRepo::find_by_meta_id(&state.pool, &user.meta_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: user.meta_id.clone(),
        }))?;

    Ok(Json(ValueResponse::new(
        utente,
        "operazione effettuata con successo",
    )))
}

/// GET /visualizzaStanze
///
/// Returns the rooms the caller participates in.
pub async fn visualizza_stanze(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ValueResponse<Vec<Stanza>>>> {
    let utente = UtenteRepo::find_by_meta_id(&state.pool, &user.meta_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: user.meta_id.clone(),
        }))?;

    let stanze = StanzaRepo::list_by_utente(&state.pool, utente.id).await?;

    Ok(Json(ValueResponse::new(
        stanze,
        "operazione effettuata con successo",
    )))
}
