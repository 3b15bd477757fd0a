//! Handlers for room creation and room access.

use axum::extract::State;
use axum::Json;
use metaclass_core::admission::AccessDecision;
use metaclass_core::error::CoreError;
use metaclass_core::stanza::{valida_stanza, StanzaDraft};
use metaclass_db::repositories::{StanzaRepo, StatoPartecipazioneRepo, UtenteRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::OutcomeResponse;
use crate::state::AppState;

/// Request body for `POST /creaStanza`. Every field arrives as a
/// string and is validated against its literal pattern.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreaStanzaRequest {
    pub nome: String,
    pub codice_stanza: String,
    pub descrizione: String,
    pub tipo_accesso: String,
    pub max_posti: String,
}

/// Request body for `POST /accessoStanza`.
#[derive(Debug, Deserialize)]
pub struct AccessoStanzaRequest {
    pub codice: String,
}

/// POST /creaStanza
///
/// Validates each field in order (first violation wins, nothing is
/// persisted on failure) and creates the room.
pub async fn crea_stanza(
    State(state): State<AppState>,
    Json(input): Json<CreaStanzaRequest>,
) -> AppResult<Json<OutcomeResponse>> {
    let nuova = valida_stanza(&StanzaDraft {
        nome: &input.nome,
        codice_stanza: &input.codice_stanza,
        descrizione: &input.descrizione,
        tipo_accesso: &input.tipo_accesso,
        max_posti: &input.max_posti,
    })
    .map_err(AppError::Core)?;

    let stanza = StanzaRepo::create(&state.pool, &nuova).await?;
    tracing::info!(stanza_id = stanza.id, codice = %stanza.codice_stanza, "Room created");

    Ok(Json(OutcomeResponse::ok("Corretto")))
}

/// POST /accessoStanza
///
/// Admits the authenticated caller into the room with the given access
/// code. A banned caller is refused without any state change; re-joining
/// an already-joined room succeeds idempotently.
pub async fn accesso_stanza(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AccessoStanzaRequest>,
) -> AppResult<Json<OutcomeResponse>> {
    let utente = UtenteRepo::find_by_meta_id(&state.pool, &user.meta_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: user.meta_id.clone(),
        }))?;

    let decision = StatoPartecipazioneRepo::request_access(&state.pool, &input.codice, utente.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stanza",
            key: input.codice.clone(),
        }))?;

    match decision {
        AccessDecision::Banned => Err(AppError::Core(CoreError::Forbidden(
            "Utente bannato".into(),
        ))),
        AccessDecision::Full => Err(AppError::Core(CoreError::Conflict(
            "Numero massimo di posti raggiunto".into(),
        ))),
        AccessDecision::JoinNew | AccessDecision::JoinExisting | AccessDecision::AlreadyPresent => {
            tracing::info!(utente_id = utente.id, codice = %input.codice, ?decision, "Room access granted");
            Ok(Json(OutcomeResponse::ok("Accesso effettuato con successo")))
        }
    }
}
