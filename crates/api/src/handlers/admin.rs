//! Handlers for the `/admin` resource.
//!
//! Every operation is gated by [`RequireAdmin`]: token first, then
//! allow-list membership, then (for mutations) payload validation. The
//! first failing check rejects the request; payload violations are
//! reported all at once, joined into a single 403 message.

use axum::extract::{Path, State};
use axum::Json;
use metaclass_core::admission::CancelBanDecision;
use metaclass_core::content::{joined_messages, CategoriaInput, ScenarioInput};
use metaclass_core::error::CoreError;
use metaclass_core::types::DbId;
use metaclass_db::models::stanza::Stanza;
use metaclass_db::repositories::{
    CategoriaRepo, ScenarioRepo, StanzaRepo, StatoPartecipazioneRepo, UtenteRepo,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::{OutcomeResponse, ValueResponse};
use crate::state::AppState;

/// POST /admin/annullaBan/{idstanza}
///
/// Reverts a ban. The body is the raw meta-id of the banned user. The
/// participation row must exist and be banned; reverting a ban that is
/// not in place is a state conflict, answered on the legacy contract
/// with a 500 "Utente non bannato".
pub async fn annulla_ban(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(idstanza): Path<DbId>,
    body: String,
) -> AppResult<Json<OutcomeResponse>> {
    let meta_id = body.trim();

    let utente = UtenteRepo::find_by_meta_id(&state.pool, meta_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: meta_id.to_string(),
        }))?;

    let stanza = StanzaRepo::find_by_id(&state.pool, idstanza)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stanza",
            key: idstanza.to_string(),
        }))?;

    let decision =
        StatoPartecipazioneRepo::annulla_ban(&state.pool, utente.id, stanza.id).await?;

    match decision {
        CancelBanDecision::Missing => Err(AppError::Core(CoreError::NotFound {
            entity: "StatoPartecipazione",
            key: format!("{}/{}", utente.id, stanza.id),
        })),
        CancelBanDecision::NotBanned => Err(AppError::Core(CoreError::Conflict(
            "Utente non bannato".into(),
        ))),
        CancelBanDecision::Revoke => {
            tracing::info!(utente_id = utente.id, stanza_id = stanza.id, "Ban revoked");
            Ok(Json(OutcomeResponse::ok("Ban annullato correttamente")))
        }
    }
}

/// POST /admin/updateCategoria
///
/// Creates or updates a Categoria.
pub async fn update_categoria(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CategoriaInput>,
) -> AppResult<Json<OutcomeResponse>> {
    if let Err(errors) = input.validate() {
        return Err(AppError::Core(CoreError::Forbidden(joined_messages(
            &errors,
        ))));
    }

    let updated = CategoriaRepo::upsert(&state.pool, &input).await?;
    if updated.is_none() {
        return Err(AppError::Core(CoreError::Internal(
            "Errore durante l'inserimento della categoria".into(),
        )));
    }

    Ok(Json(OutcomeResponse::ok("categoria creata con successo")))
}

/// POST /admin/updateScenario
///
/// Creates or updates a Scenario. A dangling Categoria reference fails
/// in the store and is surfaced as a generic 500.
pub async fn update_scenario(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<ScenarioInput>,
) -> AppResult<Json<OutcomeResponse>> {
    if let Err(errors) = input.validate() {
        return Err(AppError::Core(CoreError::Forbidden(joined_messages(
            &errors,
        ))));
    }

    let updated = ScenarioRepo::upsert(&state.pool, &input).await?;
    if updated.is_none() {
        return Err(AppError::Core(CoreError::Internal(
            "Errore durante l'inserimento dello scenario".into(),
        )));
    }

    Ok(Json(OutcomeResponse::ok("scenario creato con successo")))
}

/// GET /admin/allStanze
///
/// Lists every room. Three distinct non-error outcomes: a store failure
/// is a 500, an empty store answers 200 with an explicit "no rooms"
/// message, and a non-empty store answers 200 with the list.
pub async fn all_stanze(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ValueResponse<Vec<Stanza>>>> {
    let stanze = StanzaRepo::list_all(&state.pool).await?;

    let message = if stanze.is_empty() {
        "nessuna stanza creata"
    } else {
        "operazione effettuata con successo"
    };

    Ok(Json(ValueResponse::new(stanze, message)))
}
