//! Handlers for meeting feedback.

use axum::extract::{Path, State};
use axum::Json;
use metaclass_core::error::CoreError;
use metaclass_core::feedback::valida_questionario;
use metaclass_core::types::DbId;
use metaclass_db::repositories::{FeedbackMeetingRepo, MeetingRepo, UtenteRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::OutcomeResponse;
use crate::state::AppState;

/// Request body for `POST /compilaQuestionario/{idmeeting}`.
#[derive(Debug, Deserialize)]
pub struct CompilaQuestionarioRequest {
    pub valutazione: i32,
    pub commento: Option<String>,
}

/// POST /compilaQuestionario/{idmeeting}
///
/// Records the caller's questionnaire for a meeting. One submission per
/// user per meeting, enforced by lookup before insert.
pub async fn compila_questionario(
    State(state): State<AppState>,
    user: AuthUser,
    Path(idmeeting): Path<DbId>,
    Json(input): Json<CompilaQuestionarioRequest>,
) -> AppResult<Json<OutcomeResponse>> {
    valida_questionario(input.valutazione, input.commento.as_deref()).map_err(AppError::Core)?;

    let utente = UtenteRepo::find_by_meta_id(&state.pool, &user.meta_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utente",
            key: user.meta_id.clone(),
        }))?;

    let meeting = MeetingRepo::find_by_id(&state.pool, idmeeting)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            key: idmeeting.to_string(),
        }))?;

    let existing =
        FeedbackMeetingRepo::find_by_utente_and_meeting(&state.pool, utente.id, meeting.id)
            .await?;
    if existing.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Questionario già compilato".into(),
        )));
    }

    FeedbackMeetingRepo::create(
        &state.pool,
        utente.id,
        meeting.id,
        input.valutazione,
        input.commento.as_deref(),
    )
    .await?;

    Ok(Json(OutcomeResponse::ok(
        "Questionario compilato con successo",
    )))
}
