//! Route definitions for meeting feedback.

use axum::routing::post;
use axum::Router;

use crate::handlers::meeting;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /compilaQuestionario/{idmeeting} -> compila_questionario
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/compilaQuestionario/{idmeeting}",
        post(meeting::compila_questionario),
    )
}
