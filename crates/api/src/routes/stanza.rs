//! Route definitions for room creation and access.

use axum::routing::post;
use axum::Router;

use crate::handlers::stanza;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /creaStanza      -> crea_stanza
/// POST /accessoStanza   -> accesso_stanza
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/creaStanza", post(stanza::crea_stanza))
        .route("/accessoStanza", post(stanza::accesso_stanza))
}
