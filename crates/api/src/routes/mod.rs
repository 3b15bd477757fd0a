//! Route definitions.

pub mod admin;
pub mod health;
pub mod meeting;
pub mod stanza;
pub mod utente;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /creaStanza                       create a room (validated fields)
/// POST /accessoStanza                    join a room by access code
///
/// POST /login                            login / registration upsert
/// POST /logout                           reset the stored auth token
/// POST /modifyUserData                   edit profile attributes
/// GET  /visualizzaUtente                 caller's profile
/// GET  /visualizzaStanze                 caller's rooms
///
/// POST /compilaQuestionario/{idmeeting}  submit meeting feedback
///
/// POST /admin/annullaBan/{idstanza}      revert a ban (admin)
/// POST /admin/updateCategoria            create/update a Categoria (admin)
/// POST /admin/updateScenario             create/update a Scenario (admin)
/// GET  /admin/allStanze                  list every room (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(stanza::router())
        .merge(utente::router())
        .merge(meeting::router())
        .nest("/admin", admin::router())
}
