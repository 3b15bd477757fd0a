//! Route definitions for user login and profile management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::utente;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /login             -> login
/// POST /logout            -> logout
/// POST /modifyUserData    -> modifica_dati_utente
/// GET  /visualizzaUtente  -> visualizza_utente
/// GET  /visualizzaStanze  -> visualizza_stanze
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(utente::login))
        .route("/logout", post(utente::logout))
        .route("/modifyUserData", post(utente::modifica_dati_utente))
        .route("/visualizzaUtente", get(utente::visualizza_utente))
        .route("/visualizzaStanze", get(utente::visualizza_stanze))
}
