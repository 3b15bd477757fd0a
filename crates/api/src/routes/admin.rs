//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require allow-list membership (enforced by handler
/// extractors).
///
/// ```text
/// POST /annullaBan/{idstanza} -> annulla_ban
/// POST /updateCategoria       -> update_categoria
/// POST /updateScenario        -> update_scenario
/// GET  /allStanze             -> all_stanze
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/annullaBan/{idstanza}", post(admin::annulla_ban))
        .route("/updateCategoria", post(admin::update_categoria))
        .route("/updateScenario", post(admin::update_scenario))
        .route("/allStanze", get(admin::all_stanze))
}
