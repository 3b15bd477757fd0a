//! Admin-gate extractor.
//!
//! Wraps [`AuthUser`] and additionally requires membership in the
//! admin allow-list. The checks run in a fixed order -- token first,
//! then allow-list -- and the first failure rejects the request, so
//! payload validation in handlers only ever sees authorized admins.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use metaclass_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated caller whose meta-id is in the admin
/// allow-list. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !state.admins.is_admin(&user.meta_id) {
            return Err(AppError::Core(CoreError::Forbidden(
                "accesso non consentito".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
