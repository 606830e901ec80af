use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Request guard for protected routes: extracts the bearer token, verifies
/// it, and resolves the subject to a live user row. Every failure along the
/// way is the same opaque 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::InvalidToken)?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(ApiError::InvalidToken)?;

        let claims = state.jwt.verify(token)?;

        let user = User::find_by_email(&state.db, &claims.sub)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                warn!(subject = %claims.sub, "token subject no longer exists");
                ApiError::InvalidToken
            })?;

        Ok(CurrentUser(user))
    }
}
