use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use brevity_auth::Claims;
use brevity_core::AppError;
use tracing::debug;

use crate::state::AppState;

/// The raw credential from an `Authorization: Bearer <token>` header, unverified.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(authorization) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    debug!(reason = %rejection, "Missing or malformed bearer credential");
                    AppError::invalid_credentials()
                })?;

        Ok(BearerToken(authorization.token().to_string()))
    }
}

/// Extractor that verifies the bearer token and provides the caller's claims.
///
/// Every failure (no header, wrong scheme, bad signature, expired token, no
/// subject) yields the same 401 response.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn claims(&self) -> &Claims {
        &self.0
    }

    /// Get the user ID carried in `sub`
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .subject()
            .and_then(|sub| sub.parse().ok())
            .ok_or_else(AppError::invalid_credentials)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.username.as_deref()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let claims = state.authenticator.verify(&token)?;

        if claims.subject().is_none() {
            debug!("Verified token carries no subject");
            return Err(AppError::invalid_credentials());
        }

        Ok(AuthUser(claims))
    }
}
