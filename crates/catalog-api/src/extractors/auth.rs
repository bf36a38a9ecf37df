//! `AuthUser` extractor — reads the caller identity forwarded by the
//! authenticating gateway and injects it as a request context.
//!
//! Credential verification happens upstream; the catalog only requires
//! that an identity is present and trusts it opaquely.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use catalog_core::error::AppError;
use catalog_service::context::RequestContext;

use crate::state::AppState;

/// Header carrying the already-authenticated caller identity.
pub const AUTH_USER_HEADER: &str = "x-auth-user";

/// Extracted caller context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(AUTH_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                AppError::unauthorized(format!("Missing {AUTH_USER_HEADER} header"))
            })?;

        Ok(AuthUser(RequestContext::new(user)))
    }
}
