//! Anonymous identity service
//!
//! There is no credential flow: a session starts by minting a fresh uid and
//! handing back a signed token pair. The uid inside a validated token is the
//! caller's identity from then on.

use tracing::{info, instrument};

use crate::dto::{AuthResponse, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Anonymous auth service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a new anonymous session
    #[instrument(skip(self))]
    pub async fn start_anonymous_session(&self) -> ServiceResult<AuthResponse> {
        let user_id = self.ctx.generate_id();
        let pair = self.ctx.jwt_service().generate_token_pair(user_id)?;

        info!(user_id = %user_id, "Anonymous session started");

        Ok(AuthResponse::new(
            user_id.to_string(),
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
        ))
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_session(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;
        let pair = self.ctx.jwt_service().generate_token_pair(user_id)?;

        info!(user_id = %user_id, "Anonymous session refreshed");

        Ok(AuthResponse::new(
            user_id.to_string(),
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
        ))
    }
}
