//! Authentication handlers
//!
//! Endpoints for anonymous session issuance and refresh.

use axum::{extract::State, Json};
use feed_service::{AuthResponse, AuthService, RefreshTokenRequest};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Start an anonymous session
///
/// POST /auth/anonymous
pub async fn anonymous(State(state): State<AppState>) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.start_anonymous_session().await?;
    Ok(Created(Json(response)))
}

/// Refresh the session token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_session(request).await?;
    Ok(Json(response))
}
