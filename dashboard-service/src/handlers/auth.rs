use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use tower_sessions::Session;
use validator::Validate;

use dashboard_core::error::AppError;

use crate::AppState;
use crate::dtos::LoginRequest;

/// Session key holding the signed-in user's email.
pub const USER_EMAIL_KEY: &str = "user_email";

/// Credential check against the configured demo account.
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let auth = &state.settings.auth;
    if payload.email != auth.email || payload.password != *auth.password.expose_secret() {
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Invalid credentials."
        )));
    }

    session
        .insert(USER_EMAIL_KEY, &payload.email)
        .await
        .map_err(|e| AppError::SessionError(anyhow::Error::new(e)))?;

    tracing::info!(email = %payload.email, "User logged in successfully");

    let mut headers = HeaderMap::new();
    headers.insert("HX-Redirect", HeaderValue::from_static("/dashboard"));
    Ok((StatusCode::OK, headers, "").into_response())
}

pub async fn logout_handler(session: Session) -> impl IntoResponse {
    session.clear().await;

    let mut headers = HeaderMap::new();
    headers.insert("HX-Redirect", HeaderValue::from_static("/"));
    (StatusCode::OK, headers, "")
}
