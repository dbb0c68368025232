use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::data::user::UserRepository;
use crate::error::{auth::AuthError, AppError};
use crate::middleware::session::{AuthSession, CsrfSession};
use crate::service::auth::DiscordAuthService;
use crate::state::AppState;

/// Query parameters of the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for the token exchange.
    pub code: String,
}

/// `GET /login/discord` — redirects to Discord's authorize URL.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store the CSRF token for verification during the callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// `GET /auth/discord/callback` — completes the login.
///
/// Validates the CSRF state, exchanges the code, upserts the user row, binds
/// the session to the user, and drops any previous turn-order session so the
/// next request loads fresh.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);
    let user_info = auth_service.callback(params.code).await?;

    let user = UserRepository::new(&state.db).upsert(user_info.into()).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    state.tracker_sessions.reset(user.id).await;

    Ok(Redirect::to("/"))
}

/// `GET /logout` — clears the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to("/"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}
