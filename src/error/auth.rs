use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error returned when the Discord token exchange fails.
///
/// Boxed because the underlying oauth2 error type is large.
pub type DiscordTokenError =
    oauth2::basic::BasicRequestTokenError<oauth2::HttpClientError<reqwest::Error>>;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No authenticated user id in the session.
    ///
    /// Returned by the auth guard when a turn-order mutation is attempted
    /// without logging in first. Results in a 401 Unauthorized response.
    #[error("No authenticated user in the session")]
    UserNotInSession,

    /// The session references a user row that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from the session no longer exists")]
    UserNotInDatabase(i32),

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Results in a 500 Internal Server Error; the underlying cause is
    /// logged server-side.
    #[error("Failed to exchange authorization code with Discord: {0}")]
    TokenExchange(#[from] Box<DiscordTokenError>),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            )
                .into_response(),
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                "You must be logged in to do that.".to_string(),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => {
                (StatusCode::NOT_FOUND, "User not found".to_string()).into_response()
            }
            Self::TokenExchange(err) => {
                tracing::error!("Discord token exchange failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
