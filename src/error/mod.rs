//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` so handlers can bubble everything up with
//! `?`. Responses carry the HTTP status and a plain-text message; internal
//! details are logged server-side and never leak to the client.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};
use crate::service::tracker::TrackerError;

/// Top-level application error type.
///
/// Aggregates every error the application can produce. Most variants use
/// `#[from]` for automatic conversion. `AuthError` handles its own response
/// mapping; tracker errors are client mistakes and map to 400; everything
/// else is a server-side failure and maps to 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Turn-order operation rejected (bad index, invalid hit points, no
    /// encounter selected). Always a client error.
    #[error(transparent)]
    TrackerErr(#[from] TrackerError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error surfaced outside SeaORM (session store setup).
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Invalid URL in OAuth endpoint configuration.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Network binding or I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Resource not found; 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::TrackerErr(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn tracker_errors_map_to_400() {
        assert_eq!(
            status_of(AppError::TrackerErr(TrackerError::IndexOutOfBounds {
                index: 4,
                len: 2,
            })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::TrackerErr(TrackerError::InvalidHitPoints {
                current_hp: -1,
                max_hp: 10,
            })),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn database_errors_map_to_500() {
        assert_eq!(
            status_of(AppError::DbErr(sea_orm::DbErr::Custom("db down".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthenticated_maps_to_401() {
        assert_eq!(
            status_of(AppError::AuthErr(AuthError::UserNotInSession)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn csrf_mismatch_maps_to_400() {
        assert_eq!(
            status_of(AppError::AuthErr(AuthError::CsrfValidationFailed)),
            StatusCode::BAD_REQUEST
        );
    }
}
