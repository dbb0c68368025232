//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pool handle, `reqwest::Client` wraps an `Arc`,
//! the OAuth2 client is designed to be cloned, and the tracker session
//! registry shares its map across clones.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::service::tracker::TrackerSessions;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API calls. Configured with redirects
    /// disabled to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Per-user in-memory turn-order sessions.
    pub tracker_sessions: TrackerSessions,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        tracker_sessions: TrackerSessions,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            tracker_sessions,
        }
    }
}
