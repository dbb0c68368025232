//! OAuth2 login with Discord.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::error::{auth::AuthError, AppError};
use crate::model::user::DiscordUserInfo;
use crate::state::OAuth2Client;

const DISCORD_USER_INFO_URL: &str = "https://discord.com/api/users/@me";

pub struct DiscordAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Builds the Discord authorize URL along with the CSRF token that must
    /// be validated when the callback arrives.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the login: exchanges the authorization code for an access
    /// token and fetches the authenticated user's identity.
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordUserInfo, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(Box::new(e)))?;

        self.fetch_discord_user(token.access_token().secret())
            .await
    }

    /// Retrieves the user's information with the provided access token.
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUserInfo, AppError> {
        let user_info = self
            .http_client
            .get(DISCORD_USER_INFO_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUserInfo>()
            .await?;

        Ok(user_info)
    }
}
