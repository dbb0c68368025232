//! User domain model and Discord identity payloads.

use serde::Deserialize;

/// An application user resolved from Discord OAuth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl User {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            avatar: entity.avatar,
        }
    }
}

/// Parameters for upserting a user row after a successful login.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// Response body of Discord's `/users/@me` endpoint, reduced to the fields
/// the application stores.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUserInfo {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

impl DiscordUserInfo {
    /// The name shown in the UI: the display name when Discord has one,
    /// otherwise the login username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

impl From<DiscordUserInfo> for UpsertUserParams {
    fn from(info: DiscordUserInfo) -> Self {
        Self {
            name: info.display_name().to_string(),
            discord_id: info.id,
            avatar: info.avatar,
        }
    }
}
