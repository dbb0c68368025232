use axum::{extract::State, response::Html};
use tower_sessions::Session;

use crate::data::character::CharacterRepository;
use crate::error::AppError;
use crate::middleware::auth::AuthGuard;
use crate::state::AppState;
use crate::view;

/// `GET /` — the index page.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let characters = match &user {
        Some(user) => {
            CharacterRepository::new(&state.db)
                .get_by_owner(&user.discord_id)
                .await?
        }
        None => Vec::new(),
    };

    Ok(Html(view::page::index(user.as_ref(), &characters)))
}
