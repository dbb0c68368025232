use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, character, encounter, page},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/encounters", get(encounter::list))
        .route("/select-encounter", post(encounter::select))
        .route("/characters", get(character::list))
        .route("/next", post(character::next))
        .route("/select-character", post(character::select))
        .route("/sort", post(character::sort))
        .route("/reorder", post(character::reorder))
        .route("/add-character", post(character::add_row))
        .route("/save-character", post(character::save))
        .route("/search-characters", get(character::search))
        .route("/add-character-to-encounter", post(character::add_to_encounter))
        .route(
            "/remove-character-from-encounter",
            post(character::remove_from_encounter),
        )
        .route("/login/discord", get(auth::login).post(auth::login))
        .route("/auth/discord/callback", get(auth::callback))
        .route("/logout", get(auth::logout))
}
