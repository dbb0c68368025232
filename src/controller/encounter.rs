use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tower_sessions::Session;

use crate::data::encounter::EncounterRepository;
use crate::error::AppError;
use crate::middleware::auth::AuthGuard;
use crate::service::tracker::TrackerService;
use crate::state::AppState;
use crate::view;

#[derive(Deserialize)]
pub struct SelectEncounterRequest {
    pub id: i32,
}

/// `GET /encounters` — the caller's encounters with their selection marked.
///
/// Anonymous visitors get an empty list.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).current_user().await? else {
        return Ok(Html(view::fragment::encounter_list(&[], None)));
    };

    let encounters = EncounterRepository::new(&state.db)
        .get_by_owner(&user.discord_id)
        .await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let selected = tracker.selected_encounter(&user).await?;

    Ok(Html(view::fragment::encounter_list(&encounters, selected)))
}

/// `POST /select-encounter` — switches the selected encounter and renders
/// the reloaded working sequence.
pub async fn select(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SelectEncounterRequest>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.select_encounter(&user, payload.id).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}
