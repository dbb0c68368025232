use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::auth::AuthGuard;
use crate::model::character::SaveCharacterDto;
use crate::service::search::SearchService;
use crate::service::tracker::TrackerService;
use crate::state::AppState;
use crate::view;

#[derive(Deserialize)]
pub struct SelectCharacterRequest {
    pub id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub old_index: usize,
    pub new_index: usize,
}

#[derive(Deserialize)]
pub struct MembershipRequest {
    pub character_id: i32,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /characters` — renders the caller's working sequence.
///
/// Anonymous visitors get an empty list.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).current_user().await? else {
        return Ok(Html(view::fragment::character_list(&[])));
    };

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.current(&user).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}

/// `POST /next` — advances the turn to the next combatant.
pub async fn next(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.advance(&user).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}

/// `POST /select-character` — hands the turn to a specific combatant.
pub async fn select(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SelectCharacterRequest>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.select_active(&user, payload.id).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}

/// `POST /sort` — sorts the sequence by initiative, highest first.
pub async fn sort(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.sort(&user).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}

/// `POST /reorder` — moves a combatant after a drag-and-drop.
///
/// Responds with a JSON status instead of a fragment; the front end already
/// moved the row.
pub async fn reorder(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    tracker
        .reorder(&user, payload.old_index, payload.new_index)
        .await?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}

/// `POST /add-character` — renders the sequence with a blank edit row.
///
/// Nothing is persisted until the row is saved.
pub async fn add_row(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.current(&user).await?;

    Ok(Html(view::fragment::character_list_with_blank_row(
        order.characters(),
    )))
}

/// `POST /save-character` — creates or updates a combatant and renders its
/// row.
pub async fn save(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCharacterDto>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let character = tracker.save(&user, payload).await?;

    Ok(Html(view::fragment::character_row(&character)))
}

/// `GET /search-characters?q=` — fuzzy search over characters not in the
/// selected encounter.
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let selected = match &user {
        Some(user) => {
            TrackerService::new(&state.db, &state.tracker_sessions)
                .selected_encounter(user)
                .await?
        }
        None => None,
    };

    let results = SearchService::new(&state.db)
        .candidates(selected, &params.q)
        .await?;

    Ok(Html(view::fragment::search_results(&results)))
}

/// `POST /add-character-to-encounter` — adds a member and renders the
/// reloaded sequence.
pub async fn add_to_encounter(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MembershipRequest>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker.add_to_encounter(&user, payload.character_id).await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}

/// `POST /remove-character-from-encounter` — removes a member and renders
/// the reloaded sequence.
pub async fn remove_from_encounter(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MembershipRequest>,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracker = TrackerService::new(&state.db, &state.tracker_sessions);
    let order = tracker
        .remove_from_encounter(&user, payload.character_id)
        .await?;

    Ok(Html(view::fragment::character_list(order.characters())))
}
