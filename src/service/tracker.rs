//! In-memory turn-order sessions.
//!
//! Each authenticated user gets their own `TurnOrder`: the ordered sequence
//! of characters loaded for the selected encounter plus the marker for whose
//! turn it is. Sequences live in a `TrackerSessions` registry keyed by user
//! id, so concurrent users never share state, and every access goes through
//! the registry lock, so double-submits from one user serialize instead of
//! racing. The lock is never held across an await; database work happens
//! before or after the locked section.
//!
//! A sequence is rebuilt from the store on login, on encounter switch, and
//! on membership changes. Sort, reorder, select, and advance mutate it in
//! place; only explicit saves write character fields back.

use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::data::character::CharacterRepository;
use crate::data::encounter::EncounterRepository;
use crate::error::AppError;
use crate::model::character::{
    Character, CreateCharacterParams, SaveCharacterDto, UpdateCharacterParams,
};
use crate::model::user::User;

/// Turn-order operation rejected because of client input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    /// A reorder index does not point into the working sequence.
    #[error("index {index} is out of bounds for {len} combatants")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Current hit points fell outside `0..=max_hp`.
    #[error("current hit points must be between 0 and {max_hp}, got {current_hp}")]
    InvalidHitPoints { current_hp: i32, max_hp: i32 },

    /// A membership operation was attempted with no encounter selected.
    #[error("no encounter selected")]
    NoEncounterSelected,
}

/// The working sequence of one user's turn-order session.
///
/// Element order is the turn order. After any `advance` or `select_active`
/// call at most one element carries the active flag.
#[derive(Debug, Clone, Default)]
pub struct TurnOrder {
    characters: Vec<Character>,
    selected_encounter: Option<i32>,
}

impl TurnOrder {
    /// The characters in turn order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The currently selected encounter, if any.
    pub fn selected_encounter(&self) -> Option<i32> {
        self.selected_encounter
    }

    pub fn set_selected_encounter(&mut self, encounter_id: Option<i32>) {
        self.selected_encounter = encounter_id;
    }

    /// Replaces the working sequence with a fresh store query result.
    pub fn replace(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    /// Appends a newly created character to the end of the turn order.
    pub fn push(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Moves the active flag to the next combatant.
    ///
    /// With no active combatant the first one becomes active. An empty
    /// sequence is a no-op.
    pub fn advance(&mut self) {
        if self.characters.is_empty() {
            return;
        }

        match self.characters.iter().position(|c| c.is_active) {
            None => self.characters[0].is_active = true,
            Some(current) => {
                self.characters[current].is_active = false;
                let next = (current + 1) % self.characters.len();
                self.characters[next].is_active = true;
            }
        }
    }

    /// Makes the combatant with the given id the active one.
    ///
    /// An unknown id leaves every combatant inactive.
    pub fn select_active(&mut self, id: i32) {
        for character in &mut self.characters {
            character.is_active = character.id == id;
        }
    }

    /// Sorts by initiative, highest first. Stable: ties keep their current
    /// relative order.
    pub fn sort_by_initiative(&mut self) {
        self.characters
            .sort_by(|a, b| b.initiative.cmp(&a.initiative));
    }

    /// Moves the element at `old_index` to `new_index`, shifting the
    /// elements in between by one position.
    ///
    /// # Returns
    /// - `Ok(())` - Sequence reordered
    /// - `Err(TrackerError::IndexOutOfBounds)` - Either index is out of range
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), TrackerError> {
        let len = self.characters.len();
        if old_index >= len {
            return Err(TrackerError::IndexOutOfBounds {
                index: old_index,
                len,
            });
        }
        if new_index >= len {
            return Err(TrackerError::IndexOutOfBounds {
                index: new_index,
                len,
            });
        }

        let character = self.characters.remove(old_index);
        self.characters.insert(new_index, character);

        Ok(())
    }

    /// Replaces the element with the saved character's id in place, keeping
    /// its position in the turn order; unknown ids are appended.
    pub fn apply_saved(&mut self, character: Character) {
        match self.characters.iter().position(|c| c.id == character.id) {
            Some(index) => self.characters[index] = character,
            None => self.characters.push(character),
        }
    }

    /// Whether the combatant with the given id currently holds the turn.
    pub fn is_active(&self, id: i32) -> bool {
        self.characters
            .iter()
            .any(|c| c.id == id && c.is_active)
    }
}

/// Process-wide registry of turn-order sessions, keyed by user id.
///
/// Cheap to clone; clones share the underlying map. Held in `AppState`.
#[derive(Clone, Default)]
pub struct TrackerSessions {
    sessions: Arc<RwLock<HashMap<i32, TurnOrder>>>,
}

impl TrackerSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session has been loaded for this user.
    pub async fn contains(&self, user_id: i32) -> bool {
        self.sessions.read().await.contains_key(&user_id)
    }

    /// Runs a closure against the user's session under the write lock,
    /// creating an empty session first if none exists.
    pub async fn mutate<R>(&self, user_id: i32, f: impl FnOnce(&mut TurnOrder) -> R) -> R {
        let mut sessions = self.sessions.write().await;
        f(sessions.entry(user_id).or_default())
    }

    /// Returns a copy of the user's session, or an empty one.
    pub async fn snapshot(&self, user_id: i32) -> TurnOrder {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drops the user's session so the next request rebuilds it from the
    /// store. Called on login.
    pub async fn reset(&self, user_id: i32) {
        self.sessions.write().await.remove(&user_id);
    }
}

/// Orchestrates turn-order operations between the registry and the store.
pub struct TrackerService<'a> {
    db: &'a DatabaseConnection,
    sessions: &'a TrackerSessions,
}

impl<'a> TrackerService<'a> {
    pub fn new(db: &'a DatabaseConnection, sessions: &'a TrackerSessions) -> Self {
        Self { db, sessions }
    }

    /// The user's current working sequence, loading it from the store if
    /// this is the first request since login.
    pub async fn current(&self, user: &User) -> Result<TurnOrder, AppError> {
        self.ensure_loaded(user).await?;
        Ok(self.sessions.snapshot(user.id).await)
    }

    /// Rebuilds the working sequence from the store.
    ///
    /// If no encounter is selected yet, the user's first encounter becomes
    /// the selection; with no encounters at all, the sequence holds every
    /// character the user owns. A store error fails the whole request and
    /// leaves the previous sequence untouched.
    pub async fn reload(&self, user: &User) -> Result<TurnOrder, AppError> {
        let selected = match self.sessions.snapshot(user.id).await.selected_encounter() {
            Some(id) => Some(id),
            None => EncounterRepository::new(self.db)
                .get_by_owner(&user.discord_id)
                .await?
                .first()
                .map(|encounter| encounter.id),
        };

        let repo = CharacterRepository::new(self.db);
        let characters = match selected {
            Some(encounter_id) => {
                repo.get_by_encounter_and_owner(encounter_id, &user.discord_id)
                    .await?
            }
            None => repo.get_by_owner(&user.discord_id).await?,
        };

        Ok(self
            .sessions
            .mutate(user.id, |order| {
                order.set_selected_encounter(selected);
                order.replace(characters);
                order.clone()
            })
            .await)
    }

    async fn ensure_loaded(&self, user: &User) -> Result<(), AppError> {
        if !self.sessions.contains(user.id).await {
            self.reload(user).await?;
        }
        Ok(())
    }

    /// The user's selected encounter id, if any.
    pub async fn selected_encounter(&self, user: &User) -> Result<Option<i32>, AppError> {
        self.ensure_loaded(user).await?;
        Ok(self.sessions.snapshot(user.id).await.selected_encounter())
    }

    /// Switches the selected encounter and rebuilds the sequence.
    pub async fn select_encounter(
        &self,
        user: &User,
        encounter_id: i32,
    ) -> Result<TurnOrder, AppError> {
        let encounter = EncounterRepository::new(self.db)
            .get_by_id(encounter_id)
            .await?;
        if encounter.is_none() {
            return Err(AppError::NotFound("Encounter not found".to_string()));
        }

        self.sessions
            .mutate(user.id, |order| {
                order.set_selected_encounter(Some(encounter_id))
            })
            .await;

        self.reload(user).await
    }

    /// Advances the turn to the next combatant.
    pub async fn advance(&self, user: &User) -> Result<TurnOrder, AppError> {
        self.ensure_loaded(user).await?;
        Ok(self
            .sessions
            .mutate(user.id, |order| {
                order.advance();
                order.clone()
            })
            .await)
    }

    /// Hands the turn to a specific combatant.
    pub async fn select_active(&self, user: &User, id: i32) -> Result<TurnOrder, AppError> {
        self.ensure_loaded(user).await?;
        Ok(self
            .sessions
            .mutate(user.id, |order| {
                order.select_active(id);
                order.clone()
            })
            .await)
    }

    /// Sorts the sequence by initiative, highest first.
    pub async fn sort(&self, user: &User) -> Result<TurnOrder, AppError> {
        self.ensure_loaded(user).await?;
        Ok(self
            .sessions
            .mutate(user.id, |order| {
                order.sort_by_initiative();
                order.clone()
            })
            .await)
    }

    /// Moves a combatant to a new position in the turn order.
    pub async fn reorder(
        &self,
        user: &User,
        old_index: usize,
        new_index: usize,
    ) -> Result<(), AppError> {
        self.ensure_loaded(user).await?;
        self.sessions
            .mutate(user.id, |order| order.reorder(old_index, new_index))
            .await?;
        Ok(())
    }

    /// Creates or updates a character from the save payload.
    ///
    /// Validates the hit-point invariant before touching the store. New
    /// characters (sentinel id) are owned by the caller and appended to the
    /// sequence with their store-assigned id; existing ones are replaced in
    /// place, keeping their position and active flag.
    pub async fn save(&self, user: &User, dto: SaveCharacterDto) -> Result<Character, AppError> {
        if dto.current_hp < 0 || dto.current_hp > dto.max_hp {
            return Err(TrackerError::InvalidHitPoints {
                current_hp: dto.current_hp,
                max_hp: dto.max_hp,
            }
            .into());
        }

        self.ensure_loaded(user).await?;
        let repo = CharacterRepository::new(self.db);

        let character = if dto.is_new() {
            let created = repo
                .create(CreateCharacterParams::from_dto(
                    dto,
                    Some(user.discord_id.clone()),
                ))
                .await?;
            self.sessions
                .mutate(user.id, |order| order.push(created.clone()))
                .await;
            created
        } else {
            if repo.get_by_id(dto.id).await?.is_none() {
                return Err(AppError::NotFound("Character not found".to_string()));
            }

            let is_active = self
                .sessions
                .mutate(user.id, |order| order.is_active(dto.id))
                .await;
            let updated = repo
                .update(UpdateCharacterParams::from_dto(dto, is_active))
                .await?;
            self.sessions
                .mutate(user.id, |order| order.apply_saved(updated.clone()))
                .await;
            updated
        };

        Ok(character)
    }

    /// Adds a character to the selected encounter and rebuilds the sequence.
    pub async fn add_to_encounter(
        &self,
        user: &User,
        character_id: i32,
    ) -> Result<TurnOrder, AppError> {
        let encounter_id = self.require_selected(user).await?;

        EncounterRepository::new(self.db)
            .add_character(encounter_id, character_id)
            .await?;

        self.reload(user).await
    }

    /// Removes a character from the selected encounter and rebuilds the
    /// sequence.
    pub async fn remove_from_encounter(
        &self,
        user: &User,
        character_id: i32,
    ) -> Result<TurnOrder, AppError> {
        let encounter_id = self.require_selected(user).await?;

        EncounterRepository::new(self.db)
            .remove_character(encounter_id, character_id)
            .await?;

        self.reload(user).await
    }

    async fn require_selected(&self, user: &User) -> Result<i32, AppError> {
        self.ensure_loaded(user).await?;
        self.sessions
            .snapshot(user.id)
            .await
            .selected_encounter()
            .ok_or_else(|| TrackerError::NoEncounterSelected.into())
    }
}
