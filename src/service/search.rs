//! Fuzzy candidate search for encounter membership.
//!
//! Finds characters that can still be added to the selected encounter. A
//! query matches a name when its characters appear in the name in order,
//! case-insensitively, not necessarily contiguously.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::data::character::CharacterRepository;
use crate::data::encounter::EncounterRepository;
use crate::error::AppError;
use crate::model::character::Character;

/// Cap on the number of search results returned to the client.
pub const MAX_RESULTS: usize = 10;

/// Case-insensitive ordered-subsequence match.
///
/// An empty query matches everything.
pub fn fuzzy_match_fold(name: &str, query: &str) -> bool {
    let mut wanted = query.chars().flat_map(char::to_lowercase);
    let mut current = match wanted.next() {
        Some(c) => c,
        None => return true,
    };

    for c in name.chars().flat_map(char::to_lowercase) {
        if c == current {
            match wanted.next() {
                Some(next) => current = next,
                None => return true,
            }
        }
    }

    false
}

/// Searches the store for characters not yet in the selected encounter.
pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns up to [`MAX_RESULTS`] characters whose names fuzzy-match the
    /// query and that are not members of the selected encounter, in store
    /// iteration order. With no encounter selected nothing is excluded.
    pub async fn candidates(
        &self,
        selected_encounter: Option<i32>,
        query: &str,
    ) -> Result<Vec<Character>, AppError> {
        let all = CharacterRepository::new(self.db).get_all().await?;

        let members: HashSet<i32> = match selected_encounter {
            Some(encounter_id) => EncounterRepository::new(self.db)
                .member_ids(encounter_id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        Ok(all
            .into_iter()
            .filter(|c| !members.contains(&c.id) && fuzzy_match_fold(&c.name, query))
            .take(MAX_RESULTS)
            .collect())
    }
}
