//! HTML fragments swapped into the page by the front-end scripts.

use std::fmt::Write;

use crate::model::character::Character;
use crate::model::encounter::Encounter;
use crate::view::escape;

/// Renders the working sequence as the sortable character list.
pub fn character_list(characters: &[Character]) -> String {
    let mut html = String::new();
    for character in characters {
        html.push_str(&character_row(character));
    }
    html
}

/// Renders the working sequence plus one unsaved row in edit mode.
///
/// The blank row carries the sentinel id; nothing is persisted until the
/// user saves it.
pub fn character_list_with_blank_row(characters: &[Character]) -> String {
    let mut html = character_list(characters);
    html.push_str(&blank_character_row());
    html
}

/// Renders a single combatant row with its hidden edit form.
pub fn character_row(character: &Character) -> String {
    let active = if character.is_active { " active" } else { "" };
    let mut html = String::new();
    let _ = write!(
        html,
        concat!(
            r#"<div class="character{active}" data-id="{id}" onclick="selectCharacter(this)">"#,
            r#"<div class="view-mode">"#,
            r#"<span class="name">{name}</span>"#,
            r#"<span class="armor-class">AC {armor_class}</span>"#,
            r#"<span class="hit-points">{current_hp}/{max_hp} HP</span>"#,
            r#"<span class="initiative">Init {initiative}</span>"#,
            r#"<button onclick="editCharacter(this, event)">Edit</button>"#,
            r#"<button onclick="removeCharacterFromEncounter({id}, event)">Remove</button>"#,
            r#"</div>"#,
        ),
        active = active,
        id = character.id,
        name = escape(&character.name),
        armor_class = character.armor_class,
        current_hp = character.current_hp,
        max_hp = character.max_hp,
        initiative = character.initiative,
    );
    html.push_str(&edit_form(character, false));
    html.push_str("</div>");
    html
}

fn blank_character_row() -> String {
    let unsaved = Character {
        id: -1,
        name: String::new(),
        armor_class: 0,
        max_hp: 0,
        current_hp: 0,
        initiative: 0,
        is_active: false,
        owner_id: None,
    };
    let mut html = format!(
        r#"<div class="character" data-id="{}" onclick="stopPropagation(event)"><div class="view-mode" style="display: none"></div>"#,
        unsaved.id
    );
    html.push_str(&edit_form(&unsaved, true));
    html.push_str("</div>");
    html
}

fn edit_form(character: &Character, visible: bool) -> String {
    let style = if visible { "" } else { r#" style="display: none""# };
    let mut html = String::new();
    let _ = write!(
        html,
        concat!(
            r#"<div class="edit-mode"{style}>"#,
            r#"<input name="name" value="{name}" placeholder="Name">"#,
            r#"<input name="armorClass" type="number" value="{armor_class}">"#,
            r#"<input name="maxHP" type="number" value="{max_hp}">"#,
            r#"<input name="currentHP" type="number" value="{current_hp}">"#,
            r#"<input name="initiative" type="number" value="{initiative}">"#,
            r#"<button onclick="saveCharacter(this)">Save</button>"#,
            r#"<button onclick="cancelEdit(this)">Cancel</button>"#,
            r#"</div>"#,
        ),
        style = style,
        name = escape(&character.name),
        armor_class = character.armor_class,
        max_hp = character.max_hp,
        current_hp = character.current_hp,
        initiative = character.initiative,
    );
    html
}

/// Renders the encounter list with the caller's selection marked.
pub fn encounter_list(encounters: &[Encounter], selected: Option<i32>) -> String {
    let mut html = String::new();
    for encounter in encounters {
        let selected_class = if selected == Some(encounter.id) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            html,
            concat!(
                r#"<div class="encounter{selected}" data-id="{id}" onclick="selectEncounter({id})">"#,
                r#"<span class="encounter-name">{name}</span>"#,
                r#"<div class="encounter-description">{description}</div>"#,
                r#"</div>"#,
            ),
            selected = selected_class,
            id = encounter.id,
            name = escape(&encounter.name),
            description = markdown(&encounter.description),
        );
    }
    html
}

/// Renders fuzzy-search hits with their Add buttons.
pub fn search_results(characters: &[Character]) -> String {
    let mut html = String::new();
    for character in characters {
        let _ = write!(
            html,
            r#"<div class="search-result">{} <button onclick="addCharacterToEncounter({})">Add</button></div>"#,
            escape(&character.name),
            character.id,
        );
    }
    html
}

fn markdown(text: &str) -> String {
    let parser = pulldown_cmark::Parser::new(text);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn combatant(id: i32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            armor_class: 14,
            max_hp: 20,
            current_hp: 20,
            initiative: 10,
            is_active: false,
            owner_id: None,
        }
    }

    #[test]
    fn character_names_are_escaped() {
        let html = character_row(&combatant(1, "<script>Ogre</script>"));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;Ogre&lt;/script&gt;"));
    }

    #[test]
    fn active_combatant_is_marked() {
        let mut character = combatant(2, "Guard");
        character.is_active = true;

        let html = character_row(&character);

        assert!(html.contains(r#"class="character active""#));
    }

    #[test]
    fn blank_row_uses_the_sentinel_id() {
        let html = character_list_with_blank_row(&[combatant(1, "Guard")]);

        assert!(html.contains(r#"data-id="-1""#));
    }

    #[test]
    fn selected_encounter_is_marked() {
        let now = Utc::now();
        let encounters = vec![
            Encounter {
                id: 1,
                name: "Ambush".to_string(),
                owner_id: "123".to_string(),
                description: String::new(),
                created_at: now,
                updated_at: now,
                encounter_type: "battle".to_string(),
                campaign_id: None,
            },
            Encounter {
                id: 2,
                name: "Boss Fight".to_string(),
                owner_id: "123".to_string(),
                description: "The **final** battle".to_string(),
                created_at: now,
                updated_at: now,
                encounter_type: "battle".to_string(),
                campaign_id: None,
            },
        ];

        let html = encounter_list(&encounters, Some(2));

        assert!(html.contains(r#"class="encounter" data-id="1""#));
        assert!(html.contains(r#"class="encounter selected" data-id="2""#));
        assert!(html.contains("<strong>final</strong>"));
    }

    #[test]
    fn search_results_link_the_add_action() {
        let html = search_results(&[combatant(7, "Guard")]);

        assert!(html.contains("addCharacterToEncounter(7)"));
        assert!(html.contains("Guard"));
    }
}
