//! Full-page rendering.

use std::fmt::Write;

use crate::model::character::Character;
use crate::model::user::User;
use crate::view::{escape, fragment};

/// Renders the index page.
///
/// Anonymous visitors get a login link and an empty tracker; logged-in
/// users see their characters immediately while the scripts pull the
/// encounter list and keep the fragments fresh.
pub fn index(user: Option<&User>, characters: &[Character]) -> String {
    let mut html = String::from(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Initiative Tracker</title>\n",
        "<link rel=\"stylesheet\" href=\"/static/styles.css\">\n",
        "<script src=\"https://cdn.jsdelivr.net/npm/sortablejs@1.15.0/Sortable.min.js\"></script>\n",
        "<script src=\"/static/scripts.js\" defer></script>\n",
        "</head>\n",
        "<body onload=\"initializePage()\">\n",
        "<header>\n",
        "<h1>Initiative Tracker</h1>\n",
    ));

    match user {
        Some(user) => {
            let _ = write!(
                html,
                "<nav>Logged in as <strong>{}</strong> <a href=\"/logout\">Log out</a></nav>\n",
                escape(&user.name)
            );
        }
        None => {
            html.push_str("<nav><a href=\"/login/discord\">Log in with Discord</a></nav>\n");
        }
    }

    html.push_str(concat!(
        "</header>\n",
        "<main>\n",
        "<section id=\"encounter-panel\">\n",
        "<h2>Encounters</h2>\n",
        "<div id=\"encounter-list\"></div>\n",
        "</section>\n",
        "<section id=\"tracker-panel\">\n",
        "<h2>Turn Order</h2>\n",
        "<div id=\"character-list\">",
    ));
    html.push_str(&fragment::character_list(characters));
    html.push_str(concat!(
        "</div>\n",
        "<div class=\"toolbar\">\n",
        "<button onclick=\"nextCharacter()\">Next</button>\n",
        "<button onclick=\"sortCharacters()\">Sort by initiative</button>\n",
        "<button onclick=\"addCharacter()\">Add character</button>\n",
        "</div>\n",
        "<input id=\"character-search\" placeholder=\"Search characters\" oninput=\"searchCharacters(this.value)\">\n",
        "<div id=\"search-results\"></div>\n",
        "</section>\n",
        "</main>\n",
        "</body>\n",
        "</html>\n",
    ));

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_page_offers_login() {
        let html = index(None, &[]);

        assert!(html.contains("Initiative Tracker"));
        assert!(html.contains("/login/discord"));
        assert!(!html.contains("/logout"));
    }

    #[test]
    fn logged_in_page_shows_username_and_characters() {
        let user = User {
            id: 1,
            discord_id: "123".to_string(),
            name: "Autumn".to_string(),
            avatar: None,
        };
        let characters = vec![Character {
            id: 5,
            name: "Guard".to_string(),
            armor_class: 14,
            max_hp: 20,
            current_hp: 20,
            initiative: 10,
            is_active: false,
            owner_id: Some("123".to_string()),
        }];

        let html = index(Some(&user), &characters);

        assert!(html.contains("Autumn"));
        assert!(html.contains("/logout"));
        assert!(html.contains("Guard"));
    }
}
