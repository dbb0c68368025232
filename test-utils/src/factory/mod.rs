//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization plus `create_*`
//! convenience functions for quick default creation. Factories handle
//! foreign-key relationships so tests stay concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let encounter = factory::encounter::create_encounter(&db, &user.discord_id).await?;
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("Guard")
//!     .initiative(15)
//!     .owner(&user.discord_id)
//!     .build()
//!     .await?;
//! factory::encounter::add_member(&db, encounter.id, character.id).await?;
//! ```

pub mod character;
pub mod encounter;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use encounter::{add_member, create_encounter};
pub use user::create_user;
