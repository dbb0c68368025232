//! Turnboard Test Utils
//!
//! Shared testing utilities for the turnboard application. Provides a builder
//! for test contexts backed by an in-memory SQLite database, plus factories
//! that create entity rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_character_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_tracker_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let character = test_utils::factory::character::create_character(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
