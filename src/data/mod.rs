//! Database repository layer for all domain entities.
//!
//! Repository structs wrap a `DatabaseConnection` and perform all queries,
//! inserts, updates, and deletes. SeaORM entity models stay inside this
//! layer; every method converts to domain models at the boundary.

pub mod character;
pub mod encounter;
pub mod user;

#[cfg(test)]
mod test;
