//! Domain models and operation-specific parameter types.
//!
//! Entity models stay at the data layer; everything above it works with the
//! types in this module. Wire DTOs live next to the domain models they map
//! to, with explicit `from_entity` / `from_dto` conversions at the
//! boundaries.

pub mod character;
pub mod encounter;
pub mod user;
