//! Request-scoped guards and typed session access.

pub mod auth;
pub mod session;
