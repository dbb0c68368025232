mod character;
mod encounter;
mod user;
