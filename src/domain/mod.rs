//! Domain layer - Core business entities
//!
//! The user entity as the rest of the application sees it, independent of
//! how it is stored or transported.

pub mod user;

pub use user::{NewUser, User};
