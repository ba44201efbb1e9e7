//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and seeding
//! - Repositories over the relational store

pub mod db;
pub mod repositories;

pub use db::{seed_users, Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
