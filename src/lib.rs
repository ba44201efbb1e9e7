//! User directory - a minimal HTTP service over a single `users` table.
//!
//! Requests flow Router → Handler → Repository → Store, and every response
//! is wrapped in a fixed JSON envelope:
//!
//! - success: `{ "message": ..., "data": ... }` with HTTP 200
//! - failure: `{ "message": ..., "error": ... }` with HTTP 500
//!   (or 400/404/409 under the `semantic` status policy)
//!
//! # Layers
//!
//! - **cli** / **commands**: process bootstrap (`serve`, `migrate`, `seed`)
//! - **config**: environment-driven settings and constants
//! - **domain**: the `User` entity
//! - **infra**: database connection, migrations, seeding, repository
//! - **api**: handlers, extractors, routes, OpenAPI description
//! - **types**: response envelopes
//! - **errors**: error taxonomy and status mapping
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server, seeding from a file first
//! cargo run -- serve --seed seed.json
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, StatusPolicy};
pub use domain::{NewUser, User};
pub use errors::{AppError, AppResult};
