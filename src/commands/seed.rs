//! Seed command - Load users from a JSON file.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{seed_users, Database};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;

    let inserted = seed_users(db.connection(), &args.path).await?;
    println!("Inserted {} users from {}", inserted, args.path.display());

    Ok(())
}
