//! Optional startup seeding from a JSON file.

use std::path::Path;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, NotSet, Set};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::user::{self, ActiveModel, Entity as UserEntity};

/// One record of the seed file. Keys are camelCase on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    #[serde(rename = "username")]
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    pub user_status: String,
}

/// Load a JSON array of users into the table.
///
/// Rows whose username is already present are skipped, so seeding the same
/// file twice is a no-op. Returns the number of rows actually inserted.
pub async fn seed_users(db: &DatabaseConnection, path: &Path) -> AppResult<u64> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::internal(format!("failed to read seed data from {}: {}", path.display(), e))
    })?;

    let users: Vec<SeedUser> = serde_json::from_str(&raw)
        .map_err(|e| AppError::internal(format!("could not parse seed JSON: {}", e)))?;
    let total = users.len();

    let mut inserted = 0;
    for seed in users {
        let active_model = ActiveModel {
            user_id: NotSet,
            user_name: Set(seed.user_name),
            first_name: Set(seed.first_name),
            last_name: Set(seed.last_name),
            email: Set(seed.email),
            department: Set(seed.department),
            user_status: Set(seed.user_status),
        };

        inserted += UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::UserName)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    tracing::info!(inserted, skipped = total as u64 - inserted, "seed data loaded");
    Ok(inserted)
}
