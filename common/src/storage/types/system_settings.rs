use crate::storage::types::deserialize_flexible_id;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, storage::db::SurrealDbClient};

use super::system_prompts::{DEFAULT_TUTOR_MODEL, DEFAULT_TUTOR_SYSTEM_PROMPT};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SystemSettings {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: String,
    pub tutor_model: String,
    pub tutor_system_prompt: String,
}

impl SystemSettings {
    pub async fn ensure_initialized(db: &SurrealDbClient) -> Result<Self, AppError> {
        let settings = db.select(("system_settings", "current")).await?;

        if settings.is_none() {
            let created: Option<SystemSettings> = db
                .create(("system_settings", "current"))
                .content(SystemSettings::default())
                .await?;

            return created.ok_or(AppError::Validation("Failed to initialize settings".into()));
        };

        settings.ok_or(AppError::Validation("Failed to initialize settings".into()))
    }

    pub async fn get_current(db: &SurrealDbClient) -> Result<Self, AppError> {
        let settings: Option<Self> = db
            .client
            .query("SELECT * FROM type::thing('system_settings', 'current')")
            .await?
            .take(0)?;

        settings.ok_or(AppError::NotFound("System settings not found".into()))
    }

    pub async fn update(db: &SurrealDbClient, changes: Self) -> Result<Self, AppError> {
        let updated: Option<Self> = db
            .client
            .query("UPDATE type::thing('system_settings', 'current') MERGE $changes RETURN AFTER")
            .bind(("changes", changes))
            .await?
            .take(0)?;

        updated.ok_or(AppError::Validation(
            "Something went wrong updating the settings".into(),
        ))
    }
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            id: "current".to_string(),
            tutor_model: DEFAULT_TUTOR_MODEL.to_string(),
            tutor_system_prompt: DEFAULT_TUTOR_SYSTEM_PROMPT.to_string(),
        }
    }
}
