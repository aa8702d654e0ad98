use axum::{extract::State, Json};
use common::{error::AppError, storage::types::system_settings::SystemSettings};
use serde::Deserialize;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError, extract::ApiJson};

/// Partial update of the tutor settings. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsParams {
    pub tutor_model: Option<String>,
    pub tutor_system_prompt: Option<String>,
}

impl UpdateSettingsParams {
    fn apply(self, mut settings: SystemSettings) -> Result<SystemSettings, AppError> {
        if let Some(model) = self.tutor_model {
            let model = model.trim();
            if model.is_empty() {
                return Err(AppError::Validation("Tutor model must not be empty".into()));
            }
            settings.tutor_model = model.to_string();
        }

        if let Some(prompt) = self.tutor_system_prompt {
            if prompt.trim().is_empty() {
                return Err(AppError::Validation(
                    "Tutor system prompt must not be empty".into(),
                ));
            }
            settings.tutor_system_prompt = prompt;
        }

        Ok(settings)
    }
}

pub async fn get_settings(
    State(state): State<ApiState>,
) -> Result<Json<SystemSettings>, ApiError> {
    Ok(Json(SystemSettings::get_current(&state.db).await?))
}

pub async fn update_settings(
    State(state): State<ApiState>,
    ApiJson(input): ApiJson<UpdateSettingsParams>,
) -> Result<Json<SystemSettings>, ApiError> {
    let current = SystemSettings::get_current(&state.db).await?;
    let changes = input.apply(current)?;
    let updated = SystemSettings::update(&state.db, changes).await?;

    info!(tutor_model = %updated.tutor_model, "Updated tutor settings");

    Ok(Json(updated))
}
