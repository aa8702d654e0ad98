use async_trait::async_trait;
use common::{
    error::AppError,
    storage::{db::SurrealDbClient, types::system_settings::SystemSettings},
};

/// Source of the tutor preamble, read once per question so edits apply immediately.
#[async_trait]
pub trait InstructionsProvider: Send + Sync {
    async fn tutor_instructions(&self) -> Result<String, AppError>;
}

#[async_trait]
impl InstructionsProvider for SurrealDbClient {
    async fn tutor_instructions(&self) -> Result<String, AppError> {
        Ok(SystemSettings::get_current(self).await?.tutor_system_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_instructions_follow_settings_updates() {
        let db = SurrealDbClient::memory("test_ns", &Uuid::new_v4().to_string())
            .await
            .expect("Failed to start in-memory surrealdb");
        db.ensure_initialized().await.expect("init");

        let initial = db.tutor_instructions().await.expect("instructions");
        assert_eq!(initial, SystemSettings::default().tutor_system_prompt);

        let mut changes = SystemSettings::get_current(&db).await.expect("current");
        changes.tutor_system_prompt = "Answer like a patient TA.".into();
        SystemSettings::update(&db, changes).await.expect("update");

        assert_eq!(
            db.tutor_instructions().await.expect("instructions"),
            "Answer like a patient TA."
        );
    }
}
