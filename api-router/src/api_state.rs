use std::sync::Arc;

use common::{storage::db::SurrealDbClient, utils::config::AppConfig};
use tutor_pipeline::TutorFlow;

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<SurrealDbClient>,
    pub config: AppConfig,
    pub tutor: TutorFlow,
}

impl ApiState {
    pub fn new(db: Arc<SurrealDbClient>, config: &AppConfig, tutor: TutorFlow) -> Self {
        Self {
            db,
            config: config.clone(),
            tutor,
        }
    }
}
