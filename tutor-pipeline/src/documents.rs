use async_trait::async_trait;
use common::{
    error::AppError,
    storage::{db::SurrealDbClient, types::document::Document},
};

/// Read-only view of the document collection the tutor answers from.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<Document>, AppError>;
}

#[async_trait]
impl DocumentProvider for SurrealDbClient {
    async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        Document::list_all(self).await
    }
}
