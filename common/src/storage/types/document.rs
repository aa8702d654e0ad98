use uuid::Uuid;

use crate::{error::AppError, storage::db::SurrealDbClient, stored_object};

stored_object!(Document, "document", {
    title: String,
    url: String
});

impl Document {
    pub fn new(title: String, url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            title,
            url,
        }
    }

    /// Reads the whole document collection. No ordering is guaranteed.
    pub async fn list_all(db: &SurrealDbClient) -> Result<Vec<Self>, AppError> {
        Ok(db.get_all_stored_items::<Self>().await?)
    }

    pub async fn get_by_id(id: &str, db: &SurrealDbClient) -> Result<Self, AppError> {
        db.get_item::<Self>(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("document {id}")))
    }

    pub async fn delete_by_id(id: &str, db: &SurrealDbClient) -> Result<Self, AppError> {
        db.delete_item::<Self>(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("document {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> SurrealDbClient {
        let db = SurrealDbClient::memory("test_ns", &Uuid::new_v4().to_string())
            .await
            .expect("Failed to start in-memory surrealdb");
        db.ensure_initialized().await.expect("init");
        db
    }

    #[tokio::test]
    async fn test_list_all_returns_every_document() {
        let db = memory_db().await;

        assert!(Document::list_all(&db).await.expect("list").is_empty());

        let first = Document::new("Syllabus".into(), "https://example.edu/a.pdf".into());
        let second = Document::new("Notes".into(), "https://example.edu/b.pdf".into());
        db.store_item(first.clone()).await.expect("store first");
        db.store_item(second.clone()).await.expect("store second");

        let all = Document::list_all(&db).await.expect("list");
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|d| d.id == first.id && d.title == "Syllabus"));
        assert!(all.iter().any(|d| d.id == second.id && d.url.ends_with("b.pdf")));
    }

    #[tokio::test]
    async fn test_get_and_delete_by_id() {
        let db = memory_db().await;
        let doc = Document::new("Syllabus".into(), "https://example.edu/a.pdf".into());
        db.store_item(doc.clone()).await.expect("store");

        let fetched = Document::get_by_id(&doc.id, &db).await.expect("get");
        assert_eq!(fetched.url, doc.url);

        let deleted = Document::delete_by_id(&doc.id, &db).await.expect("delete");
        assert_eq!(deleted.id, doc.id);

        let gone = Document::get_by_id(&doc.id, &db).await;
        assert!(matches!(gone, Err(AppError::NotFound(_))));

        let missing = Document::delete_by_id(&doc.id, &db).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
