use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use common::{error::AppError, storage::types::document::Document};
use serde::Deserialize;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError, extract::ApiJson};

#[derive(Debug, Deserialize)]
pub struct CreateDocumentParams {
    pub title: String,
    pub url: String,
}

impl CreateDocumentParams {
    fn validate(self) -> Result<(String, String), AppError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("Document title is required".into()));
        }

        let url = self.url.trim().to_string();
        let parsed = url::Url::parse(&url)
            .map_err(|_| AppError::Validation("Document URL is invalid".into()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Validation(
                "Document URL must use http or https".into(),
            ));
        }

        Ok((title, url))
    }
}

pub async fn list_documents(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = Document::list_all(&state.db).await?;

    Ok(Json(documents))
}

pub async fn get_document(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let document = Document::get_by_id(&id, &state.db).await?;

    Ok(Json(document))
}

pub async fn create_document(
    State(state): State<ApiState>,
    ApiJson(input): ApiJson<CreateDocumentParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (title, url) = input.validate()?;
    let document = Document::new(title, url);

    let stored = state
        .db
        .store_item(document)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::InternalError("Document was not stored".into()))?;

    info!(document_id = %stored.id, url = %stored.url, "Created document");

    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete_document(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let deleted = Document::delete_by_id(&id, &state.db).await?;

    info!(document_id = %deleted.id, "Deleted document");

    Ok(Json(deleted))
}
