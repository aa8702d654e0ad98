use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use tutor_pipeline::TutorAnswer;

use crate::{api_state::ApiState, error::ApiError, extract::ApiJson};

#[derive(Debug, Deserialize)]
pub struct AskParams {
    pub question: String,
}

pub async fn ask_tutor(
    State(state): State<ApiState>,
    ApiJson(input): ApiJson<AskParams>,
) -> Result<Json<TutorAnswer>, ApiError> {
    info!(question_chars = input.question.chars().count(), "Received tutor question");

    let answer = state.tutor.ask(&input.question).await?;

    Ok(Json(answer))
}
