use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
        ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;
use common::{
    error::AppError,
    storage::{db::SurrealDbClient, types::system_settings::SystemSettings},
};
use tracing::debug;

use crate::{answer::TutorAnswer, prompt::get_tutor_response_schema};

/// Everything sent to the model for one question.
#[derive(Debug, Clone)]
pub struct TutorPrompt {
    /// Tutor role and answering rules.
    pub instructions: String,
    /// Question followed by the document context.
    pub user_message: String,
}

#[async_trait]
pub trait TutorModel: Send + Sync {
    async fn generate(&self, prompt: TutorPrompt) -> Result<TutorAnswer, AppError>;
}

/// Chat-completions backed tutor. The model name comes from `SystemSettings` on every call.
pub struct OpenAiTutorModel {
    client: Arc<Client<OpenAIConfig>>,
    db: Arc<SurrealDbClient>,
}

impl OpenAiTutorModel {
    pub fn new(client: Arc<Client<OpenAIConfig>>, db: Arc<SurrealDbClient>) -> Self {
        Self { client, db }
    }
}

#[async_trait]
impl TutorModel for OpenAiTutorModel {
    async fn generate(&self, prompt: TutorPrompt) -> Result<TutorAnswer, AppError> {
        let settings = SystemSettings::get_current(&self.db).await?;
        let request = create_tutor_request(prompt, &settings.tutor_model)?;

        debug!(model = %settings.tutor_model, "Sending tutor request");
        let response = self.client.chat().create(request).await?;

        process_llm_response(response)
    }
}

pub fn create_tutor_request(
    prompt: TutorPrompt,
    model: &str,
) -> Result<CreateChatCompletionRequest, OpenAIError> {
    let response_format = ResponseFormat::JsonSchema {
        json_schema: ResponseFormatJsonSchema {
            description: Some("Academic tutor answer with cited documents".into()),
            name: "tutor_answer_with_sources".into(),
            schema: Some(get_tutor_response_schema()),
            strict: Some(true),
        },
    };

    CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages([
            ChatCompletionRequestSystemMessage::from(prompt.instructions).into(),
            ChatCompletionRequestUserMessage::from(prompt.user_message).into(),
        ])
        .response_format(response_format)
        .build()
}

pub fn process_llm_response(
    response: CreateChatCompletionResponse,
) -> Result<TutorAnswer, AppError> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_ref())
        .ok_or(AppError::LLMParsing(
            "No content found in LLM response".into(),
        ))
        .and_then(|content| {
            serde_json::from_str::<TutorAnswer>(content).map_err(|e| {
                AppError::LLMParsing(format!("Failed to parse LLM response into answer: {e}"))
            })
        })
}
