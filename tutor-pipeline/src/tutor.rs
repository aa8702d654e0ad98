use std::sync::Arc;

use common::{error::AppError, utils::config::DEFAULT_TUTOR_DOCUMENT_CHAR_LIMIT};
use futures::future::join_all;
use knowledge_cache::KnowledgeCache;
use tracing::{info, instrument};

use crate::{
    answer::TutorAnswer,
    context::{build_context, ContextDocument},
    documents::DocumentProvider,
    instructions::InstructionsProvider,
    model::{TutorModel, TutorPrompt},
    prompt::{create_user_message, NO_KNOWLEDGE_BASE_ANSWER},
};

/// Answers questions from the text of every known document.
///
/// Holds no state of its own; each call reads a fresh snapshot of the document
/// collection and the preamble, and resolves text through the shared knowledge cache.
#[derive(Clone)]
pub struct TutorFlow {
    documents: Arc<dyn DocumentProvider>,
    cache: KnowledgeCache,
    model: Arc<dyn TutorModel>,
    instructions: Arc<dyn InstructionsProvider>,
    max_document_chars: usize,
}

impl TutorFlow {
    pub fn new(
        documents: Arc<dyn DocumentProvider>,
        cache: KnowledgeCache,
        model: Arc<dyn TutorModel>,
        instructions: Arc<dyn InstructionsProvider>,
    ) -> Self {
        Self {
            documents,
            cache,
            model,
            instructions,
            max_document_chars: DEFAULT_TUTOR_DOCUMENT_CHAR_LIMIT,
        }
    }

    pub fn with_max_document_chars(mut self, max_document_chars: usize) -> Self {
        self.max_document_chars = max_document_chars;
        self
    }

    pub fn cache(&self) -> &KnowledgeCache {
        &self.cache
    }

    /// Primary orchestrator for answering a student question.
    ///
    /// Only a failing model call fails the request. Documents whose text cannot be
    /// resolved are left out of the context.
    #[instrument(skip_all)]
    pub async fn ask(&self, question: &str) -> Result<TutorAnswer, AppError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::Validation("Question must not be empty".into()));
        }

        let documents = self.documents.list_documents().await?;
        if documents.is_empty() {
            info!("No documents in knowledge base, skipping model call");
            return Ok(TutorAnswer {
                answer: NO_KNOWLEDGE_BASE_ANSWER.to_string(),
                sources: Vec::new(),
            });
        }

        let texts = join_all(documents.iter().map(|doc| self.cache.get_text(&doc.url))).await;

        let context_documents: Vec<ContextDocument> = documents
            .into_iter()
            .zip(texts)
            .filter_map(|(doc, text)| {
                text.map(|text| ContextDocument {
                    title: doc.title,
                    url: doc.url,
                    text,
                })
            })
            .collect();

        info!(
            documents_in_context = context_documents.len(),
            "Assembled tutor context"
        );

        let context = build_context(&context_documents, self.max_document_chars);
        let prompt = TutorPrompt {
            instructions: self.instructions.tutor_instructions().await?,
            user_message: create_user_message(question, &context),
        };

        self.model.generate(prompt).await
    }
}
