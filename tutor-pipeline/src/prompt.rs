use serde_json::{json, Value};

/// Returned without calling the model when no documents exist.
pub static NO_KNOWLEDGE_BASE_ANSWER: &str = "There are no study documents in the knowledge base yet, so I can't answer from course material. Ask an administrator to add documents and try again.";

pub fn create_user_message(question: &str, context: &str) -> String {
    format!(
        r"
        Student Question:
        ==================
        {question}

        Documents:
        ==================
        {context}
        "
    )
}

pub fn get_tutor_response_schema() -> Value {
    json!({
       "type": "object",
       "properties": {
           "answer": { "type": "string" },
           "sources": {
               "type": "array",
               "items": {
                   "type": "object",
                   "properties": {
                       "title": { "type": "string" },
                       "url": { "type": "string" },
                   },
               "required": ["title", "url"],
               "additionalProperties": false,
               }
           }
       },
       "required": ["answer", "sources"],
       "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_contains_question_and_context() {
        let message = create_user_message("What is a limit?", "Document: Week 1");

        let question_at = message.find("What is a limit?").expect("question");
        let context_at = message.find("Document: Week 1").expect("context");
        assert!(question_at < context_at);
    }

    #[test]
    fn test_schema_requires_answer_and_sources() {
        let schema = get_tutor_response_schema();

        assert_eq!(schema["required"], json!(["answer", "sources"]));
        assert_eq!(
            schema["properties"]["sources"]["items"]["required"],
            json!(["title", "url"])
        );
    }
}
