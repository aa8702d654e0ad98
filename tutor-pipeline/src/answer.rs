use serde::{Deserialize, Serialize};

/// A document the model reports having drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub url: String,
}

/// Structured tutor reply, returned to callers exactly as the model produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorAnswer {
    pub answer: String,
    pub sources: Vec<SourceRef>,
}
