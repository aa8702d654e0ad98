pub mod answer;
pub mod context;
pub mod documents;
pub mod instructions;
pub mod model;
pub mod prompt;
pub mod tutor;

pub use answer::{SourceRef, TutorAnswer};
pub use documents::DocumentProvider;
pub use instructions::InstructionsProvider;
pub use model::{OpenAiTutorModel, TutorModel, TutorPrompt};
pub use tutor::TutorFlow;
