mod feedback;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use feedback::{DEFAULT_FEEDBACK_DELAY, PendingAdvance};
pub use service::{AnswerResult, QuizLoopService};
