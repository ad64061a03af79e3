#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod launcher;
pub mod quiz;
pub mod trivia;

pub use app_services::{AppServices, QuizConfig};
pub use error::{AppServicesError, FetchError, QuizServiceError};
pub use launcher::SessionLauncher;
pub use quiz::{AnswerResult, DEFAULT_FEEDBACK_DELAY, PendingAdvance, QuizLoopService};
pub use trivia::{InMemoryQuestionSource, OpenTdbSource, QuestionSource, TriviaConfig};
