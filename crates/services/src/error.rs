//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{RequestError, SessionError};

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    /// Transport error, non-success status, or an unreadable body.
    #[error("{0}")]
    NetworkFailure(String),
    /// The service answered but has nothing for these parameters.
    #[error("no questions available for these parameters")]
    NoQuestionsAvailable,
    /// Success status with an empty question list.
    #[error("the trivia service returned no questions")]
    EmptyResult,
}

impl FetchError {
    /// True for outcomes the user fixes by changing the quiz parameters.
    #[must_use]
    pub fn is_no_questions(&self) -> bool {
        matches!(self, Self::NoQuestionsAvailable | Self::EmptyResult)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkFailure(format!("failed to fetch questions: {err}"))
    }
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl QuizServiceError {
    /// Empty sessions are reported the same way as an explicit "no questions".
    #[must_use]
    pub fn is_no_questions(&self) -> bool {
        match self {
            Self::Fetch(err) => err.is_no_questions(),
            Self::Session(SessionError::Empty) => true,
            _ => false,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
