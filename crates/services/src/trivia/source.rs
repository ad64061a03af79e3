use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::model::{RawQuestion, SessionRequest};

use crate::error::FetchError;

/// Remote source of trivia questions.
///
/// One call issues one request; implementations never retry.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `FetchError::NetworkFailure` for transport problems and
    /// `FetchError::NoQuestionsAvailable` / `FetchError::EmptyResult` when the
    /// service has nothing for the requested parameters.
    async fn fetch(&self, request: &SessionRequest) -> Result<Vec<RawQuestion>, FetchError>;
}

/// Canned question source for tests and offline demos.
#[derive(Debug)]
pub struct InMemoryQuestionSource {
    response: Result<Vec<RawQuestion>, FetchError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<SessionRequest>>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn with_questions(questions: Vec<RawQuestion>) -> Self {
        Self::with_response(Ok(questions))
    }

    #[must_use]
    pub fn failing(error: FetchError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Vec<RawQuestion>, FetchError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of `fetch` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_request(&self) -> Option<SessionRequest> {
        self.last_request.lock().ok().and_then(|guard| *guard)
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch(&self, request: &SessionRequest) -> Result<Vec<RawQuestion>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(*request);
        }
        self.response.clone()
    }
}
