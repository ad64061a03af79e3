use dioxus::prelude::*;
use quiz_core::model::RequestError;
use services::QuizServiceError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Fetch failed; carries the transport message verbatim.
    Network(String),
    NoQuestions,
    InvalidRequest(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &QuizServiceError) -> Self {
        if err.is_no_questions() {
            return Self::NoQuestions;
        }
        match err {
            QuizServiceError::Fetch(fetch) => Self::Network(fetch.to_string()),
            QuizServiceError::Request(request) => Self::InvalidRequest(request.to_string()),
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn from_request(err: &RequestError) -> Self {
        Self::InvalidRequest(err.to_string())
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Unknown => "Could not load the quiz",
            Self::NoQuestions => "No questions found",
            Self::InvalidRequest(_) => "Invalid quiz settings",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Network(message) | Self::InvalidRequest(message) => message.clone(),
            Self::NoQuestions => {
                "Try a different category, difficulty, or number of questions.".to_string()
            }
            Self::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
