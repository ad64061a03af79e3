use std::env;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{RawQuestion, SessionRequest};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::source::QuestionSource;
use crate::error::FetchError;

/// Connection settings for the Open Trivia DB client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl TriviaConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://opentdb.com";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Read `QUIZ_TRIVIA_BASE_URL` and `QUIZ_HTTP_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_TRIVIA_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        let timeout = env::var("QUIZ_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(Self::DEFAULT_TIMEOUT, Duration::from_secs);
        Self { base_url, timeout }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

/// `QuestionSource` backed by the Open Trivia DB HTTP API.
#[derive(Clone, Debug)]
pub struct OpenTdbSource {
    client: Client,
    config: TriviaConfig,
}

impl OpenTdbSource {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: TriviaConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/api.php", self.config.base_url.trim_end_matches('/'))
    }
}

/// Query parameters for one multiple-choice request.
fn request_query(request: &SessionRequest) -> [(&'static str, String); 4] {
    [
        ("amount", request.amount().to_string()),
        ("category", request.category().id().to_string()),
        ("difficulty", request.difficulty().as_str().to_string()),
        ("type", "multiple".to_string()),
    ]
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    async fn fetch(&self, request: &SessionRequest) -> Result<Vec<RawQuestion>, FetchError> {
        let url = self.endpoint();
        debug!(
            %url,
            category = request.category().id(),
            difficulty = %request.difficulty(),
            amount = request.amount(),
            "requesting trivia questions"
        );

        let response = self
            .client
            .get(url)
            .query(&request_query(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "trivia service returned non-success status");
            return Err(FetchError::NetworkFailure(format!(
                "trivia service responded with status {status}"
            )));
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body).map_err(|err| {
            FetchError::NetworkFailure(format!("unreadable trivia response: {err}"))
        })?;
        envelope.into_questions()
    }
}

//
// ─── WIRE FORMAT ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct Envelope {
    response_code: i64,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

impl Envelope {
    fn into_questions(self) -> Result<Vec<RawQuestion>, FetchError> {
        if self.response_code != 0 {
            debug!(response_code = self.response_code, "no questions for parameters");
            return Err(FetchError::NoQuestionsAvailable);
        }
        if self.results.is_empty() {
            warn!("trivia service reported success with no questions");
            return Err(FetchError::EmptyResult);
        }
        Ok(self.results)
    }
}
