use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppServicesError;
use crate::quiz::{DEFAULT_FEEDBACK_DELAY, QuizLoopService};
use crate::trivia::{OpenTdbSource, QuestionSource, TriviaConfig};

/// Runtime knobs for the quiz client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub trivia: TriviaConfig,
    pub feedback_delay: Duration,
}

impl QuizConfig {
    /// Trivia settings from the environment plus `QUIZ_FEEDBACK_DELAY_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        let feedback_delay = env::var("QUIZ_FEEDBACK_DELAY_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map_or(DEFAULT_FEEDBACK_DELAY, Duration::from_millis);
        Self {
            trivia: TriviaConfig::from_env(),
            feedback_delay,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            trivia: TriviaConfig::default(),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

/// Assembles app-facing services.
#[derive(Clone, Debug)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services that talk to the configured trivia endpoint.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::HttpClient` if the HTTP client cannot be built.
    pub fn from_config(config: &QuizConfig) -> Result<Self, AppServicesError> {
        let source = OpenTdbSource::new(config.trivia.clone())?;
        Ok(Self::with_source(Arc::new(source), config.feedback_delay))
    }

    /// Build services around any question source.
    #[must_use]
    pub fn with_source(source: Arc<dyn QuestionSource>, feedback_delay: Duration) -> Self {
        let quiz_loop =
            Arc::new(QuizLoopService::new(source).with_feedback_delay(feedback_delay));
        Self { quiz_loop }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
