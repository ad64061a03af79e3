use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::QuestionNormalizer;
use quiz_core::model::{
    Advance, AdvanceTicket, QuizSession, RejectReason, SessionRequest, Submission,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::feedback::{DEFAULT_FEEDBACK_DELAY, PendingAdvance};
use crate::error::QuizServiceError;
use crate::trivia::QuestionSource;

/// Result of submitting an answer for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerResult {
    /// Scored; the caller schedules `pending` and then calls `finish_feedback`.
    Accepted { correct: bool, pending: PendingAdvance },
    /// Double submission or finished session; nothing changed.
    Ignored(RejectReason),
}

/// Orchestrates fetching, normalizing and stepping through a quiz.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuestionSource>,
    feedback_delay: Duration,
    shuffle_seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            shuffle_seed: None,
        }
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, feedback_delay: Duration) -> Self {
        self.feedback_delay = feedback_delay;
        self
    }

    /// Use a seeded RNG for answer order so runs are reproducible.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    /// Fetch questions for `request` and seed a new session with them.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Fetch` when the source fails and
    /// `QuizServiceError::Session` when it yields no questions.
    pub async fn start_session(
        &self,
        request: &SessionRequest,
    ) -> Result<QuizSession, QuizServiceError> {
        info!(
            category = request.category().id(),
            difficulty = %request.difficulty(),
            amount = request.amount(),
            "starting quiz session"
        );

        let raw = self.source.fetch(request).await.inspect_err(|err| {
            warn!(error = %err, "question fetch failed");
        })?;

        let questions = match self.shuffle_seed {
            Some(seed) => {
                QuestionNormalizer::with_rng(StdRng::seed_from_u64(seed)).normalize_all(&raw)
            }
            None => QuestionNormalizer::new().normalize_all(&raw),
        };

        let session = QuizSession::new(questions)?;
        info!(
            session_id = session.id(),
            total = session.total(),
            "quiz session ready"
        );
        Ok(session)
    }

    /// Submit `answer` for the current question.
    ///
    /// Scoring is applied immediately; the returned `PendingAdvance` only
    /// controls when the session moves on.
    pub fn answer_current(&self, session: &mut QuizSession, answer: &str) -> AnswerResult {
        match session.submit_answer(answer) {
            Submission::Accepted { correct, ticket } => {
                debug!(
                    session_id = session.id(),
                    index = ticket.index(),
                    correct,
                    "answer submitted"
                );
                AnswerResult::Accepted {
                    correct,
                    pending: PendingAdvance::new(ticket, self.feedback_delay),
                }
            }
            Submission::Rejected(reason) => {
                debug!(session_id = session.id(), ?reason, "answer ignored");
                AnswerResult::Ignored(reason)
            }
        }
    }

    /// Redeem the ticket of an elapsed `PendingAdvance`.
    pub fn finish_feedback(&self, session: &mut QuizSession, ticket: AdvanceTicket) -> Advance {
        let advance = session.advance(ticket);
        match advance {
            Advance::Completed(result) => info!(
                session_id = session.id(),
                score = result.score(),
                total = result.total(),
                "quiz completed"
            ),
            Advance::Next { index } => debug!(session_id = session.id(), index, "next question"),
            Advance::Ignored => debug!(session_id = session.id(), "stale advance ignored"),
        }
        advance
    }
}

impl fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("feedback_delay", &self.feedback_delay)
            .field("shuffle_seed", &self.shuffle_seed)
            .finish_non_exhaustive()
    }
}
