use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{debug, trace};

use crate::model::{Question, QuizResult};

/// Source of session ids. Ids only need to be distinct within the process so a
/// ticket from a torn-down session cannot advance its replacement; nothing
/// else reads this counter and no session state lives outside `QuizSession`.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Externally visible state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active { index: usize, feedback_active: bool },
    Complete,
}

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    FeedbackActive,
    Complete,
}

/// Authorizes the single deferred transition that follows an accepted answer.
///
/// Tickets carry the issuing session's process-unique id, taken from a global
/// counter, so a timer that outlives its session is rejected by any later
/// session even when the question index matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    session_id: u64,
    index: usize,
}

impl AdvanceTicket {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Answer locked in; feedback is showing until the ticket is redeemed.
    Accepted { correct: bool, ticket: AdvanceTicket },
    Rejected(RejectReason),
}

impl Submission {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Completed(QuizResult),
    /// Ticket was stale, foreign, or already redeemed.
    Ignored,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Sequencing and scoring for one run through a fixed list of questions.
///
/// Scoring happens synchronously in [`QuizSession::submit_answer`]; the later
/// [`QuizSession::advance`] only moves the cursor.
pub struct QuizSession {
    id: u64,
    questions: Vec<Question>,
    current: usize,
    score: usize,
    pending_answer: Option<String>,
    feedback_active: bool,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        debug!(session_id = id, total = questions.len(), "quiz session created");
        Ok(Self {
            id,
            questions,
            current: 0,
            score: 0,
            pending_answer: None,
            feedback_active: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::Active {
                index: self.current,
                feedback_active: self.feedback_active,
            }
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn pending_answer(&self) -> Option<&str> {
        self.pending_answer.as_deref()
    }

    #[must_use]
    pub fn is_feedback_active(&self) -> bool {
        self.feedback_active
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// `(index + 1) / total` while active, `1.0` once complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        let total = self.questions.len();
        let shown = (self.current + 1).min(total);
        shown as f64 / total as f64
    }

    /// Final score, available once the session is complete.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_complete()
            .then(|| QuizResult::new(self.score, self.questions.len()))
    }

    /// Lock in an answer for the current question and score it.
    pub fn submit_answer(&mut self, answer: &str) -> Submission {
        if self.is_complete() {
            trace!(session_id = self.id, "submission after completion ignored");
            return Submission::Rejected(RejectReason::Complete);
        }
        if self.feedback_active {
            trace!(session_id = self.id, index = self.current, "submission during feedback ignored");
            return Submission::Rejected(RejectReason::FeedbackActive);
        }

        let correct = self.questions[self.current].is_correct(answer);
        self.pending_answer = Some(answer.to_string());
        self.feedback_active = true;
        if correct {
            self.score += 1;
        }
        trace!(
            session_id = self.id,
            index = self.current,
            correct,
            score = self.score,
            "answer scored"
        );

        Submission::Accepted {
            correct,
            ticket: AdvanceTicket {
                session_id: self.id,
                index: self.current,
            },
        }
    }

    /// Apply the deferred transition authorized by `ticket`.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Advance {
        if ticket.session_id != self.id
            || ticket.index != self.current
            || !self.feedback_active
            || self.is_complete()
        {
            trace!(session_id = self.id, ticket_index = ticket.index, "stale advance ignored");
            return Advance::Ignored;
        }

        self.pending_answer = None;
        self.feedback_active = false;
        self.current += 1;

        if self.is_complete() {
            let result = QuizResult::new(self.score, self.questions.len());
            debug!(
                session_id = self.id,
                score = result.score(),
                total = result.total(),
                "quiz session complete"
            );
            Advance::Completed(result)
        } else {
            Advance::Next {
                index: self.current,
            }
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("feedback_active", &self.feedback_active)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
