use quiz_core::model::{Advance, AdvanceTicket, QuizSession, SessionRequest};
use services::{AnswerResult, QuizLoopService};

use crate::views::ViewError;

/// How an answer button is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceFeedback {
    /// Waiting for an answer.
    Idle,
    /// Feedback is showing and this choice is neither correct nor picked.
    Neutral,
    Correct,
    Incorrect,
}

impl ChoiceFeedback {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "choice",
            Self::Neutral => "choice neutral",
            Self::Correct => "choice correct",
            Self::Incorrect => "choice incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    /// 1-based keyboard shortcut.
    pub shortcut: usize,
    pub feedback: ChoiceFeedback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub question_label: String,
    pub score_label: String,
    pub progress_percent: u32,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub locked: bool,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.is_feedback_active() || self.session.is_complete()
    }

    /// Snapshot of the current question, or `None` once the quiz is over.
    #[must_use]
    pub fn screen(&self) -> Option<QuizScreenVm> {
        let question = self.session.current_question()?;
        let feedback_active = self.session.is_feedback_active();
        let picked = self.session.pending_answer();

        let choices = question
            .answer_choices()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let feedback = if !feedback_active {
                    ChoiceFeedback::Idle
                } else if question.is_correct(text) {
                    ChoiceFeedback::Correct
                } else if picked == Some(text.as_str()) {
                    ChoiceFeedback::Incorrect
                } else {
                    ChoiceFeedback::Neutral
                };
                ChoiceVm {
                    text: text.clone(),
                    shortcut: idx + 1,
                    feedback,
                }
            })
            .collect();

        Some(QuizScreenVm {
            question_label: format!(
                "Question {} of {}",
                self.session.current_index() + 1,
                self.session.total()
            ),
            score_label: format!("Score: {}", self.session.score()),
            progress_percent: progress_percent(self.session.progress_fraction()),
            prompt: question.prompt().to_string(),
            choices,
            locked: feedback_active,
        })
    }

    /// Choice text bound to a number key, if any.
    #[must_use]
    pub fn answer_for_shortcut(&self, key: &str) -> Option<String> {
        let position = key.parse::<usize>().ok()?.checked_sub(1)?;
        self.session
            .current_question()?
            .answer_choices()
            .get(position)
            .cloned()
    }

    pub fn choose(&mut self, quiz_loop: &QuizLoopService, answer: &str) -> AnswerResult {
        quiz_loop.answer_current(&mut self.session, answer)
    }

    pub fn finish_feedback(&mut self, quiz_loop: &QuizLoopService, ticket: AdvanceTicket) -> Advance {
        quiz_loop.finish_feedback(&mut self.session, ticket)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// # Errors
///
/// Returns `ViewError::NoQuestions` when nothing came back for the request,
/// `ViewError::Network` with the transport message for fetch failures.
pub async fn start_quiz(
    quiz_loop: &QuizLoopService,
    request: &SessionRequest,
) -> Result<QuizVm, ViewError> {
    let session = quiz_loop
        .start_session(request)
        .await
        .map_err(|err| ViewError::from_service(&err))?;
    Ok(QuizVm::new(session))
}
