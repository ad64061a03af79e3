use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("correct answer is not among the answer choices")]
    MissingCorrectAnswer,

    #[error("correct answer appears {count} times among the answer choices")]
    DuplicateCorrectAnswer { count: usize },
}

//
// ─── RAW QUESTION ─────────────────────────────────────────────────────────────
//

/// A question exactly as the trivia API returns it, with HTML-encoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RawQuestion {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A decoded question with its answer order fixed.
///
/// `answer_choices` always holds exactly one entry equal to `correct_answer`,
/// so correctness is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    correct_answer: String,
    answer_choices: Vec<String>,
}

impl Question {
    /// Build a question from already-decoded text and a fixed answer order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` unless `correct_answer` occurs exactly once in `answer_choices`.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        answer_choices: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();
        match answer_choices
            .iter()
            .filter(|choice| **choice == correct_answer)
            .count()
        {
            0 => Err(QuestionError::MissingCorrectAnswer),
            1 => Ok(Self {
                prompt: prompt.into(),
                correct_answer,
                answer_choices,
            }),
            count => Err(QuestionError::DuplicateCorrectAnswer { count }),
        }
    }

    /// Constructor for callers that already uphold the single-occurrence invariant.
    pub(crate) fn from_normalized(
        prompt: String,
        correct_answer: String,
        answer_choices: Vec<String>,
    ) -> Self {
        debug_assert_eq!(
            answer_choices
                .iter()
                .filter(|choice| **choice == correct_answer)
                .count(),
            1
        );
        Self {
            prompt,
            correct_answer,
            answer_choices,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn answer_choices(&self) -> &[String] {
        &self.answer_choices
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
