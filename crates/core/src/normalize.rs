use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::html::decode_entities;
use crate::model::{Question, RawQuestion};

/// Turns API questions into decoded [`Question`]s with a shuffled answer order.
///
/// The RNG is a type parameter so tests can pass a seeded generator.
#[derive(Debug, Clone)]
pub struct QuestionNormalizer<R = ThreadRng> {
    rng: R,
}

impl QuestionNormalizer<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for QuestionNormalizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuestionNormalizer<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn normalize(&mut self, raw: &RawQuestion) -> Question {
        normalize_with(raw, &mut self.rng)
    }

    pub fn normalize_all(&mut self, raw: &[RawQuestion]) -> Vec<Question> {
        raw.iter().map(|question| self.normalize(question)).collect()
    }
}

/// Decode every text field and shuffle the answers with Fisher-Yates using `rng`.
///
/// Incorrect answers that decode to the same text as the correct answer
/// are dropped so the correct answer appears exactly once.
pub fn normalize_with<R: Rng + ?Sized>(raw: &RawQuestion, rng: &mut R) -> Question {
    let prompt = decode_entities(&raw.question).into_owned();
    let correct = decode_entities(&raw.correct_answer).into_owned();

    let mut choices = Vec::with_capacity(raw.incorrect_answers.len() + 1);
    choices.push(correct.clone());
    for incorrect in &raw.incorrect_answers {
        let decoded = decode_entities(incorrect).into_owned();
        if decoded == correct {
            warn!(answer = %decoded, "incorrect answer duplicates the correct one; dropped");
            continue;
        }
        choices.push(decoded);
    }
    choices.shuffle(rng);

    Question::from_normalized(prompt, correct, choices)
}
