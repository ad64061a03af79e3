mod open_tdb;
mod source;

pub use open_tdb::{OpenTdbSource, TriviaConfig};
pub use source::{InMemoryQuestionSource, QuestionSource};
