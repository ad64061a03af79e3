mod question;
mod request;
mod result;
mod session;

pub use question::{Question, QuestionError, RawQuestion};
pub use request::{Category, Difficulty, RequestError, SessionRequest};
pub use result::{QuizResult, ResultTier};
pub use session::{
    Advance, AdvanceTicket, QuizSession, RejectReason, SessionError, SessionState, Submission,
};
