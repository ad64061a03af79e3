#![forbid(unsafe_code)]

pub mod error;
pub mod html;
pub mod model;
pub mod normalize;

pub use error::Error;
pub use html::decode_entities;
pub use normalize::{QuestionNormalizer, normalize_with};
