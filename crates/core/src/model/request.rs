use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating the parameters of a new quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("question count must be between {min} and {max}, got {got}")]
    AmountOutOfRange { got: u32, min: u32, max: u32 },

    #[error("invalid question count: {0}")]
    InvalidAmount(String),
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// Trivia category, identified by the remote API's numeric id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(u32);

impl Category {
    pub const GENERAL_KNOWLEDGE: Self = Self(9);
    pub const MOVIES: Self = Self(11);
    pub const SCIENCE_AND_NATURE: Self = Self(17);
    pub const COMPUTERS: Self = Self(18);
    pub const SPORTS: Self = Self(21);
    pub const HISTORY: Self = Self(23);

    /// Categories offered on the setup screen, in display order.
    pub const OFFERED: [Self; 6] = [
        Self::GENERAL_KNOWLEDGE,
        Self::SCIENCE_AND_NATURE,
        Self::COMPUTERS,
        Self::SPORTS,
        Self::HISTORY,
        Self::MOVIES,
    ];

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Human readable label for the offered categories.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            9 => "General Knowledge",
            11 => "Movies",
            17 => "Science & Nature",
            18 => "Computers",
            21 => "Sports",
            23 => "History",
            _ => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::GENERAL_KNOWLEDGE
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| RequestError::InvalidCategory(s.to_string()))
    }
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wire value used in the remote API query string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(RequestError::InvalidDifficulty(s.to_string())),
        }
    }
}

//
// ─── SESSION REQUEST ──────────────────────────────────────────────────────────
//

/// Validated parameters for starting a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    category: Category,
    difficulty: Difficulty,
    amount: u32,
}

impl SessionRequest {
    /// Largest number of questions the trivia API returns per request.
    pub const MAX_AMOUNT: u32 = 50;
    pub const DEFAULT_AMOUNT: u32 = 5;
    /// Question counts offered on the setup screen.
    pub const OFFERED_AMOUNTS: [u32; 3] = [5, 10, 15];

    /// Counts above `MAX_AMOUNT` are clamped to it.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::AmountOutOfRange` if `amount` is zero.
    pub fn new(
        category: Category,
        difficulty: Difficulty,
        amount: u32,
    ) -> Result<Self, RequestError> {
        if amount == 0 {
            return Err(RequestError::AmountOutOfRange {
                got: amount,
                min: 1,
                max: Self::MAX_AMOUNT,
            });
        }
        Ok(Self {
            category,
            difficulty,
            amount: amount.min(Self::MAX_AMOUNT),
        })
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl Default for SessionRequest {
    fn default() -> Self {
        Self {
            category: Category::default(),
            difficulty: Difficulty::default(),
            amount: Self::DEFAULT_AMOUNT,
        }
    }
}
