use serde::{Deserialize, Serialize};

/// Final outcome of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    score: usize,
    total: usize,
}

impl QuizResult {
    /// Build a result, clamping `score` to `total`.
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of correct answers as a whole percentage, rounded half up.
    ///
    /// An empty quiz reports 0.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.score * 200 + self.total) / (self.total * 2);
        u32::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn tier(&self) -> ResultTier {
        ResultTier::from_percentage(self.percentage())
    }
}

/// Coarse grading band shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    WellDone,
    NotBad,
    KeepPracticing,
}

impl ResultTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::WellDone,
            40..=59 => Self::NotBad,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Excellent => "Excellent work!",
            ResultTier::WellDone => "Well done!",
            ResultTier::NotBad => "Not bad!",
            ResultTier::KeepPracticing => "Keep practicing!",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ResultTier::Excellent => "🏆",
            ResultTier::WellDone => "👏",
            ResultTier::NotBad => "👍",
            ResultTier::KeepPracticing => "💪",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(QuizResult::new(1, 3).percentage(), 33);
        assert_eq!(QuizResult::new(2, 3).percentage(), 67);
        assert_eq!(QuizResult::new(1, 8).percentage(), 13);
        assert_eq!(QuizResult::new(5, 5).percentage(), 100);
    }

    #[test]
    fn empty_quiz_has_zero_percent() {
        let result = QuizResult::new(0, 0);
        assert_eq!(result.percentage(), 0);
        assert_eq!(result.tier(), ResultTier::KeepPracticing);
    }

    #[test]
    fn score_is_clamped_to_total() {
        let result = QuizResult::new(7, 5);
        assert_eq!(result.score(), 5);
        assert_eq!(result.percentage(), 100);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ResultTier::from_percentage(80), ResultTier::Excellent);
        assert_eq!(ResultTier::from_percentage(79), ResultTier::WellDone);
        assert_eq!(ResultTier::from_percentage(60), ResultTier::WellDone);
        assert_eq!(ResultTier::from_percentage(40), ResultTier::NotBad);
        assert_eq!(ResultTier::from_percentage(39), ResultTier::KeepPracticing);
    }
}
