use quiz_core::model::{QuizResult, ResultTier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub percent: u32,
    pub message: &'static str,
    pub emoji: &'static str,
    pub tier_class: &'static str,
}

impl From<QuizResult> for ResultsVm {
    fn from(result: QuizResult) -> Self {
        let percent = result.percentage();
        let tier = result.tier();
        Self {
            score_label: format!("{}/{}", result.score(), result.total()),
            percent_label: format!("{percent}% correct"),
            percent,
            message: tier.message(),
            emoji: tier.emoji(),
            tier_class: tier_class(tier),
        }
    }
}

fn tier_class(tier: ResultTier) -> &'static str {
    match tier {
        ResultTier::Excellent => "tier excellent",
        ResultTier::WellDone => "tier well-done",
        ResultTier::NotBad => "tier not-bad",
        ResultTier::KeepPracticing => "tier keep-practicing",
    }
}

#[must_use]
pub fn map_results(score: usize, total: usize) -> ResultsVm {
    ResultsVm::from(QuizResult::new(score, total))
}
