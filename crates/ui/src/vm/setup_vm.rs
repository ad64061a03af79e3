use quiz_core::model::{Category, Difficulty, RequestError, SessionRequest};
use services::SessionLauncher;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Selections on the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupForm {
    pub category: Category,
    pub difficulty: Difficulty,
    pub amount: u32,
}

impl Default for SetupForm {
    fn default() -> Self {
        let defaults = SessionRequest::default();
        Self {
            category: defaults.category(),
            difficulty: defaults.difficulty(),
            amount: defaults.amount(),
        }
    }
}

impl SetupForm {
    #[must_use]
    pub fn category_options(&self) -> Vec<OptionVm> {
        Category::OFFERED
            .iter()
            .map(|category| OptionVm {
                value: category.id().to_string(),
                label: category.label().to_string(),
                selected: *category == self.category,
            })
            .collect()
    }

    #[must_use]
    pub fn difficulty_options(&self) -> Vec<OptionVm> {
        Difficulty::ALL
            .iter()
            .map(|difficulty| OptionVm {
                value: difficulty.as_str().to_string(),
                label: difficulty.label().to_string(),
                selected: *difficulty == self.difficulty,
            })
            .collect()
    }

    #[must_use]
    pub fn amount_options(&self) -> Vec<OptionVm> {
        SessionRequest::OFFERED_AMOUNTS
            .iter()
            .map(|amount| OptionVm {
                value: amount.to_string(),
                label: format!("{amount} questions"),
                selected: *amount == self.amount,
            })
            .collect()
    }

    /// Apply a raw `<select>` value; unparsable input leaves the form unchanged.
    pub fn set_category(&mut self, raw: &str) {
        if let Ok(category) = raw.parse() {
            self.category = category;
        }
    }

    pub fn set_difficulty(&mut self, raw: &str) {
        if let Ok(difficulty) = raw.parse() {
            self.difficulty = difficulty;
        }
    }

    pub fn set_amount(&mut self, raw: &str) {
        if let Ok(amount) = raw.trim().parse() {
            self.amount = amount;
        }
    }

    /// Query string for the quiz route.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when the selected amount is out of range.
    pub fn launch_query(&self) -> Result<String, RequestError> {
        let request = SessionLauncher::from_selection(self.category, self.difficulty, self.amount)?;
        Ok(SessionLauncher::to_query(&request))
    }
}
