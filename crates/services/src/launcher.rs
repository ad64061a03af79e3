use quiz_core::model::{Category, Difficulty, RequestError, SessionRequest};
use url::form_urlencoded;

/// Maps setup-screen selections to a validated [`SessionRequest`].
///
/// Selections travel between screens as URL-style query strings
/// (`category=9&difficulty=medium&amount=5`); missing keys take the
/// setup-screen defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLauncher;

impl SessionLauncher {
    /// # Errors
    ///
    /// Returns `RequestError::AmountOutOfRange` for a zero question count.
    pub fn from_selection(
        category: Category,
        difficulty: Difficulty,
        amount: u32,
    ) -> Result<SessionRequest, RequestError> {
        SessionRequest::new(category, difficulty, amount)
    }

    /// Parse optional raw values, defaulting whatever is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when a present value does not parse.
    pub fn from_params(
        category: Option<&str>,
        difficulty: Option<&str>,
        amount: Option<&str>,
    ) -> Result<SessionRequest, RequestError> {
        let defaults = SessionRequest::default();

        let category = present(category)
            .map(str::parse::<Category>)
            .transpose()?
            .unwrap_or(defaults.category());
        let difficulty = present(difficulty)
            .map(str::parse::<Difficulty>)
            .transpose()?
            .unwrap_or(defaults.difficulty());
        let amount = match present(amount) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| RequestError::InvalidAmount(raw.to_string()))?,
            None => defaults.amount(),
        };

        SessionRequest::new(category, difficulty, amount)
    }

    /// Parse a query string such as `category=18&difficulty=hard&amount=10`.
    ///
    /// Unknown keys are ignored. A leading `?` is allowed.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when a known key carries an invalid value.
    pub fn from_query(query: &str) -> Result<SessionRequest, RequestError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut category = None;
        let mut difficulty = None;
        let mut amount = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" => category = Some(value.into_owned()),
                "difficulty" => difficulty = Some(value.into_owned()),
                "amount" => amount = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::from_params(
            category.as_deref(),
            difficulty.as_deref(),
            amount.as_deref(),
        )
    }

    /// Encode a request as the query string `from_query` reads back.
    #[must_use]
    pub fn to_query(request: &SessionRequest) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("category", &request.category().id().to_string())
            .append_pair("difficulty", request.difficulty().as_str())
            .append_pair("amount", &request.amount().to_string())
            .finish()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
