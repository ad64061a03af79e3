use std::time::Duration;

use quiz_core::model::AdvanceTicket;

/// How long an answered question keeps showing its feedback.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// A deferred advance waiting out the feedback delay.
///
/// Awaiting [`PendingAdvance::elapsed`] is the scheduled half of a submission.
/// Dropping the future (or cancelling the task that polls it) abandons the
/// advance; the session then simply stays on the answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    ticket: AdvanceTicket,
    delay: Duration,
}

impl PendingAdvance {
    #[must_use]
    pub fn new(ticket: AdvanceTicket, delay: Duration) -> Self {
        Self { ticket, delay }
    }

    #[must_use]
    pub fn ticket(&self) -> AdvanceTicket {
        self.ticket
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the feedback delay, then hand back the ticket to redeem.
    pub async fn elapsed(self) -> AdvanceTicket {
        tokio::time::sleep(self.delay).await;
        self.ticket
    }
}
