use std::time::Duration;

use crate::error::RequestError;

/// Classified result of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(u16),
    Timeout(String),
    Error(String),
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, RequestOutcome::Timeout(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, RequestOutcome::Error(_))
    }
}

impl From<Result<u16, RequestError>> for RequestOutcome {
    fn from(result: Result<u16, RequestError>) -> Self {
        match result {
            Ok(status) => RequestOutcome::Success(status),
            Err(err) if err.is_timeout() => RequestOutcome::Timeout(err.describe()),
            Err(err) => RequestOutcome::Error(err.describe()),
        }
    }
}

/// An outcome paired with its 1-based submission index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedOutcome {
    pub index: usize,
    pub outcome: RequestOutcome,
}

/// Outcomes of one batch in submission order, plus its wall-clock duration.
#[derive(Debug, Clone)]
pub struct BatchResult {
    outcomes: Vec<IndexedOutcome>,
    elapsed: Duration,
}

impl BatchResult {
    pub(crate) const fn new(outcomes: Vec<IndexedOutcome>, elapsed: Duration) -> Self {
        Self { outcomes, elapsed }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[IndexedOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn total_elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    #[must_use]
    pub fn successes(&self) -> usize {
        self.count(RequestOutcome::is_success)
    }

    #[must_use]
    pub fn timeouts(&self) -> usize {
        self.count(RequestOutcome::is_timeout)
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(RequestOutcome::is_error)
    }

    fn count(&self, predicate: fn(&RequestOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}
