use std::time::Duration;

/// The result of one dispatched request. Produced exactly once per task and
/// immutable from then on.
///
/// Any HTTP response counts as a success, whatever its status code; only
/// transport-level errors (connect failure, per-request timeout, protocol
/// error) are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(Duration),
    Failure,
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn latency(&self) -> Option<Duration> {
        match self {
            Self::Success(latency) => Some(*latency),
            Self::Failure => None,
        }
    }
}
