use crate::RequestOutcome;
use humantime::format_duration;
use std::fmt;
use std::time::Duration;

/// Running reduction over the outcomes of a run. Only ever touched by the
/// single collecting task; the request tasks communicate exclusively through
/// the outcome channel.
#[derive(Debug, Default)]
pub struct Tally {
    // `None` until the first success lands. A plain zero would misclassify a
    // legitimately instant response as "unset".
    shortest: Option<Duration>,
    longest: Option<Duration>,
    total: Duration,
    success_count: u64,
    failure_count: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success(latency) => {
                self.longest = Some(self.longest.map_or(latency, |cur| cur.max(latency)));
                self.shortest = Some(self.shortest.map_or(latency, |cur| cur.min(latency)));
                self.total += latency;
                self.success_count += 1;
            }
            RequestOutcome::Failure => self.failure_count += 1,
        }
    }

    /// Counts requests that never reported before the run deadline.
    pub fn record_missing(&mut self, count: u64) {
        self.failure_count += count;
    }

    pub fn finish(self, total_elapsed: Duration) -> RunStatistics {
        let average = if self.success_count > 0 {
            let nanos = self.total.as_nanos() / u128::from(self.success_count);
            Some(Duration::from_nanos(nanos as u64))
        } else {
            None
        };

        RunStatistics {
            longest: self.longest,
            shortest: self.shortest,
            average,
            success_count: self.success_count,
            failure_count: self.failure_count,
            total_elapsed,
        }
    }
}

/// Aggregate statistics for one completed run. Built once, after every
/// outcome is accounted for.
///
/// The latency fields are `None` when no request succeeded; there is no
/// meaningful average over an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatistics {
    pub longest: Option<Duration>,
    pub shortest: Option<Duration>,
    pub average: Option<Duration>,
    pub success_count: u64,
    pub failure_count: u64,
    pub total_elapsed: Duration,
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.longest, self.shortest, self.average) {
            (Some(longest), Some(shortest), Some(average)) => {
                writeln!(f, "Longest query time: {}", format_duration(longest))?;
                writeln!(f, "Shortest query time: {}", format_duration(shortest))?;
                writeln!(f, "Average query time: {}", format_duration(average))?;
            }
            _ => {
                writeln!(f, "No successful requests; query times unavailable")?;
            }
        }
        writeln!(f, "Number of successful requests: {}", self.success_count)?;
        writeln!(f, "Number of unsuccessful requests: {}", self.failure_count)?;
        write!(
            f,
            "Total elapsed time: {}",
            format_duration(self.total_elapsed)
        )
    }
}
