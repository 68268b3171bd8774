use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::timeout_at;
use tracing::debug;
use volley_core::{RequestOutcome, RunConfig, RunStatistics, Tally};

/// Collects exactly `config.concurrency` outcomes, or as many as arrive
/// before the run deadline, and reduces them into the final statistics.
///
/// The configured timeout already bounds each request inside the HTTP
/// client; the deadline here is the run-wide backstop for tasks that never
/// report at all. Whatever is still outstanding when it fires counts as a
/// failure and stops being waited on.
pub(crate) async fn aggregate(
    mut outcomes: mpsc::Receiver<RequestOutcome>,
    config: &RunConfig,
    started: Instant,
) -> RunStatistics {
    let deadline = config
        .request_timeout
        .map(|timeout| tokio::time::Instant::from_std(started + timeout));

    let mut tally = Tally::new();
    let mut received = 0;

    while received < config.concurrency {
        let next = match deadline {
            Some(deadline) => match timeout_at(deadline, outcomes.recv()).await {
                Ok(next) => next,
                Err(_) => {
                    debug!(
                        outstanding = config.concurrency - received,
                        "run deadline elapsed"
                    );
                    break;
                }
            },
            None => outcomes.recv().await,
        };

        match next {
            Some(outcome) => {
                tally.record(outcome);
                received += 1;
            }
            // Every sender is gone without a full count; a task died before
            // reporting. Count the remainder as failures rather than hang.
            None => break,
        }
    }

    tally.record_missing((config.concurrency - received) as u64);
    tally.finish(started.elapsed())
}
