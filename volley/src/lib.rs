//! Concurrent HTTP GET burst probe.
//!
//! A run fires `concurrency` independent GET requests at one URL, measures
//! each request's latency, and reduces the outcomes into a single
//! [`RunStatistics`]. Request tasks never share mutable state; every outcome
//! travels through a bounded channel and only the collecting side performs
//! the reduction.

mod aggregator;
mod dispatcher;

pub use volley_core::{ConfigError, RequestOutcome, RunConfig, RunStatistics};

use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Executes one full run: dispatch the burst, collect every outcome, return
/// the aggregate statistics. All-or-nothing; no partial results surface
/// before the run completes.
pub async fn run(config: &RunConfig) -> Result<RunStatistics, ProbeError> {
    info!(url = %config.url, concurrency = config.concurrency, "starting run");

    let client = build_client(config)?;
    let started = Instant::now();
    let outcomes = dispatcher::dispatch(&client, config);
    let stats = aggregator::aggregate(outcomes, config, started).await;

    info!(
        successes = stats.success_count,
        failures = stats.failure_count,
        "run complete"
    );
    Ok(stats)
}

fn build_client(config: &RunConfig) -> Result<reqwest::Client, ProbeError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
