use reqwest::Client;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use volley_core::{RequestOutcome, RunConfig};

/// Launches `config.concurrency` independent request tasks and returns the
/// channel they report into.
///
/// The channel is bounded to exactly the burst size, so a live collector can
/// never make a sender wait. Tasks are fire-and-forget: nothing joins them,
/// their only product is the outcome message.
pub(crate) fn dispatch(client: &Client, config: &RunConfig) -> mpsc::Receiver<RequestOutcome> {
    let (tx, rx) = mpsc::channel(config.concurrency);

    for _ in 0..config.concurrency {
        let client = client.clone();
        let url = config.url.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let start = Instant::now();
            let outcome = match client.get(url).send().await {
                // Any response counts, whatever the status; the body is
                // dropped unread.
                Ok(response) => {
                    let latency = start.elapsed();
                    debug!(status = %response.status(), ?latency, "request complete");
                    RequestOutcome::Success(latency)
                }
                Err(err) => {
                    warn!(%err, "request failed");
                    RequestOutcome::Failure
                }
            };

            // Non-blocking on purpose: an outcome arriving after the run
            // deadline finds the receiver gone and is dropped.
            if tx.try_send(outcome).is_err() {
                debug!("collector gone, dropping late outcome");
            }
        });
    }

    rx
}
