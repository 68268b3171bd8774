//! Mock HTTP target for exercising the probe: answers instantly, after a
//! configurable delay, with an arbitrary status, or never.
use axum::{debug_handler, extract::Path, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::error;

pub fn router() -> Router {
    Router::new()
        .route("/", get(ok))
        .route("/delay/ms/:delay_ms", get(delay))
        .route("/status/:code", get(status))
        .route("/hang", get(hang))
}

pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Binds an ephemeral port and serves in a background task. Tests use this
/// instead of fixed addresses so they can run in parallel.
pub async fn spawn() -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router()).await {
            error!(%err, "mock service exited");
        }
    });

    Ok(addr)
}

#[debug_handler]
async fn ok() {}

#[debug_handler]
async fn delay(Path(delay_ms): Path<u64>) {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

#[debug_handler]
async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

/// Accepts the request and then never responds.
#[debug_handler]
async fn hang() {
    std::future::pending::<()>().await
}
