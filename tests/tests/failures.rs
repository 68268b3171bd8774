mod utils;
use utils::init;

use std::time::{Duration, Instant};
use volley::RunConfig;

#[tokio::test]
async fn refused_connections_all_count_as_failures() {
    init();

    // Bind and immediately drop a listener to get an address that refuses.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RunConfig::new(&format!("http://{addr}/"), 5, 0).unwrap();
    let stats = volley::run(&config).await.unwrap();

    assert_eq!(stats.success_count, 0);
    assert_eq!(stats.failure_count, 5);
    assert_eq!(stats.average, None);
    assert_eq!(stats.shortest, None);
    assert_eq!(stats.longest, None);
    assert!(stats.to_string().contains("No successful requests"));
}

#[tokio::test]
async fn hanging_target_is_bounded_by_the_timeout() {
    init();

    let addr = mock_service::spawn().await.unwrap();
    let config = RunConfig::new(&format!("http://{addr}/hang"), 10, 1).unwrap();

    let started = Instant::now();
    let stats = volley::run(&config).await.unwrap();

    // The per-request timeout fires at ~1s; well before 3s either way.
    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(stats.success_count, 0);
    assert_eq!(stats.failure_count, 10);
}
