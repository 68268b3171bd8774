mod utils;
use utils::init;

use std::time::Duration;
use volley::RunConfig;

#[tokio::test]
async fn single_request_against_fixed_delay() {
    init();

    let addr = mock_service::spawn().await.unwrap();
    let config = RunConfig::new(&format!("http://{addr}/delay/ms/100"), 1, 0).unwrap();

    let stats = volley::run(&config).await.unwrap();

    assert_eq!(stats.success_count, 1);
    assert_eq!(stats.failure_count, 0);
    // One sample, so the three metrics collapse into it.
    assert_eq!(stats.longest, stats.shortest);
    assert_eq!(stats.average, stats.longest);
    assert!(stats.shortest.unwrap() >= Duration::from_millis(100));
    assert!(stats.total_elapsed >= Duration::from_millis(100));
}

#[tokio::test]
async fn every_request_is_accounted_for() {
    init();

    let addr = mock_service::spawn().await.unwrap();
    let config = RunConfig::new(&format!("http://{addr}/delay/ms/10"), 25, 0).unwrap();

    let stats = volley::run(&config).await.unwrap();

    assert_eq!(stats.success_count + stats.failure_count, 25);
    assert_eq!(stats.success_count, 25);

    let (shortest, average, longest) = (
        stats.shortest.unwrap(),
        stats.average.unwrap(),
        stats.longest.unwrap(),
    );
    assert!(shortest <= average);
    assert!(average <= longest);
    assert!(shortest >= Duration::from_millis(10));
}

#[tokio::test]
async fn timeout_does_not_disturb_a_healthy_run() {
    init();

    let addr = mock_service::spawn().await.unwrap();
    let config = RunConfig::new(&format!("http://{addr}/"), 2, 1).unwrap();

    let stats = volley::run(&config).await.unwrap();

    assert_eq!(stats.success_count, 2);
    assert_eq!(stats.failure_count, 0);
}

#[tokio::test]
async fn non_2xx_status_still_counts_as_success() {
    init();

    let addr = mock_service::spawn().await.unwrap();
    let config = RunConfig::new(&format!("http://{addr}/status/503"), 3, 0).unwrap();

    let stats = volley::run(&config).await.unwrap();

    assert_eq!(stats.success_count, 3);
    assert_eq!(stats.failure_count, 0);
}
