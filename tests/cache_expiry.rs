//! Cache timing integration tests
//!
//! Exercises the cache together with its background sweeper in real time:
//! freshness inside the window, sweep-driven removal after it, bounded
//! residency of stale entries, and the sweeper's shutdown and handle-drop
//! behavior.

use std::time::Duration;

use bestiary::cache::Cache;

#[tokio::test]
async fn test_entry_is_served_fresh_and_swept_stale() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(100));

    cache.add("area-1".to_string(), b"payload".to_vec()).await;

    // Half a window in: still fresh, still served.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.get("area-1").await, Some(b"payload".to_vec()));

    // Past two sweep cycles: guaranteed gone.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(cache.get("area-1").await, None);

    sweeper.shutdown().await;
}

#[tokio::test]
async fn test_idle_cache_drains_completely() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(60));

    for i in 0..8u8 {
        cache.add(format!("key-{i}"), vec![i]).await;
    }
    assert_eq!(cache.len().await, 8);

    // No further activity: within two windows every entry must have aged
    // out and been swept. Nothing lives longer than twice the window.
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(cache.is_empty().await);
    for i in 0..8u8 {
        assert_eq!(cache.get(&format!("key-{i}")).await, None);
    }

    sweeper.shutdown().await;
}

#[tokio::test]
async fn test_replacing_a_key_resets_its_clock() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(120));

    cache.add("k".to_string(), b"first".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(80)).await;
    cache.add("k".to_string(), b"second".to_vec()).await;

    // The first write would be 160ms old here, but the replacement is only
    // 80ms old and its clock governs: the sweep at ~120ms kept it.
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(cache.get("k").await, Some(b"second".to_vec()));

    // One more window and the replacement ages out too.
    tokio::time::sleep(Duration::from_millis(140)).await;
    assert_eq!(cache.get("k").await, None);

    sweeper.shutdown().await;
}

#[tokio::test]
async fn test_entries_outlive_the_window_after_shutdown() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(50));
    sweeper.shutdown().await;

    cache.add("k".to_string(), b"v".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    // Reads never check age and the sweeper is gone, so the stale entry
    // keeps being served.
    assert_eq!(cache.get("k").await, Some(b"v".to_vec()));
}

#[tokio::test]
async fn test_discarded_handle_does_not_stop_eviction() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(50));
    drop(sweeper);

    cache.add("k".to_string(), b"v".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(250)).await;

    // Losing the handle forfeits the shutdown call, not the sweeper: the
    // entry still ages out on schedule.
    assert_eq!(cache.get("k").await, None);
}

#[tokio::test]
async fn test_concurrent_callers_and_sweeper_stay_consistent() {
    let (cache, sweeper) = Cache::new(Duration::from_millis(40));

    let mut tasks = Vec::new();
    for worker in 0..8u8 {
        let cache = cache.clone();
        tasks.push(tokio::spawn(async move {
            for round in 0..50u32 {
                let key = format!("worker-{worker}-{}", round % 5);
                let payload = key.clone().into_bytes();
                cache.add(key.clone(), payload.clone()).await;

                // A read may race the sweeper and miss, but a present value
                // must always be the one written under this key.
                if let Some(read) = cache.get(&key).await {
                    assert_eq!(read, payload, "foreign payload under {key}");
                }
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }));
    }

    for task in tasks {
        task.await.expect("cache worker panicked");
    }

    sweeper.shutdown().await;
}
