mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use eth_monitor::ethereum::{RpcBlock, RpcError};
use eth_monitor::models::SuspicionReason;
use eth_monitor::services::{
    poll_block_once, poll_price_once, BlockSource, Monitor, MonitorIntervals, PollError,
};

use common::{
    new_store, rpc_block, rpc_tx, seven_tx_block, FakeBlockSource, FakeQuoteSource, ONE_ETH_WEI,
    ONE_GWEI_WEI,
};

#[tokio::test]
async fn test_seven_tx_block_end_to_end() {
    let store = new_store();
    let source = FakeBlockSource::serving(seven_tx_block(19_000_000), 19_000_000);

    let outcome = poll_block_once(&source, &store).await.expect("poll should succeed");
    assert_eq!(outcome.block, 19_000_000);
    assert_eq!(outcome.classified, 5);
    assert_eq!(outcome.suspicious, 2);

    let feed = store.feed().await;
    assert_eq!(feed.transactions.len(), 5);

    let first = &feed.transactions[0];
    assert!(first.is_suspicious());
    assert_eq!(first.reason(), Some(SuspicionReason::Value));
    assert_eq!(first.value_eth(), Decimal::from(15));

    let second = &feed.transactions[1];
    assert!(second.is_suspicious());
    assert_eq!(second.reason(), Some(SuspicionReason::GasPrice));
    assert_eq!(second.gas_price_gwei(), Decimal::from(80));

    assert!(feed.transactions[2..].iter().all(|tx| !tx.is_suspicious()));

    // 15 + 1 + 1 + 1 + 1
    assert_eq!(feed.aggregates.volume_eth, Decimal::from(19));
    assert_eq!(feed.aggregates.suspicious, 2);
    assert_eq!(feed.aggregates.normal, 3);

    let chart = store.chart().await;
    assert_eq!(chart.len(), 1);
    assert_eq!(chart[0].value_eth, Decimal::from(15));
    assert_eq!(chart[0].gas_price_gwei, Decimal::from(20));
    assert_eq!(chart[0].observed_at, first.observed_at());

    assert_eq!(store.latest_block().await, Some(19_000_000));
}

#[tokio::test]
async fn test_repeated_polls_window_the_feed_and_chart() {
    let store = new_store();
    let source = FakeBlockSource::serving(seven_tx_block(100), 100);

    for _ in 0..3 {
        poll_block_once(&source, &store).await.unwrap();
    }

    // Same block three times: no hash dedup, feed capped at 10
    let feed = store.feed().await;
    assert_eq!(feed.transactions.len(), 10);
    assert_eq!(feed.transactions[0].value_eth(), Decimal::from(15));
    assert_eq!(feed.transactions[5].value_eth(), Decimal::from(15));
    assert_eq!(
        feed.aggregates.suspicious + feed.aggregates.normal,
        feed.transactions.len()
    );

    // One chart point per poll
    assert_eq!(store.chart().await.len(), 3);
}

#[tokio::test]
async fn test_failures_leave_windows_and_price_untouched() {
    let store = new_store();
    let good = FakeBlockSource::serving(seven_tx_block(100), 100);
    poll_block_once(&good, &store).await.unwrap();
    poll_price_once(&FakeQuoteSource { price: Some(Decimal::from(250_000)) }, &store)
        .await
        .unwrap();

    let before = store.snapshot().await;

    // Provider down
    let err = poll_block_once(&FakeBlockSource::failing(), &store).await;
    assert!(matches!(err, Err(PollError::Rpc(_))));

    // Block number known but block missing
    let no_block = FakeBlockSource {
        block: None,
        ..FakeBlockSource::serving(rpc_block(101, vec![]), 101)
    };
    assert!(matches!(
        poll_block_once(&no_block, &store).await,
        Err(PollError::Rpc(_))
    ));

    // One malformed transaction abandons the whole batch
    let mut txs: Vec<_> = (0..3).map(|i| rpc_tx(i, ONE_ETH_WEI, ONE_GWEI_WEI)).collect();
    txs[1].gas_price = Some("0xnothex".into());
    let malformed = FakeBlockSource::serving(rpc_block(102, txs), 102);
    assert!(matches!(
        poll_block_once(&malformed, &store).await,
        Err(PollError::Classify(_))
    ));

    // Price endpoint failure
    assert!(poll_price_once(&FakeQuoteSource { price: None }, &store)
        .await
        .is_err());

    let after = store.snapshot().await;
    assert_eq!(after.feed.transactions, before.feed.transactions);
    assert_eq!(after.feed.aggregates, before.feed.aggregates);
    assert_eq!(after.chart, before.chart);
    assert_eq!(after.price, before.price);
}

#[tokio::test]
async fn test_price_placeholder_until_first_success() {
    let store = new_store();

    assert!(poll_price_once(&FakeQuoteSource { price: None }, &store)
        .await
        .is_err());
    assert_eq!(store.price().await.display, "0.00");

    let quote = poll_price_once(
        &FakeQuoteSource {
            price: Some(Decimal::new(23456789, 2)),
        },
        &store,
    )
    .await
    .unwrap();
    assert_eq!(quote.display, "2,34,567.89");
    assert_eq!(store.price().await, quote);
}

#[tokio::test]
async fn test_non_ascii_sender_is_classified_not_fatal() {
    // Suspicious transactions are formatted into an INFO event, so make sure
    // one is actually rendered.
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish(),
    );

    let store = new_store();
    let mut tx = rpc_tx(0, 15 * ONE_ETH_WEI, 20 * ONE_GWEI_WEI);
    tx.from = "0x123é4567890abcdef".into();
    let source = FakeBlockSource::serving(rpc_block(9, vec![tx]), 9);

    let outcome = poll_block_once(&source, &store).await.unwrap();
    assert_eq!(outcome.suspicious, 1);

    let feed = store.feed().await;
    assert_eq!(feed.transactions[0].from(), "0x123é4567890abcdef");
}

#[tokio::test]
async fn test_empty_block_adds_nothing() {
    let store = new_store();
    let source = FakeBlockSource::serving(rpc_block(7, vec![]), 7);

    let outcome = poll_block_once(&source, &store).await.unwrap();
    assert_eq!(outcome.classified, 0);
    assert!(store.feed().await.transactions.is_empty());
    assert!(store.chart().await.is_empty());
    assert_eq!(store.latest_block().await, Some(7));
}

#[tokio::test(start_paused = true)]
async fn test_monitor_runs_timers_until_shutdown() {
    let store = new_store();
    let blocks = Arc::new(FakeBlockSource::serving(seven_tx_block(1), 1));

    let monitor = Monitor::start(
        ArcSource(blocks.clone()),
        FakeQuoteSource {
            price: Some(Decimal::from(200_000)),
        },
        store.clone(),
        MonitorIntervals::default(),
    );

    // Immediate first poll, then one more at 15s
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(store.snapshot().await.loading);
    assert_eq!(store.chart().await.len(), 1);
    assert_eq!(store.price().await.display, "2,00,000");

    tokio::time::sleep(Duration::from_secs(15)).await;
    let snapshot = store.snapshot().await;
    assert!(!snapshot.loading);
    assert!(!snapshot.time.is_empty());
    assert_eq!(snapshot.chart.len(), 2);

    monitor.shutdown().await;
    let polls = blocks.calls.load(Ordering::SeqCst);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(blocks.calls.load(Ordering::SeqCst), polls);
    assert_eq!(store.chart().await.len(), 2);
}

/// Lets the test keep a handle on the fake after the monitor takes ownership.
struct ArcSource(Arc<FakeBlockSource>);

impl BlockSource for ArcSource {
    async fn fetch_block_number(&self) -> Result<u64, RpcError> {
        self.0.fetch_block_number().await
    }

    async fn fetch_block(&self, number: u64) -> Result<RpcBlock, RpcError> {
        self.0.fetch_block(number).await
    }
}
