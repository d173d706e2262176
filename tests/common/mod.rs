use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::broadcast;

use eth_monitor::api::ws_types::WsMessage;
use eth_monitor::dashboard::DashboardStore;
use eth_monitor::ethereum::{PriceClientError, RpcBlock, RpcError, RpcTransaction};
use eth_monitor::services::{BlockSource, QuoteSource};

#[allow(dead_code)]
pub const ONE_ETH_WEI: u128 = 1_000_000_000_000_000_000;
#[allow(dead_code)]
pub const ONE_GWEI_WEI: u128 = 1_000_000_000;

#[allow(dead_code)]
pub fn new_store() -> Arc<DashboardStore> {
    let (tx, _) = broadcast::channel::<WsMessage>(256);
    Arc::new(DashboardStore::new("inr", tx))
}

#[allow(dead_code)]
pub fn rpc_tx(index: usize, value_wei: u128, gas_wei: u128) -> RpcTransaction {
    RpcTransaction {
        hash: Some(format!("0x{index:064x}")),
        from: format!("0x{:040x}", 0xa000 + index),
        to: Some(format!("0x{:040x}", 0xb000 + index)),
        value: format!("{value_wei:#x}"),
        gas_price: Some(format!("{gas_wei:#x}")),
        max_fee_per_gas: None,
    }
}

#[allow(dead_code)]
pub fn rpc_block(number: u64, transactions: Vec<RpcTransaction>) -> RpcBlock {
    RpcBlock {
        number: format!("{number:#x}"),
        hash: Some(format!("0x{number:064x}")),
        transactions,
    }
}

/// Block of 7 transactions: tx[0] = 15 ETH @ 20 gwei, tx[1] = 1 ETH @ 80 gwei,
/// the rest 1 ETH @ 10 gwei.
#[allow(dead_code)]
pub fn seven_tx_block(number: u64) -> RpcBlock {
    let mut txs = vec![
        rpc_tx(0, 15 * ONE_ETH_WEI, 20 * ONE_GWEI_WEI),
        rpc_tx(1, ONE_ETH_WEI, 80 * ONE_GWEI_WEI),
    ];
    txs.extend((2..7).map(|i| rpc_tx(i, ONE_ETH_WEI, 10 * ONE_GWEI_WEI)));
    rpc_block(number, txs)
}

/// Serves a fixed block; `None` fields make the corresponding call fail.
#[allow(dead_code)]
pub struct FakeBlockSource {
    pub number: Option<u64>,
    pub block: Option<RpcBlock>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeBlockSource {
    pub fn serving(block: RpcBlock, number: u64) -> Self {
        Self {
            number: Some(number),
            block: Some(block),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            number: None,
            block: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl BlockSource for FakeBlockSource {
    async fn fetch_block_number(&self) -> Result<u64, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.number
            .ok_or_else(|| RpcError::Unexpected("provider unavailable".into()))
    }

    async fn fetch_block(&self, number: u64) -> Result<RpcBlock, RpcError> {
        self.block.clone().ok_or(RpcError::BlockNotFound(number))
    }
}

#[allow(dead_code)]
pub struct FakeQuoteSource {
    pub price: Option<Decimal>,
}

impl QuoteSource for FakeQuoteSource {
    fn currency(&self) -> &str {
        "inr"
    }

    async fn spot_price(&self) -> Result<Decimal, PriceClientError> {
        self.price.ok_or_else(|| PriceClientError::MissingQuote {
            coin: "ethereum".into(),
            currency: "inr".into(),
        })
    }
}
