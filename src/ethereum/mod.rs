pub mod price_client;
pub mod rpc_client;
pub mod types;
pub mod units;

pub use price_client::{PriceClient, PriceClientError};
pub use rpc_client::{EthRpcClient, RpcError};
pub use types::{RpcBlock, RpcTransaction};
