use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ArchitectureStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct StackEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct TechnicalStack {
    pub frontend: &'static [StackEntry],
    pub blockchain: &'static [StackEntry],
}

#[derive(Serialize)]
pub struct EthereumInfo {
    pub title: &'static str,
    pub overview: &'static str,
    pub architecture: &'static [ArchitectureStep],
    pub technical_stack: TechnicalStack,
    pub thresholds: Thresholds,
}

#[derive(Serialize)]
pub struct Thresholds {
    pub value_eth: String,
    pub gas_price_gwei: String,
}

const OVERVIEW: &str = "This system monitors Ethereum blockchain transactions in real-time, \
analyzing patterns to flag potentially fraudulent activity.";

const ARCHITECTURE: &[ArchitectureStep] = &[
    ArchitectureStep {
        title: "Web3 Connection",
        description: "Connects to Ethereum Mainnet through a JSON-RPC node provider",
    },
    ArchitectureStep {
        title: "Block Processing",
        description: "Fetches the latest block and its transactions every 15 seconds",
    },
    ArchitectureStep {
        title: "Transaction Analysis",
        description: "Converts value and gas price into ETH and gwei",
    },
    ArchitectureStep {
        title: "Fraud Detection",
        description: "Flags transactions above fixed value or gas price thresholds",
    },
    ArchitectureStep {
        title: "Data Visualization",
        description: "Streams the feed and chart series to dashboard clients",
    },
];

const FRONTEND_STACK: &[StackEntry] = &[
    StackEntry {
        name: "Typed UI framework",
        description: "Modern frontend framework with type safety",
    },
    StackEntry {
        name: "Utility CSS",
        description: "Utility-first CSS framework for responsive design",
    },
    StackEntry {
        name: "Charting",
        description: "Data visualization library for real-time charts",
    },
];

const BLOCKCHAIN_STACK: &[StackEntry] = &[
    StackEntry {
        name: "JSON-RPC client",
        description: "Ethereum JavaScript API for blockchain interaction",
    },
    StackEntry {
        name: "Node provider",
        description: "Reliable Ethereum network access and data retrieval",
    },
    StackEntry {
        name: "Transaction monitoring",
        description: "Real-time tracking and analysis of blockchain transactions",
    },
];

pub async fn ethereum_info() -> Json<EthereumInfo> {
    use crate::models::transaction::{SUSPICIOUS_GAS_PRICE_GWEI, SUSPICIOUS_VALUE_ETH};

    Json(EthereumInfo {
        title: "Ethereum Fraud Detection System",
        overview: OVERVIEW,
        architecture: ARCHITECTURE,
        technical_stack: TechnicalStack {
            frontend: FRONTEND_STACK,
            blockchain: BLOCKCHAIN_STACK,
        },
        thresholds: Thresholds {
            value_eth: SUSPICIOUS_VALUE_ETH.to_string(),
            gas_price_gwei: SUSPICIOUS_GAS_PRICE_GWEI.to_string(),
        },
    })
}
