use std::fmt;

use serde::Serialize;

/// First message of every transcript.
pub const GREETING: &str = "Hello! I'm your Ethereum Assistant. I can help you understand blockchain transactions, fraud detection, and more. What would you like to know?";

const PRICE_RESPONSE: &str = "I monitor Ethereum prices in real-time through multiple reliable sources:\n\n\
• Live price updates every 30 seconds\n\
• Historical price trends analysis\n\
• Market volatility monitoring\n\
• Price alerts for suspicious movements\n\n\
Would you like to know more about how we use price data for fraud detection?";

const FRAUD_RESPONSE: &str = "Our fraud detection system uses multiple indicators to identify suspicious activities:\n\n\
• Unusual transaction patterns\n\
• Abnormal gas prices (>50 gwei)\n\
• Large transfers (>10 ETH)\n\
• Smart contract interactions\n\
• Known malicious addresses\n\n\
Would you like me to explain any of these indicators in detail?";

const SYSTEM_RESPONSE: &str = "Our system operates through several sophisticated components:\n\n\
1. Real-time blockchain monitoring\n\
2. Advanced pattern recognition\n\
3. Machine learning algorithms\n\
4. Smart contract analysis\n\
5. Network behavior tracking\n\n\
Which aspect would you like to learn more about?";

const GAS_RESPONSE: &str = "Gas prices are crucial indicators in our fraud detection:\n\n\
• Normal range: 15-50 gwei\n\
• Suspicious: >50 gwei\n\
• High priority: >100 gwei\n\n\
Abnormal gas prices often indicate:\n\
• Front-running attempts\n\
• MEV (Miner Extractable Value) activity\n\
• Priority transaction manipulation\n\n\
Would you like to see current gas price statistics?";

const TRANSACTION_RESPONSE: &str = "I analyze transactions based on several parameters:\n\n\
• Transaction value\n\
• Sender/receiver patterns\n\
• Transaction frequency\n\
• Smart contract interactions\n\
• Historical behavior\n\n\
I can help you understand specific transaction patterns or general monitoring approaches. What interests you?";

const SECURITY_RESPONSE: &str = "Our security measures include:\n\n\
• Real-time transaction monitoring\n\
• Pattern-based threat detection\n\
• Known scam address tracking\n\
• Smart contract vulnerability scanning\n\
• Automated alert systems\n\n\
Would you like specific security recommendations?";

const HELP_RESPONSE: &str = "I can assist you with:\n\n\
• Understanding transaction patterns\n\
• Analyzing suspicious activities\n\
• Monitoring gas prices\n\
• Tracking ETH price movements\n\
• Security recommendations\n\
• System functionality explanations\n\n\
What specific aspect would you like to explore?";

const DEFAULT_RESPONSE: &str = "I'm your Ethereum security assistant. I can help you understand:\n\n\
• Transaction monitoring\n\
• Fraud detection methods\n\
• Security measures\n\
• Price analysis\n\
• System functionality\n\n\
Feel free to ask about any of these topics!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Price,
    Fraud,
    System,
    Gas,
    Transaction,
    Security,
    Help,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Price => "price",
            Topic::Fraud => "fraud",
            Topic::System => "system",
            Topic::Gas => "gas",
            Topic::Transaction => "transaction",
            Topic::Security => "security",
            Topic::Help => "help",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
    response: &'static str,
}

/// Evaluated top to bottom; the first rule with any keyword contained in the
/// lower-cased input wins, even when later rules would also match.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Price,
        keywords: &["price", "eth", "cost"],
        response: PRICE_RESPONSE,
    },
    Rule {
        topic: Topic::Fraud,
        keywords: &["fraud", "suspicious", "detect"],
        response: FRAUD_RESPONSE,
    },
    Rule {
        topic: Topic::System,
        keywords: &["how", "work", "system"],
        response: SYSTEM_RESPONSE,
    },
    Rule {
        topic: Topic::Gas,
        keywords: &["gas"],
        response: GAS_RESPONSE,
    },
    Rule {
        topic: Topic::Transaction,
        keywords: &["transaction", "transfer"],
        response: TRANSACTION_RESPONSE,
    },
    Rule {
        topic: Topic::Security,
        keywords: &["security", "safe", "protect"],
        response: SECURITY_RESPONSE,
    },
    Rule {
        topic: Topic::Help,
        keywords: &["help", "what", "can you"],
        response: HELP_RESPONSE,
    },
];

/// Topic of the first matching rule, `None` if nothing matches.
pub fn match_topic(text: &str) -> Option<Topic> {
    find_rule(text).map(|rule| rule.topic)
}

/// Canned reply for a user message. Pure; never fails.
pub fn respond(text: &str) -> &'static str {
    find_rule(text)
        .map(|rule| rule.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

fn find_rule(text: &str) -> Option<&'static Rule> {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
}
