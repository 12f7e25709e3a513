use serde::{Deserialize, Serialize};

/// A single server-generated stock recommendation. Immutable on the client;
/// new picks arrive only through a full re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub ticker: String,
    pub company_name: String,
    #[serde(default)]
    pub sector: Option<String>,
    pub current_price: f64,
    pub target_price: f64,
    pub recommendation: Action,
    pub confidence_score: f64,
    pub timeframe: String,
    #[serde(default)]
    pub reasons: Option<String>,
    #[serde(default)]
    pub alert_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "HOLD")]
    Hold,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        }
    }
}
