use serde::{Deserialize, Serialize};

/// One Nifty index row as served by `/api/stocks/nifty-indices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexQuote {
    pub name: String,
    pub current_value: f64,
    pub change_value: f64,
    pub change_percent: f64,
    #[serde(default, alias = "isPositive")]
    pub is_positive: bool,
}

/// Aggregate market analysis from `/api/stocks/analysis`. Read-only on the
/// client; refreshed only by full re-fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketAnalysis {
    #[serde(default)]
    pub date: Option<String>,
    pub bullish_sentiment: f64,
    pub bearish_sentiment: f64,
    pub market_trend: String,
    #[serde(default)]
    pub fear_greed_index: Option<f64>,
    #[serde(default)]
    pub volatility_index: Option<String>,
    #[serde(default, rename = "technicalIndicators")]
    pub technical_indicators: Vec<TechnicalIndicator>,
    #[serde(default)]
    pub sectors: Vec<SectorPerformance>,
    #[serde(default, rename = "keyLevels")]
    pub key_levels: Option<KeyLevels>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalIndicator {
    pub ticker: String,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub moving_avg_50: Option<f64>,
    #[serde(default)]
    pub moving_avg_200: Option<f64>,
    #[serde(default)]
    pub bollinger_upper: Option<f64>,
    #[serde(default)]
    pub bollinger_lower: Option<f64>,
    #[serde(default)]
    pub support_level: Option<f64>,
    #[serde(default)]
    pub resistance_level: Option<f64>,
    #[serde(default)]
    pub analysis_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub name: String,
    #[serde(default)]
    pub performance: Option<f64>,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub analysis_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyLevels {
    #[serde(default)]
    pub support: Option<f64>,
    #[serde(default)]
    pub resistance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_quote_accepts_both_positive_spellings() {
        let snake = json!({
            "name": "NIFTY 50",
            "current_value": 24010.6,
            "change_value": 120.4,
            "change_percent": 0.5,
            "is_positive": true
        });
        let camel = json!({
            "name": "NIFTY BANK",
            "current_value": 51230.1,
            "change_value": -80.0,
            "change_percent": -0.16,
            "isPositive": false
        });

        let a: IndexQuote = serde_json::from_value(snake).unwrap();
        let b: IndexQuote = serde_json::from_value(camel).unwrap();
        assert!(a.is_positive);
        assert!(!b.is_positive);
    }

    #[test]
    fn analysis_tolerates_missing_optional_sections() {
        let v = json!({
            "bullish_sentiment": 61.0,
            "bearish_sentiment": 39.0,
            "market_trend": "Bullish"
        });

        let parsed: MarketAnalysis = serde_json::from_value(v).unwrap();
        assert!(parsed.sectors.is_empty());
        assert!(parsed.technical_indicators.is_empty());
        assert!(parsed.key_levels.is_none());
    }
}
