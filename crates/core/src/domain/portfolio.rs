use serde::{Deserialize, Serialize};
use std::fmt;

/// One holding row as served by `/api/stock/portfolio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHolding {
    #[serde(default)]
    pub id: Option<i64>,
    pub ticker: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub nifty_group: Option<String>,
    #[serde(default)]
    pub buy_price: f64,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub invested_amount: f64,
    #[serde(default)]
    pub change_value: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default, alias = "isPositive")]
    pub is_positive: bool,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Holdings plus the server-computed totals from the portfolio envelope.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSummary {
    pub holdings: Vec<PortfolioHolding>,
    pub total_invested: f64,
    pub total_current: f64,
    pub total_change: f64,
    pub total_change_percent: f64,
}

/// Validated submission body for POST `/api/stock/portfolio`.
#[derive(Debug, Clone, Serialize)]
pub struct NewHolding {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub nifty_group: String,
    pub buy_price: f64,
    pub current_price: f64,
    pub volume: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "field `{field}` must be filled"),
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "field `{field}` is not a valid number: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw text contents of the add-holding form. All seven fields are required;
/// prices parse as floats and volume as an integer before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct HoldingForm {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub nifty_group: String,
    pub buy_price: String,
    pub current_price: String,
    pub volume: String,
}

impl HoldingForm {
    pub fn validate(&self) -> Result<NewHolding, ValidationError> {
        let ticker = required(&self.ticker, "ticker")?;
        let company_name = required(&self.company_name, "company_name")?;
        let sector = required(&self.sector, "sector")?;
        let nifty_group = required(&self.nifty_group, "nifty_group")?;
        let buy_price = required(&self.buy_price, "buy_price")?;
        let current_price = required(&self.current_price, "current_price")?;
        let volume = required(&self.volume, "volume")?;

        Ok(NewHolding {
            ticker,
            company_name,
            sector,
            nifty_group,
            buy_price: parse_f64(&buy_price, "buy_price")?,
            current_price: parse_f64(&current_price, "current_price")?,
            volume: parse_i64(&volume, "volume")?,
        })
    }

    pub fn clear(&mut self) {
        *self = HoldingForm::default();
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_f64(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_i64(value: &str, field: &'static str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
