use crate::api::envelope::{
    DataEnvelope, MessageEnvelope, NotificationFeed, NotificationsEnvelope, PortfolioEnvelope,
};
use crate::api::error::ClientError;
use crate::api::StockApi;
use crate::config::Settings;
use crate::domain::market::{IndexQuote, MarketAnalysis};
use crate::domain::notification::PreferenceToggle;
use crate::domain::portfolio::{NewHolding, PortfolioSummary};
use crate::domain::recommendation::Recommendation;
use crate::time::ist_market::AlertSlot;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const NIFTY_INDICES_PATH: &str = "/api/stocks/nifty-indices";
const RECOMMENDATIONS_PATH: &str = "/api/stocks/recommendations";
const ANALYSIS_PATH: &str = "/api/stocks/analysis";
const REALTIME_UPDATE_PATH: &str = "/api/stocks/real-time-update";
const NOTIFICATIONS_PATH: &str = "/api/notifications";
const PORTFOLIO_PATH: &str = "/api/stock/portfolio";

/// HTTP implementation of [`StockApi`] over the app backend. One base URL for
/// every resource; no caching, no automatic retry — retry is a user action.
#[derive(Debug, Clone)]
pub struct StockApiClient {
    http: reqwest::Client,
    base_url: String,
    user_id: String,
}

impl StockApiClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = settings.require_api_base_url()?.to_string();

        let timeout_secs = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build stock api http client")?;

        Ok(Self {
            http,
            base_url,
            user_id: settings.user_id().to_string(),
        })
    }

    pub fn new(http: reqwest::Client, base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            user_id: user_id.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_envelope<E: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<E, ClientError> {
        let res = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(ClientError::from)?;

        decode_response(path, res).await
    }

    async fn post_envelope<E: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<E, ClientError> {
        let res = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::from)?;

        decode_response(path, res).await
    }
}

async fn decode_response<E: DeserializeOwned>(
    path: &str,
    res: reqwest::Response,
) -> Result<E, ClientError> {
    let status = res.status();
    let text = res
        .text()
        .await
        .map_err(|err| ClientError::network(format!("failed to read response body: {err}")))?;

    if !status.is_success() {
        tracing::warn!(path, http_status = %status, "stock api request failed");
        return Err(ClientError::http_status(status.as_u16(), text));
    }

    serde_json::from_str::<E>(&text).map_err(|err| {
        tracing::warn!(path, error = %err, "stock api response shape mismatch");
        ClientError::api(format!("unexpected response shape: {err}"))
    })
}

#[async_trait::async_trait]
impl StockApi for StockApiClient {
    async fn fetch_nifty_indices(&self) -> Result<Vec<IndexQuote>, ClientError> {
        self.get_envelope::<DataEnvelope<Vec<IndexQuote>>>(NIFTY_INDICES_PATH, &[])
            .await?
            .into_result()
    }

    async fn fetch_recommendations(
        &self,
        slot: AlertSlot,
        limit: u32,
    ) -> Result<Vec<Recommendation>, ClientError> {
        let query = [
            ("alert_time", slot.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        self.get_envelope::<DataEnvelope<Vec<Recommendation>>>(RECOMMENDATIONS_PATH, &query)
            .await?
            .into_result()
    }

    async fn fetch_market_analysis(&self) -> Result<MarketAnalysis, ClientError> {
        self.get_envelope::<DataEnvelope<MarketAnalysis>>(ANALYSIS_PATH, &[])
            .await?
            .into_result()
    }

    async fn update_market_data(&self) -> Result<String, ClientError> {
        let body = json!({ "action": "update_market_data" });
        self.post_envelope::<MessageEnvelope>(REALTIME_UPDATE_PATH, &body)
            .await?
            .into_result()
    }

    async fn generate_recommendations(&self, slot: AlertSlot) -> Result<String, ClientError> {
        let body = json!({
            "action": "generate_recommendations",
            "alert_time": slot.as_str(),
        });
        self.post_envelope::<MessageEnvelope>(REALTIME_UPDATE_PATH, &body)
            .await?
            .into_result()
    }

    async fn fetch_notifications(&self) -> Result<NotificationFeed, ClientError> {
        let query = [("user_id", self.user_id.clone())];
        self.get_envelope::<NotificationsEnvelope>(NOTIFICATIONS_PATH, &query)
            .await?
            .into_result()
    }

    async fn update_preference(
        &self,
        toggle: PreferenceToggle,
        enabled: bool,
    ) -> Result<(), ClientError> {
        let body = json!({
            "type": "update_preferences",
            "user_id": self.user_id,
            (toggle.field_name()): enabled,
        });
        self.post_envelope::<MessageEnvelope>(NOTIFICATIONS_PATH, &body)
            .await?
            .into_result()
            .map(|_| ())
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ClientError> {
        let body = json!({
            "type": "mark_as_read",
            "user_id": self.user_id,
            "notification_id": notification_id,
        });
        self.post_envelope::<MessageEnvelope>(NOTIFICATIONS_PATH, &body)
            .await?
            .into_result()
            .map(|_| ())
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioSummary, ClientError> {
        self.get_envelope::<PortfolioEnvelope>(PORTFOLIO_PATH, &[])
            .await?
            .into_result()
    }

    async fn submit_holding(&self, holding: &NewHolding) -> Result<String, ClientError> {
        let body = serde_json::to_value(holding)
            .map_err(|err| ClientError::api(format!("failed to encode holding: {err}")))?;
        self.post_envelope::<MessageEnvelope>(PORTFOLIO_PATH, &body)
            .await?
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = StockApiClient::new(
            reqwest::Client::new(),
            "https://api.example.com/",
            "default_user",
        );
        assert_eq!(
            client.url(NIFTY_INDICES_PATH),
            "https://api.example.com/api/stocks/nifty-indices"
        );
    }
}
