use crate::api::error::ClientError;
use crate::api::StockApi;
use crate::domain::market::IndexQuote;
use crate::domain::recommendation::Recommendation;
use crate::time::ist_market::{self, AlertSlot, MarketStatus};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const TOP_PICKS_LIMIT: u32 = 5;

const MSG_MARKET_DATA: &str = "Failed to load market data";
const MSG_RECOMMENDATIONS: &str = "Failed to load recommendations";
const MSG_UPDATE: &str = "Failed to update market data";
const MSG_GENERATE: &str = "Failed to generate new recommendations";

/// Dashboard view-model: Nifty indices plus the top picks for the current
/// alert slot. The only screen driven by the refresh scheduler.
pub struct DashboardScreen<C: StockApi> {
    client: Arc<C>,
    pub indices: Vec<IndexQuote>,
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub market_open: bool,
    pub next_alert: &'static str,
    pub last_update: Option<DateTime<Utc>>,
}

impl<C: StockApi> DashboardScreen<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            indices: Vec::new(),
            recommendations: Vec::new(),
            loading: false,
            error: None,
            notice: None,
            market_open: false,
            next_alert: "",
            last_update: None,
        }
    }

    /// Initial load: both fetches are issued concurrently and either may
    /// complete first.
    pub async fn load(&mut self) -> anyhow::Result<()> {
        self.loading = true;
        self.error = None;
        self.refresh_market_clock(Utc::now())?;

        let slot = ist_market::current_alert_slot(Utc::now())?;
        let (indices, recommendations) = tokio::join!(
            self.client.fetch_nifty_indices(),
            self.client.fetch_recommendations(slot, TOP_PICKS_LIMIT),
        );

        self.apply_indices(indices);
        self.apply_recommendations(recommendations);

        self.loading = false;
        Ok(())
    }

    /// Pull-to-refresh and scheduler path: ask the server to refresh its
    /// market snapshot, then re-fetch what this screen shows.
    pub async fn refresh(&mut self) -> anyhow::Result<()> {
        self.error = None;
        self.refresh_market_clock(Utc::now())?;

        match self.client.update_market_data().await {
            Ok(message) => {
                self.last_update = Some(Utc::now());
                self.notice = Some(message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "market data update failed");
                self.error = Some(MSG_UPDATE.to_string());
            }
        }

        let slot = ist_market::current_alert_slot(Utc::now())?;
        let (indices, recommendations) = tokio::join!(
            self.client.fetch_nifty_indices(),
            self.client.fetch_recommendations(slot, TOP_PICKS_LIMIT),
        );
        self.apply_indices(indices);
        self.apply_recommendations(recommendations);
        Ok(())
    }

    /// Manually trigger a recommendation run for the given slot, then
    /// re-fetch the picks.
    pub async fn generate(&mut self, slot: AlertSlot) -> anyhow::Result<()> {
        match self.client.generate_recommendations(slot).await {
            Ok(message) => self.notice = Some(message),
            Err(err) => {
                tracing::warn!(error = %err, %slot, "recommendation generation failed");
                self.error = Some(MSG_GENERATE.to_string());
                return Ok(());
            }
        }

        let recommendations = self.client.fetch_recommendations(slot, TOP_PICKS_LIMIT).await;
        self.apply_recommendations(recommendations);
        Ok(())
    }

    fn refresh_market_clock(&mut self, now: DateTime<Utc>) -> anyhow::Result<()> {
        self.market_open = ist_market::market_status(now)? == MarketStatus::Open;
        self.next_alert = ist_market::next_alert_label(now)?;
        Ok(())
    }

    fn apply_indices(&mut self, result: Result<Vec<IndexQuote>, ClientError>) {
        match result {
            Ok(indices) => self.indices = indices,
            Err(err) => {
                tracing::warn!(error = %err, "nifty indices fetch failed");
                self.error = Some(MSG_MARKET_DATA.to_string());
            }
        }
    }

    fn apply_recommendations(&mut self, result: Result<Vec<Recommendation>, ClientError>) {
        match result {
            Ok(recommendations) => self.recommendations = recommendations,
            Err(err) => {
                tracing::warn!(error = %err, "recommendations fetch failed");
                self.error = Some(MSG_RECOMMENDATIONS.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::mock::MockApi;

    #[tokio::test]
    async fn load_populates_both_sections() {
        let mock = Arc::new(MockApi::new());
        let mut screen = DashboardScreen::new(mock.clone());

        screen.load().await.unwrap();

        assert!(!screen.loading);
        assert!(screen.error.is_none());
        assert_eq!(screen.indices.len(), 1);
        assert!(!screen.recommendations.is_empty());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn failed_load_degrades_to_error_message() {
        let mock = Arc::new(MockApi::failing());
        let mut screen = DashboardScreen::new(mock);

        screen.load().await.unwrap();

        assert!(!screen.loading);
        assert!(screen.error.is_some());
        assert!(screen.indices.is_empty());
    }

    #[tokio::test]
    async fn refresh_keeps_stale_data_on_failure() {
        let mock = Arc::new(MockApi::new());
        let mut screen = DashboardScreen::new(mock.clone());
        screen.load().await.unwrap();
        let before = screen.indices.len();

        mock.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        screen.refresh().await.unwrap();

        assert_eq!(screen.indices.len(), before);
        assert_eq!(screen.error.as_deref(), Some("Failed to load recommendations"));
        assert!(screen.last_update.is_none());
    }

    #[tokio::test]
    async fn refresh_stamps_last_update_on_success() {
        let mock = Arc::new(MockApi::new());
        let mut screen = DashboardScreen::new(mock);
        screen.refresh().await.unwrap();
        assert!(screen.last_update.is_some());
        assert!(screen.notice.is_some());
    }

    #[tokio::test]
    async fn generate_refetches_picks() {
        let mock = Arc::new(MockApi::new());
        let mut screen = DashboardScreen::new(mock.clone());

        screen.generate(AlertSlot::TenAm).await.unwrap();

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls[0], "generate_recommendations:10_AM");
        assert!(calls[1].starts_with("fetch_recommendations:10_AM"));
    }
}
