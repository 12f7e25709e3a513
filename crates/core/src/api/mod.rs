pub mod client;
pub mod envelope;
pub mod error;

use crate::domain::market::{IndexQuote, MarketAnalysis};
use crate::domain::notification::PreferenceToggle;
use crate::domain::portfolio::{NewHolding, PortfolioSummary};
use crate::domain::recommendation::Recommendation;
use crate::time::ist_market::AlertSlot;
use envelope::NotificationFeed;
use error::ClientError;

/// The remote data client seam. Screens depend on this trait so they can be
/// exercised against mock implementations in tests.
#[async_trait::async_trait]
pub trait StockApi: Send + Sync {
    async fn fetch_nifty_indices(&self) -> Result<Vec<IndexQuote>, ClientError>;

    async fn fetch_recommendations(
        &self,
        slot: AlertSlot,
        limit: u32,
    ) -> Result<Vec<Recommendation>, ClientError>;

    async fn fetch_market_analysis(&self) -> Result<MarketAnalysis, ClientError>;

    /// POST `{ action: "update_market_data" }`; returns the server message.
    async fn update_market_data(&self) -> Result<String, ClientError>;

    /// POST `{ action: "generate_recommendations", alert_time }`.
    async fn generate_recommendations(&self, slot: AlertSlot) -> Result<String, ClientError>;

    async fn fetch_notifications(&self) -> Result<NotificationFeed, ClientError>;

    async fn update_preference(
        &self,
        toggle: PreferenceToggle,
        enabled: bool,
    ) -> Result<(), ClientError>;

    async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ClientError>;

    async fn fetch_portfolio(&self) -> Result<PortfolioSummary, ClientError>;

    async fn submit_holding(&self, holding: &NewHolding) -> Result<String, ClientError>;
}
