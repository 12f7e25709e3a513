use crate::api::StockApi;
use crate::domain::recommendation::Recommendation;
use crate::time::ist_market::{self, AlertSlot};
use chrono::Utc;
use std::sync::Arc;

const SCREEN_LIMIT: u32 = 10;

const MSG_LOAD: &str = "Failed to load recommendations";
const MSG_GENERATE: &str = "Failed to generate new recommendations";

/// Recommendations screen: the full pick list with a morning/afternoon slot
/// tab as its only filter.
pub struct RecommendationsScreen<C: StockApi> {
    client: Arc<C>,
    pub active_slot: AlertSlot,
    pub items: Vec<Recommendation>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl<C: StockApi> RecommendationsScreen<C> {
    /// Starts on the slot currently being shown per display rules.
    pub fn new(client: Arc<C>) -> anyhow::Result<Self> {
        let active_slot = ist_market::current_alert_slot(Utc::now())?;
        Ok(Self::with_slot(client, active_slot))
    }

    pub fn with_slot(client: Arc<C>, active_slot: AlertSlot) -> Self {
        Self {
            client,
            active_slot,
            items: Vec::new(),
            loading: false,
            error: None,
            notice: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self
            .client
            .fetch_recommendations(self.active_slot, SCREEN_LIMIT)
            .await
        {
            Ok(items) => self.items = items,
            Err(err) => {
                tracing::warn!(error = %err, slot = %self.active_slot, "recommendations fetch failed");
                self.error = Some(MSG_LOAD.to_string());
            }
        }

        self.loading = false;
    }

    /// Switching the tab re-fetches for the newly selected slot.
    pub async fn set_slot(&mut self, slot: AlertSlot) {
        if self.active_slot == slot {
            return;
        }
        self.active_slot = slot;
        self.load().await;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    pub async fn generate(&mut self) {
        match self.client.generate_recommendations(self.active_slot).await {
            Ok(message) => {
                self.notice = Some(message);
                self.load().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, slot = %self.active_slot, "recommendation generation failed");
                self.error = Some(MSG_GENERATE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::mock::MockApi;

    #[tokio::test]
    async fn load_uses_active_slot_and_screen_limit() {
        let mock = Arc::new(MockApi::new());
        let mut screen = RecommendationsScreen::with_slot(mock.clone(), AlertSlot::TwoPm);

        screen.load().await;

        assert!(screen.error.is_none());
        assert!(!screen.items.is_empty());
        assert_eq!(
            mock.calls.lock().unwrap()[0],
            "fetch_recommendations:2_PM:10"
        );
    }

    #[tokio::test]
    async fn set_slot_refetches_only_on_change() {
        let mock = Arc::new(MockApi::new());
        let mut screen = RecommendationsScreen::with_slot(mock.clone(), AlertSlot::TenAm);

        screen.set_slot(AlertSlot::TenAm).await;
        assert_eq!(mock.call_count(), 0);

        screen.set_slot(AlertSlot::TwoPm).await;
        assert_eq!(screen.active_slot, AlertSlot::TwoPm);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn generate_failure_sets_message_and_skips_refetch() {
        let mock = Arc::new(MockApi::failing());
        let mut screen = RecommendationsScreen::with_slot(mock.clone(), AlertSlot::TenAm);

        screen.generate().await;

        assert_eq!(
            screen.error.as_deref(),
            Some("Failed to generate new recommendations")
        );
        assert_eq!(mock.call_count(), 1);
    }
}
