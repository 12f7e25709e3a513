use crate::api::StockApi;
use crate::domain::market::MarketAnalysis;
use std::sync::Arc;

const MSG_LOAD: &str = "Failed to load market analysis";

pub const TIMEFRAMES: [&str; 4] = ["1D", "1W", "1M", "3M"];

/// Market analysis screen: one read-only aggregate plus a local timeframe
/// selector. The selector only changes what is highlighted; the endpoint has
/// no timeframe parameter.
pub struct AnalysisScreen<C: StockApi> {
    client: Arc<C>,
    pub analysis: Option<MarketAnalysis>,
    pub timeframe: &'static str,
    pub loading: bool,
    pub error: Option<String>,
}

impl<C: StockApi> AnalysisScreen<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            analysis: None,
            timeframe: TIMEFRAMES[0],
            loading: false,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.fetch_market_analysis().await {
            Ok(analysis) => self.analysis = Some(analysis),
            Err(err) => {
                tracing::warn!(error = %err, "market analysis fetch failed");
                self.error = Some(MSG_LOAD.to_string());
            }
        }

        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    pub fn set_timeframe(&mut self, timeframe: &'static str) {
        if TIMEFRAMES.contains(&timeframe) {
            self.timeframe = timeframe;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::mock::MockApi;

    #[tokio::test]
    async fn load_stores_aggregate() {
        let mock = Arc::new(MockApi::new());
        let mut screen = AnalysisScreen::new(mock);

        screen.load().await;

        let analysis = screen.analysis.as_ref().unwrap();
        assert_eq!(analysis.market_trend, "Bullish");
        assert!(screen.error.is_none());
    }

    #[tokio::test]
    async fn failure_keeps_previous_analysis() {
        let mock = Arc::new(MockApi::new());
        let mut screen = AnalysisScreen::new(mock.clone());
        screen.load().await;

        mock.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        screen.refresh().await;

        assert!(screen.analysis.is_some());
        assert_eq!(screen.error.as_deref(), Some("Failed to load market analysis"));
    }

    #[tokio::test]
    async fn unknown_timeframe_is_ignored() {
        let mock = Arc::new(MockApi::new());
        let mut screen = AnalysisScreen::new(mock);

        screen.set_timeframe("1W");
        assert_eq!(screen.timeframe, "1W");

        screen.set_timeframe("1Y");
        assert_eq!(screen.timeframe, "1W");
    }
}
