use crate::api::error::ClientError;
use crate::api::StockApi;
use crate::domain::portfolio::{HoldingForm, PortfolioSummary, ValidationError};
use std::fmt;
use std::sync::Arc;

const MSG_LOAD: &str = "Failed to load portfolio";
const MSG_SUBMIT: &str = "Failed to add stock";
const MSG_FORM: &str = "Please fill all fields";

#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationError),
    Client(ClientError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "validation failed: {err}"),
            SubmitError::Client(err) => write!(f, "submission failed: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Portfolio screen: server-computed summary plus the add-holding form.
pub struct PortfolioScreen<C: StockApi> {
    client: Arc<C>,
    pub summary: PortfolioSummary,
    pub form: HoldingForm,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl<C: StockApi> PortfolioScreen<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            summary: PortfolioSummary::default(),
            form: HoldingForm::default(),
            loading: false,
            error: None,
            notice: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.fetch_portfolio().await {
            Ok(summary) => self.summary = summary,
            Err(err) => {
                tracing::warn!(error = %err, "portfolio fetch failed");
                self.error = Some(MSG_LOAD.to_string());
            }
        }

        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Validates the form, POSTs the holding, and on success clears the form
    /// and re-fetches the portfolio. A validation failure issues no network
    /// request; a submission failure keeps the form contents for retry.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let holding = self.form.validate().map_err(|err| {
            self.error = Some(MSG_FORM.to_string());
            SubmitError::Validation(err)
        })?;

        match self.client.submit_holding(&holding).await {
            Ok(message) => {
                self.notice = Some(message);
                self.error = None;
                self.form.clear();
                self.load().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, ticker = %holding.ticker, "holding submission failed");
                self.error = Some(MSG_SUBMIT.to_string());
                Err(SubmitError::Client(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::mock::MockApi;

    fn fill_form(screen: &mut PortfolioScreen<MockApi>) {
        screen.form = HoldingForm {
            ticker: "INFY".into(),
            company_name: "Infosys".into(),
            sector: "IT".into(),
            nifty_group: "NIFTY 50".into(),
            buy_price: "1490.00".into(),
            current_price: "1520.50".into(),
            volume: "25".into(),
        };
    }

    #[tokio::test]
    async fn load_stores_summary_and_holdings() {
        let mock = Arc::new(MockApi::new());
        let mut screen = PortfolioScreen::new(mock);

        screen.load().await;

        assert_eq!(screen.summary.holdings.len(), 1);
        assert!(screen.summary.total_invested > 0.0);
    }

    #[tokio::test]
    async fn incomplete_form_issues_no_request() {
        let mock = Arc::new(MockApi::new());
        let mut screen = PortfolioScreen::new(mock.clone());
        fill_form(&mut screen);
        screen.form.ticker.clear();

        let result = screen.submit().await;

        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(screen.error.as_deref(), Some("Please fill all fields"));
    }

    #[tokio::test]
    async fn successful_submit_clears_form_and_refetches() {
        let mock = Arc::new(MockApi::new());
        let mut screen = PortfolioScreen::new(mock.clone());
        fill_form(&mut screen);

        screen.submit().await.unwrap();

        assert!(screen.form.ticker.is_empty());
        assert_eq!(screen.notice.as_deref(), Some("Stock INFY added/updated"));
        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), ["submit_holding:INFY", "fetch_portfolio"]);
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_for_retry() {
        let mock = Arc::new(MockApi::failing());
        let mut screen = PortfolioScreen::new(mock);
        fill_form(&mut screen);

        let result = screen.submit().await;

        assert!(matches!(result, Err(SubmitError::Client(_))));
        assert_eq!(screen.form.ticker, "INFY");
        assert_eq!(screen.error.as_deref(), Some("Failed to add stock"));
    }
}
