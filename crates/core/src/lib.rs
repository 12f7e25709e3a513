pub mod api;
pub mod domain;
pub mod refresh;
pub mod screens;
pub mod theme;
pub mod time;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_USER_ID: &str = "default_user";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_base_url: Option<String>,
        pub user_id: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                api_base_url: std::env::var("API_BASE_URL").ok(),
                user_id: std::env::var("APP_USER_ID").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_api_base_url(&self) -> anyhow::Result<&str> {
            self.api_base_url
                .as_deref()
                .context("API_BASE_URL is required")
        }

        pub fn user_id(&self) -> &str {
            self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
        }
    }
}
