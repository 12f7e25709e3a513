//! Typed response envelopes, one per endpoint family. Shape mismatches fail
//! closed: a 2xx body without the expected payload is an api error, never a
//! partially-parsed success.

use crate::api::error::ClientError;
use crate::domain::notification::{NotificationPreferences, NotificationRecord};
use crate::domain::portfolio::{PortfolioHolding, PortfolioSummary};
use serde::Deserialize;

/// The common `{ data: T }` wrapper used by the stocks endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> DataEnvelope<T> {
    pub fn into_result(self) -> Result<T, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::api(error));
        }
        self.data
            .ok_or_else(|| ClientError::api("response envelope missing `data` field"))
    }
}

/// `{ message }` acknowledgment from the real-time update endpoint.
#[derive(Debug, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageEnvelope {
    pub fn into_result(self) -> Result<String, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::api(error));
        }
        self.message
            .or(self.status)
            .ok_or_else(|| ClientError::api("response envelope missing `message` field"))
    }
}

/// Combined preferences + history payload from GET `/api/notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationsEnvelope {
    #[serde(default)]
    pub preferences: Option<NotificationPreferences>,
    #[serde(default)]
    pub history: Option<Vec<NotificationRecord>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    pub preferences: NotificationPreferences,
    pub history: Vec<NotificationRecord>,
}

impl NotificationsEnvelope {
    pub fn into_result(self) -> Result<NotificationFeed, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::api(error));
        }
        let preferences = self
            .preferences
            .ok_or_else(|| ClientError::api("notifications envelope missing `preferences`"))?;
        let history = self
            .history
            .ok_or_else(|| ClientError::api("notifications envelope missing `history`"))?;
        Ok(NotificationFeed {
            preferences,
            history,
        })
    }
}

/// Holdings plus totals from GET `/api/stock/portfolio`.
#[derive(Debug, Deserialize)]
pub struct PortfolioEnvelope {
    #[serde(default)]
    pub data: Option<Vec<PortfolioHolding>>,
    #[serde(default)]
    pub total_invested: Option<f64>,
    #[serde(default)]
    pub total_current: Option<f64>,
    #[serde(default)]
    pub total_change: Option<f64>,
    #[serde(default)]
    pub total_change_percent: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PortfolioEnvelope {
    pub fn into_result(self) -> Result<PortfolioSummary, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::api(error));
        }
        let holdings = self
            .data
            .ok_or_else(|| ClientError::api("portfolio envelope missing `data` field"))?;
        Ok(PortfolioSummary {
            holdings,
            total_invested: self.total_invested.unwrap_or(0.0),
            total_current: self.total_current.unwrap_or(0.0),
            total_change: self.total_change.unwrap_or(0.0),
            total_change_percent: self.total_change_percent.unwrap_or(0.0),
        })
    }
}
