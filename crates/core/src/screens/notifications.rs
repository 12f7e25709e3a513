use crate::api::error::ClientError;
use crate::api::StockApi;
use crate::domain::notification::{NotificationPreferences, NotificationRecord, PreferenceToggle};
use chrono::Utc;
use std::sync::Arc;

const MSG_LOAD: &str = "Failed to load notification data";
const MSG_PREFS: &str = "Failed to update notification preferences";

/// Notifications screen: preference toggles plus the alert history feed.
/// Toggles apply optimistically and roll back if the server sync fails.
pub struct NotificationsScreen<C: StockApi> {
    client: Arc<C>,
    pub preferences: NotificationPreferences,
    pub history: Vec<NotificationRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<C: StockApi> NotificationsScreen<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            preferences: NotificationPreferences::default(),
            history: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.fetch_notifications().await {
            Ok(feed) => {
                self.preferences = feed.preferences;
                self.history = feed.history;
            }
            Err(err) => {
                tracing::warn!(error = %err, "notification fetch failed");
                self.error = Some(MSG_LOAD.to_string());
            }
        }

        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Optimistic toggle: the local value flips immediately, the POST follows,
    /// and a failed sync reverts the flip so local and server state cannot
    /// diverge silently.
    pub async fn set_preference(
        &mut self,
        toggle: PreferenceToggle,
        enabled: bool,
    ) -> Result<(), ClientError> {
        let previous = self.preferences.get(toggle);
        self.preferences.set(toggle, enabled);

        if let Err(err) = self.client.update_preference(toggle, enabled).await {
            tracing::warn!(error = %err, field = toggle.field_name(), "preference sync failed; rolling back");
            self.preferences.set(toggle, previous);
            self.error = Some(MSG_PREFS.to_string());
            return Err(err);
        }
        Ok(())
    }

    /// Marks a notification read server-side, then mirrors the `read_at`
    /// stamp locally. Already-read records are left alone.
    pub async fn mark_read(&mut self, notification_id: i64) -> Result<(), ClientError> {
        let already_read = self
            .history
            .iter()
            .find(|n| n.id == notification_id)
            .is_some_and(|n| n.read_at.is_some());
        if already_read {
            return Ok(());
        }

        self.client.mark_notification_read(notification_id).await?;

        let stamp = Utc::now().to_rfc3339();
        if let Some(record) = self.history.iter_mut().find(|n| n.id == notification_id) {
            record.read_at = Some(stamp);
        }
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.history.iter().filter(|n| n.read_at.is_none()).count()
    }
}
