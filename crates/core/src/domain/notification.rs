use serde::{Deserialize, Serialize};

/// Per-user alert preferences. The only client-mutable entity besides
/// portfolio holdings; toggled optimistically and synced via POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub morning_alerts_enabled: bool,
    #[serde(default = "default_true", alias = "afternoonAlertsEnabled")]
    pub afternoon_alerts_enabled: bool,
    #[serde(default = "default_true")]
    pub push_notifications_enabled: bool,
    #[serde(default)]
    pub email_notifications_enabled: bool,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            morning_alerts_enabled: true,
            afternoon_alerts_enabled: true,
            push_notifications_enabled: true,
            email_notifications_enabled: false,
            risk_tolerance: RiskTolerance::Medium,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// One of the four boolean preference switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceToggle {
    MorningAlerts,
    AfternoonAlerts,
    PushNotifications,
    EmailNotifications,
}

impl PreferenceToggle {
    /// Wire field name used by the notifications POST body.
    pub fn field_name(&self) -> &'static str {
        match self {
            PreferenceToggle::MorningAlerts => "morning_alerts_enabled",
            PreferenceToggle::AfternoonAlerts => "afternoon_alerts_enabled",
            PreferenceToggle::PushNotifications => "push_notifications_enabled",
            PreferenceToggle::EmailNotifications => "email_notifications_enabled",
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, toggle: PreferenceToggle) -> bool {
        match toggle {
            PreferenceToggle::MorningAlerts => self.morning_alerts_enabled,
            PreferenceToggle::AfternoonAlerts => self.afternoon_alerts_enabled,
            PreferenceToggle::PushNotifications => self.push_notifications_enabled,
            PreferenceToggle::EmailNotifications => self.email_notifications_enabled,
        }
    }

    pub fn set(&mut self, toggle: PreferenceToggle, enabled: bool) {
        match toggle {
            PreferenceToggle::MorningAlerts => self.morning_alerts_enabled = enabled,
            PreferenceToggle::AfternoonAlerts => self.afternoon_alerts_enabled = enabled,
            PreferenceToggle::PushNotifications => self.push_notifications_enabled = enabled,
            PreferenceToggle::EmailNotifications => self.email_notifications_enabled = enabled,
        }
    }
}

/// One alert from the notification history feed. `read_at` is set server-side
/// by the mark-as-read call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub read_at: Option<String>,
}
