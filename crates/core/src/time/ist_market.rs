use anyhow::Context;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 1800;

// NSE regular session, minute granularity. Both bounds inclusive: the app
// treats 15:30 itself as still open.
const OPEN_HOUR: u32 = 9;
const OPEN_MINUTE: u32 = 15;
const CLOSE_HOUR: u32 = 15;
const CLOSE_MINUTE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Open,
    Closed,
}

/// One of the two daily recommendation-generation windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSlot {
    #[serde(rename = "10_AM")]
    TenAm,
    #[serde(rename = "2_PM")]
    TwoPm,
}

impl AlertSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSlot::TenAm => "10_AM",
            AlertSlot::TwoPm => "2_PM",
        }
    }
}

impl std::fmt::Display for AlertSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_ist(now_utc: DateTime<Utc>) -> anyhow::Result<DateTime<FixedOffset>> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).context("invalid IST offset")?;
    Ok(now_utc.with_timezone(&ist))
}

/// Recomputed from wall-clock time on every check; nothing is persisted.
pub fn market_status(now_utc: DateTime<Utc>) -> anyhow::Result<MarketStatus> {
    let now_ist = to_ist(now_utc)?;
    let hm = (now_ist.hour(), now_ist.minute());

    let open = hm >= (OPEN_HOUR, OPEN_MINUTE) && hm <= (CLOSE_HOUR, CLOSE_MINUTE);
    Ok(if open {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    })
}

/// Which slot's recommendations to display right now. Before 10:00 IST this
/// still resolves to the afternoon slot, so early sessions show the previous
/// day's afternoon picks.
pub fn current_alert_slot(now_utc: DateTime<Utc>) -> anyhow::Result<AlertSlot> {
    let hour = to_ist(now_utc)?.hour();
    Ok(match hour {
        10..=13 => AlertSlot::TenAm,
        _ => AlertSlot::TwoPm,
    })
}

/// Human label for the next recommendation drop, shown on the dashboard.
pub fn next_alert_label(now_utc: DateTime<Utc>) -> anyhow::Result<&'static str> {
    let hour = to_ist(now_utc)?.hour();
    Ok(if hour < 10 {
        "10:00 AM"
    } else if hour < 14 {
        "2:00 PM"
    } else {
        "Tomorrow 10:00 AM"
    })
}
