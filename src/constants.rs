use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Window used by the dashboard "expiring soon" count.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;
