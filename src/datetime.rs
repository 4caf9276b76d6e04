//! Date/time formatting for listings.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

/// Timestamp format used in listings (`YYYY-MM-DD HH:MM:SS`).
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone name that selects the machine's local clock.
pub const LOCAL_TIMEZONE: &str = "Local";

/// Check whether a timezone name can be used for display.
///
/// Accepts `Local` and any IANA name known to chrono-tz (including `UTC`).
pub fn is_known_timezone(timezone: &str) -> bool {
    timezone == LOCAL_TIMEZONE || timezone.parse::<Tz>().is_ok()
}

/// Check whether a strftime format string only uses known specifiers.
pub fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a DateTime<Utc> in the given timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `timezone` - `Local` or a timezone name (e.g., "Asia/Taipei", "UTC")
/// * `format` - Output format string (e.g., "%Y-%m-%d %H:%M:%S")
///
/// # Returns
///
/// Formatted datetime string. Unknown timezones fall back to UTC and
/// unusable formats fall back to [`DEFAULT_FORMAT`].
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    if timezone == LOCAL_TIMEZONE {
        return render(&dt.with_timezone(&Local), format);
    }
    match timezone.parse::<Tz>() {
        Ok(tz) => render(&dt.with_timezone(&tz), format),
        Err(_) => render(dt, format),
    }
}

fn render<Z: TimeZone>(dt: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_ok() {
        return out;
    }
    dt.format(DEFAULT_FORMAT).to_string()
}
