use chrono::{NaiveDateTime, SubsecRound, Utc};
use chrono_tz::Tz;

/// Wire format for every timestamp the API returns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in `tz` with sub-second precision dropped.
#[must_use]
pub fn now_in(tz: &Tz) -> NaiveDateTime {
    Utc::now().with_timezone(tz).naive_local().trunc_subsecs(0)
}

#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
