use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// Monotonic clock that works on native and in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const ORDER_TIME_FORMAT: &str = "%H:%M:%S";
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn date_to_string(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_DATE_FORMAT).to_string()
}

/// Days since the unix epoch, used as the chart x coordinate.
pub fn date_to_epoch_days(date: NaiveDate) -> i64 {
    date.signed_duration_since(NaiveDate::default()).num_days()
}

pub fn epoch_days_to_date(days: i64) -> Option<NaiveDate> {
    NaiveDate::default().checked_add_signed(chrono::Duration::days(days))
}

/// Human readable delay: "0.5s", "3s", "250ms".
pub fn format_delay(delay: Duration) -> String {
    let ms = delay.as_millis();
    if ms < 500 {
        return format!("{}ms", ms);
    }
    let secs = delay.as_secs_f64();
    if secs.fract() == 0.0 {
        format!("{}s", secs as u64)
    } else {
        format!("{:.1}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_delays_like_the_warning_card() {
        assert_eq!(format_delay(Duration::from_millis(500)), "0.5s");
        assert_eq!(format_delay(Duration::from_millis(3000)), "3s");
        assert_eq!(format_delay(Duration::from_millis(100)), "100ms");
    }

    #[test]
    fn epoch_days_survive_a_trip_through_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let days = date_to_epoch_days(date);
        assert_eq!(epoch_days_to_date(days), Some(date));
        assert_eq!(date_to_string(date), "2024-03-01");
    }
}
