use chrono::{DateTime, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / 1000)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes. Out-of-range timestamps render as an empty string
    // rather than taking the app down over a bad data row.
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT)),
        None => String::new(),
    }
}

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    // How many seconds ago was the event described by `past_timestamp_ms` ?
    let now_timestamp_ms = local_now_as_timestamp_ms();
    (now_timestamp_ms - past_timestamp_ms) / 1000
}

/// Parse an RFC 3339 timestamp (what the CSV store writes) into epoch milliseconds.
pub fn rfc3339_to_epoch_ms(text: &str) -> Option<i64> {
    text.parse::<DateTime<Utc>>()
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Render epoch milliseconds as RFC 3339 for the CSV store.
pub fn epoch_ms_to_rfc3339(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_round_trip() {
        let ms = 1_700_000_000_000i64;
        let text = epoch_ms_to_rfc3339(ms);
        assert_eq!(rfc3339_to_epoch_ms(&text), Some(ms));
    }

    #[test]
    fn test_epoch_ms_to_utc_formats_date() {
        // 2023-11-14T22:13:20Z
        assert_eq!(epoch_ms_to_utc(1_700_000_000_000), "2023-11-14");
    }
}
