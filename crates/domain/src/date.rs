use chrono::prelude::*;
use chrono_tz::{America::Sao_Paulo, Tz};

pub const MILLIS_PER_HOUR: i64 = 1000 * 60 * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;

/// Timezone the firm operates in, used for every human readable date
pub const FIRM_TIMEZONE: Tz = Sao_Paulo;

pub fn to_utc(timestamp_millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(timestamp_millis).single()
}

/// Whether the timestamp maps to a calendar date and can be stored
pub fn is_representable(timestamp_millis: i64) -> bool {
    to_utc(timestamp_millis).is_some()
}

/// Formats a timestamp the way pt-BR locales render a date and time,
/// e.g. `15/12/2024, 10:00:00`, in the firm's timezone.
pub fn format_pt_br(timestamp_millis: i64) -> String {
    match to_utc(timestamp_millis) {
        Some(dt) => dt
            .with_timezone(&FIRM_TIMEZONE)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string(),
        None => timestamp_millis.to_string(),
    }
}

/// Date part of a pt-BR rendering, e.g. `15/12/2024`
pub fn format_pt_br_date(timestamp_millis: i64) -> String {
    match to_utc(timestamp_millis) {
        Some(dt) => dt.with_timezone(&FIRM_TIMEZONE).format("%d/%m/%Y").to_string(),
        None => timestamp_millis.to_string(),
    }
}

/// Hour and minute of a pt-BR rendering, e.g. `10:00`
pub fn format_pt_br_time(timestamp_millis: i64) -> String {
    match to_utc(timestamp_millis) {
        Some(dt) => dt.with_timezone(&FIRM_TIMEZONE).format("%H:%M").to_string(),
        None => timestamp_millis.to_string(),
    }
}

/// The UTC calendar day of a timestamp
pub fn utc_day(timestamp_millis: i64) -> NaiveDate {
    to_utc(timestamp_millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// `YYYY-MM-DD`
pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(datestr: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(datestr, "%Y-%m-%d").ok()
}

/// Timestamp of midnight UTC at the start of the given day
pub fn day_start_millis(date: &NaiveDate) -> i64 {
    match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => Utc.from_utc_datetime(&midnight).timestamp_millis(),
        None => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Sun Dec 15 2024 13:00:00 UTC
    const TS: i64 = 1734267600000;

    #[test]
    fn it_formats_in_firm_timezone() {
        assert_eq!(format_pt_br(TS), "15/12/2024, 10:00:00");
        assert_eq!(format_pt_br_date(TS), "15/12/2024");
        assert_eq!(format_pt_br_time(TS), "10:00");
    }

    #[test]
    fn it_handles_iso_dates() {
        let day = utc_day(TS);
        assert_eq!(format_iso_date(&day), "2024-12-15");
        assert_eq!(parse_iso_date("2024-12-15"), Some(day));
        assert_eq!(parse_iso_date("2024-13-15"), None);
        assert_eq!(parse_iso_date("not-a-date"), None);
        assert_eq!(day_start_millis(&day), TS - 13 * MILLIS_PER_HOUR);
    }
}
