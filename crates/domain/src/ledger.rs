use crate::date::{day_start_millis, format_iso_date, parse_iso_date, MILLIS_PER_DAY};
use crate::shared::entity::ID;
use chrono::NaiveDate;

/// Store keys of ledgers start with this prefix, followed by the ISO date
pub const LEDGER_KEY_PREFIX: &str = "reminders_sent_";

/// The events that already received their client reminder on a given
/// (UTC) day. An event id is recorded at most once per day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyDispatchLedger {
    pub day: NaiveDate,
    event_ids: Vec<ID>,
}

impl DailyDispatchLedger {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            event_ids: Vec::new(),
        }
    }

    pub fn with_event_ids(day: NaiveDate, event_ids: Vec<ID>) -> Self {
        let mut ledger = Self::new(day);
        for event_id in event_ids {
            ledger.record(event_id);
        }
        ledger
    }

    pub fn key(&self) -> String {
        ledger_key(&self.day)
    }

    pub fn event_ids(&self) -> &[ID] {
        &self.event_ids
    }

    pub fn contains(&self, event_id: &ID) -> bool {
        self.event_ids.contains(event_id)
    }

    /// Returns false if the event was already recorded
    pub fn record(&mut self, event_id: ID) -> bool {
        if self.contains(&event_id) {
            return false;
        }
        self.event_ids.push(event_id);
        true
    }
}

pub fn ledger_key(day: &NaiveDate) -> String {
    format!("{}{}", LEDGER_KEY_PREFIX, format_iso_date(day))
}

/// The day encoded in a ledger key, `None` for other keys
pub fn parse_ledger_key(key: &str) -> Option<NaiveDate> {
    key.strip_prefix(LEDGER_KEY_PREFIX).and_then(parse_iso_date)
}

/// A ledger is expired when its day started more than `retention_days` ago
pub fn is_ledger_expired(day: &NaiveDate, now: i64, retention_days: i64) -> bool {
    now - day_start_millis(day) > retention_days * MILLIS_PER_DAY
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date::utc_day;

    const NOW: i64 = 1734267600000;

    #[test]
    fn records_each_event_once() {
        let mut ledger = DailyDispatchLedger::new(utc_day(NOW));
        assert!(ledger.record(ID::from("1")));
        assert!(!ledger.record(ID::from("1")));
        assert!(ledger.record(ID::from("2")));
        assert_eq!(ledger.event_ids().len(), 2);

        let ledger = DailyDispatchLedger::with_event_ids(
            utc_day(NOW),
            vec![ID::from("1"), ID::from("1")],
        );
        assert_eq!(ledger.event_ids().len(), 1);
    }

    #[test]
    fn keys_round_trip() {
        let ledger = DailyDispatchLedger::new(utc_day(NOW));
        assert_eq!(ledger.key(), "reminders_sent_2024-12-15");
        assert_eq!(parse_ledger_key(&ledger.key()), Some(ledger.day));
        assert_eq!(parse_ledger_key("reminders"), None);
        assert_eq!(parse_ledger_key("reminders_sent_garbage"), None);
    }

    #[test]
    fn expiry() {
        let eight_days_ago = utc_day(NOW - 8 * MILLIS_PER_DAY);
        let six_days_ago = utc_day(NOW - 6 * MILLIS_PER_DAY);
        let today = utc_day(NOW);
        assert!(is_ledger_expired(&eight_days_ago, NOW, 7));
        assert!(!is_ledger_expired(&six_days_ago, NOW, 7));
        assert!(!is_ledger_expired(&today, NOW, 7));
    }
}
