use crate::date::{format_pt_br, MILLIS_PER_HOUR};
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reminders fire this long before the `ScheduledEvent` they belong to
pub const REMINDER_LEAD_MILLIS: i64 = 24 * MILLIS_PER_HOUR;
/// Lookahead used when listing upcoming reminders
pub const UPCOMING_WINDOW_MILLIS: i64 = 48 * MILLIS_PER_HOUR;
/// Upper bound of the delay between two automatic dispatch attempts
pub const MAX_RETRY_BACKOFF_MILLIS: i64 = 6 * MILLIS_PER_HOUR;

/// Which channel(s) a `Reminder` is delivered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Email,
    WhatsApp,
    Both,
}

impl ReminderChannel {
    pub fn includes_email(&self) -> bool {
        matches!(self, Self::Email | Self::Both)
    }

    pub fn includes_whatsapp(&self) -> bool {
        matches!(self, Self::WhatsApp | Self::Both)
    }
}

impl Default for ReminderChannel {
    fn default() -> Self {
        Self::Both
    }
}

impl FromStr for ReminderChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "whatsapp" => Ok(Self::WhatsApp),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown reminder channel: {}", s)),
        }
    }
}

/// Dispatch lifecycle of a `Reminder`.
///
/// `Scheduled -> Dispatching -> Sent`, or on a failed attempt back to
/// `Scheduled` until the retry budget is spent, after which it ends in `Failed`.
/// `Failed` is only left through a manual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    Scheduled,
    Dispatching,
    Sent,
    Failed,
}

/// Bounded retry with exponential backoff for failed dispatches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_millis: i64,
}

impl RetryPolicy {
    /// When the next attempt is allowed after `attempts` failed ones
    pub fn next_retry_at(&self, now: i64, attempts: u32) -> i64 {
        let exponent = attempts.saturating_sub(1).min(16);
        let backoff = self
            .backoff_millis
            .saturating_mul(1_i64 << exponent)
            .min(MAX_RETRY_BACKOFF_MILLIS);
        now + backoff
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_millis: 1000 * 60 * 5,
        }
    }
}

/// A `Reminder` is a one-shot notification sent to the firm's own staff
/// 24 hours before a `ScheduledEvent` takes place.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The event this `Reminder` belongs to. Not enforced.
    pub event_id: ID,
    /// Copied when the `Reminder` is created and never kept in sync
    pub event_title: String,
    pub event_date: i64,
    /// The timestamp at which the `Reminder` becomes due
    pub reminder_date: i64,
    pub channel: ReminderChannel,
    pub state: ReminderState,
    /// Failed dispatch attempts so far
    pub attempts: u32,
    /// A failed `Reminder` is not retried before this timestamp
    pub retry_at: Option<i64>,
}

impl Reminder {
    /// Creates the automatic reminder for an event, or `None` when the
    /// event is less than 24 hours away.
    pub fn new_auto(
        event_id: ID,
        event_title: String,
        event_date: i64,
        channel: ReminderChannel,
        now: i64,
    ) -> Option<Self> {
        let reminder_date = event_date.checked_sub(REMINDER_LEAD_MILLIS)?;
        if reminder_date <= now {
            return None;
        }

        Some(Self {
            id: ID::with_prefix("reminder", now),
            event_id,
            event_title,
            event_date,
            reminder_date,
            channel,
            state: ReminderState::Scheduled,
            attempts: 0,
            retry_at: None,
        })
    }

    pub fn is_sent(&self) -> bool {
        self.state == ReminderState::Sent
    }

    /// A `Dispatching` reminder at the start of a pass was abandoned by an
    /// interrupted process and is due again.
    pub fn is_due(&self, now: i64) -> bool {
        let dispatchable = matches!(
            self.state,
            ReminderState::Scheduled | ReminderState::Dispatching
        );
        dispatchable && self.reminder_date <= now && self.retry_at.map_or(true, |ts| ts <= now)
    }

    pub fn is_pending(&self, now: i64) -> bool {
        !self.is_sent() && self.reminder_date > now
    }

    pub fn is_upcoming(&self, now: i64) -> bool {
        self.is_pending(now) && self.reminder_date <= now + UPCOMING_WINDOW_MILLIS
    }

    /// Returns false if the `Reminder` has already been sent
    pub fn begin_dispatch(&mut self) -> bool {
        if self.is_sent() {
            return false;
        }
        self.state = ReminderState::Dispatching;
        true
    }

    pub fn mark_sent(&mut self) {
        self.state = ReminderState::Sent;
        self.retry_at = None;
    }

    pub fn record_failure(&mut self, now: i64, policy: &RetryPolicy) {
        self.attempts += 1;
        if self.attempts >= policy.max_attempts {
            self.state = ReminderState::Failed;
            self.retry_at = None;
        } else {
            self.state = ReminderState::Scheduled;
            self.retry_at = Some(policy.next_retry_at(now, self.attempts));
        }
    }

    pub fn title(&self) -> String {
        format!("Lembrete: {}", self.event_title)
    }

    pub fn message(&self) -> String {
        format!(
            "🔔 Lembrete: {}\n\nData do evento: {}\n\nEste é um lembrete automático gerado pelo sistema.",
            self.event_title,
            format_pt_br(self.event_date)
        )
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const NOW: i64 = 1734267600000;

    fn reminder_in(hours: i64) -> Reminder {
        Reminder::new_auto(
            ID::from("hearing-1"),
            "Audiência X".into(),
            NOW + hours * MILLIS_PER_HOUR,
            ReminderChannel::Both,
            NOW,
        )
        .expect("Event is more than 24 hours away")
    }

    #[test]
    fn no_reminder_when_lead_time_underflows() {
        let reminder = Reminder::new_auto(
            ID::from("hearing-1"),
            "Audiência X".into(),
            i64::MIN,
            ReminderChannel::Both,
            0,
        );
        assert!(reminder.is_none());
    }

    #[test]
    fn creates_reminder_24_hours_before_event() {
        let reminder = reminder_in(30);
        assert_eq!(reminder.reminder_date, NOW + 6 * MILLIS_PER_HOUR);
        assert_eq!(reminder.state, ReminderState::Scheduled);
        assert!(!reminder.is_sent());
        assert_eq!(reminder.attempts, 0);
    }

    #[test]
    fn does_not_create_reminder_for_close_events() {
        for event_date in &[NOW, NOW + REMINDER_LEAD_MILLIS, NOW + 5 * MILLIS_PER_HOUR] {
            let res = Reminder::new_auto(
                ID::from("hearing-1"),
                "Audiência X".into(),
                *event_date,
                ReminderChannel::Email,
                NOW,
            );
            assert!(res.is_none());
        }
        assert!(Reminder::new_auto(
            ID::from("hearing-1"),
            "Audiência X".into(),
            NOW + REMINDER_LEAD_MILLIS + 1,
            ReminderChannel::Email,
            NOW,
        )
        .is_some());
    }

    #[test]
    fn due_pending_and_upcoming() {
        let reminder = reminder_in(30);
        assert!(!reminder.is_due(NOW));
        assert!(reminder.is_pending(NOW));
        assert!(reminder.is_upcoming(NOW));
        assert!(reminder.is_due(reminder.reminder_date));
        assert!(!reminder.is_pending(reminder.reminder_date));

        let later = reminder_in(24 + 49);
        assert!(later.is_pending(NOW));
        assert!(!later.is_upcoming(NOW));
    }

    #[test]
    fn dispatch_state_machine() {
        let mut reminder = reminder_in(30);
        assert!(reminder.begin_dispatch());
        assert_eq!(reminder.state, ReminderState::Dispatching);
        assert!(reminder.is_due(reminder.reminder_date));
        reminder.mark_sent();
        assert!(reminder.is_sent());
        assert!(!reminder.is_due(reminder.reminder_date));
        assert!(!reminder.begin_dispatch());
    }

    #[test]
    fn failures_are_retried_until_budget_is_spent() {
        let policy = RetryPolicy {
            max_attempts: 3,
            backoff_millis: 1000,
        };
        let mut reminder = reminder_in(30);
        let due = reminder.reminder_date;

        reminder.begin_dispatch();
        reminder.record_failure(due, &policy);
        assert_eq!(reminder.state, ReminderState::Scheduled);
        assert_eq!(reminder.retry_at, Some(due + 1000));
        assert!(!reminder.is_due(due));
        assert!(reminder.is_due(due + 1000));

        reminder.begin_dispatch();
        reminder.record_failure(due + 1000, &policy);
        assert_eq!(reminder.retry_at, Some(due + 1000 + 2000));

        reminder.begin_dispatch();
        reminder.record_failure(due + 3000, &policy);
        assert_eq!(reminder.state, ReminderState::Failed);
        assert_eq!(reminder.attempts, 3);
        assert!(!reminder.is_due(due + 1000 * 1000));
        assert!(!reminder.is_sent());

        // Manual dispatch can still pick it up
        assert!(reminder.begin_dispatch());
        reminder.mark_sent();
        assert!(reminder.is_sent());
    }

    #[test]
    fn backoff_is_capped() {
        let policy = RetryPolicy {
            max_attempts: 100,
            backoff_millis: MILLIS_PER_HOUR,
        };
        assert_eq!(policy.next_retry_at(0, 1), MILLIS_PER_HOUR);
        assert_eq!(policy.next_retry_at(0, 3), 4 * MILLIS_PER_HOUR);
        assert_eq!(policy.next_retry_at(0, 30), MAX_RETRY_BACKOFF_MILLIS);
    }

    #[test]
    fn formats_message() {
        let reminder = reminder_in(30);
        assert_eq!(reminder.title(), "Lembrete: Audiência X");
        assert!(reminder
            .message()
            .starts_with("🔔 Lembrete: Audiência X\n\nData do evento: 16/12/2024, 16:00:00"));
    }

    #[test]
    fn parses_channels() {
        assert_eq!("email".parse::<ReminderChannel>(), Ok(ReminderChannel::Email));
        assert_eq!("whatsapp".parse::<ReminderChannel>(), Ok(ReminderChannel::WhatsApp));
        assert_eq!("both".parse::<ReminderChannel>(), Ok(ReminderChannel::Both));
        assert!("sms".parse::<ReminderChannel>().is_err());
        assert!(ReminderChannel::Both.includes_email() && ReminderChannel::Both.includes_whatsapp());
        assert!(!ReminderChannel::Email.includes_whatsapp());
    }
}
