use crate::date::{format_pt_br, MILLIS_PER_HOUR};
use crate::notification::ProcessUpdateKind;
use crate::reminder::ReminderChannel;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Lower bound (exclusive) of the time until an event for its client reminder to go out
pub const EVENT_WINDOW_START_MILLIS: i64 = 23 * MILLIS_PER_HOUR;
/// Upper bound (inclusive) of the time until an event for its client reminder to go out
pub const EVENT_WINDOW_END_MILLIS: i64 = 25 * MILLIS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Audiencia,
    Prazo,
    Reuniao,
    Outro,
}

impl Default for EventKind {
    fn default() -> Self {
        Self::Outro
    }
}

/// An entry in the firm's calendar: a hearing, a deadline or a meeting
/// with a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent {
    pub id: ID,
    pub title: String,
    pub date: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub process_number: Option<String>,
    pub kind: EventKind,
    /// Channel(s) of the staff reminder created together with the event
    pub reminder_channel: ReminderChannel,
    pub created: i64,
}

/// The hourly check sends the client reminder while the event is between
/// 23 and 25 hours away. The window is wider than the polling cadence so a
/// poll always lands inside it.
pub fn is_within_reminder_window(event_date: i64, now: i64) -> bool {
    let until_event = event_date - now;
    until_event > EVENT_WINDOW_START_MILLIS && until_event <= EVENT_WINDOW_END_MILLIS
}

impl ScheduledEvent {
    pub fn is_within_reminder_window(&self, now: i64) -> bool {
        is_within_reminder_window(self.date, now)
    }

    pub fn process_number(&self) -> &str {
        self.process_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("N/A")
    }

    pub fn process_update_kind(&self) -> ProcessUpdateKind {
        match self.kind {
            EventKind::Audiencia => ProcessUpdateKind::AudienciaAgendada,
            _ => ProcessUpdateKind::PrazoProximo,
        }
    }

    /// Body of the reminder sent to the client the day before
    pub fn reminder_message(&self) -> String {
        let date = format_pt_br(self.date);
        match self.kind {
            EventKind::Audiencia => format!(
                "Lembrete: Você tem uma audiência agendada para amanhã!\n\nEvento: {}\nData/Hora: {}\n\nPor favor, compareça no horário indicado.",
                self.title, date
            ),
            EventKind::Prazo => format!(
                "Atenção: Prazo importante se aproxima!\n\nEvento: {}\nData/Hora: {}\n\nNão perca este prazo!",
                self.title, date
            ),
            EventKind::Reuniao | EventKind::Outro => format!(
                "Lembrete: Você tem um compromisso agendado para amanhã!\n\nEvento: {}\nData/Hora: {}",
                self.title, date
            ),
        }
    }
}

impl Entity for ScheduledEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
