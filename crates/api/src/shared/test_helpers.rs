use lembrete_domain::Notification;
use lembrete_infra::{INotifier, ISys, LembreteContext};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sun Dec 15 2024 13:00:00 UTC
pub const NOW: i64 = 1734267600000;
pub const HOUR: i64 = 1000 * 60 * 60;

pub struct StaticTimeSys(pub i64);

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Email,
    WhatsApp,
}

/// Records every notification instead of delivering it
pub struct RecordingNotifier {
    pub email_succeeds: bool,
    pub whatsapp_succeeds: bool,
    pub delay: Duration,
    sent: Mutex<Vec<(Channel, Notification)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            email_succeeds: true,
            whatsapp_succeeds: true,
            delay: Duration::from_millis(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            email_succeeds: false,
            whatsapp_succeeds: false,
            ..Self::new()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn sent(&self) -> Vec<(Channel, Notification)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_on(&self, channel: Channel) -> Vec<Notification> {
        self.sent()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, n)| n)
            .collect()
    }

    async fn record(&self, channel: Channel, notification: &Notification, succeeds: bool) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.sent
            .lock()
            .unwrap()
            .push((channel, notification.clone()));
        succeeds
    }
}

#[async_trait::async_trait]
impl INotifier for RecordingNotifier {
    async fn send_email(&self, notification: &Notification) -> bool {
        self.record(Channel::Email, notification, self.email_succeeds)
            .await
    }

    async fn send_whatsapp(&self, notification: &Notification) -> bool {
        self.record(Channel::WhatsApp, notification, self.whatsapp_succeeds)
            .await
    }
}

/// In memory context with the clock pinned at `now`
pub fn setup_context(now: i64, notifier: RecordingNotifier) -> (LembreteContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(notifier);
    let mut ctx = LembreteContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx.notifier = notifier.clone();
    (ctx, notifier)
}

pub fn set_time(ctx: &mut LembreteContext, now: i64) {
    ctx.sys = Arc::new(StaticTimeSys(now));
}
