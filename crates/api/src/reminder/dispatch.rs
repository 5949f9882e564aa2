use futures::future::OptionFuture;
use lembrete_domain::{Notification, NotificationKind, Recipient, Reminder, SenderIdentity};
use lembrete_infra::LembreteContext;
use tracing::warn;

fn reminder_notification(reminder: &Reminder, sender: &SenderIdentity) -> Notification {
    Notification {
        kind: NotificationKind::Lembrete,
        title: reminder.title(),
        message: reminder.message(),
        recipient: Recipient {
            name: sender.name.clone(),
            email: sender.email.clone(),
            phone: sender.phone.clone(),
        },
    }
}

/// Sends the `Reminder` to the firm's own staff through the channels it
/// targets. Channels without an address are skipped.
///
/// Returns true when at least one channel delivered it within the
/// dispatch timeout.
pub async fn dispatch_reminder(
    reminder: &Reminder,
    sender: &SenderIdentity,
    ctx: &LembreteContext,
) -> bool {
    let notification = reminder_notification(reminder, sender);
    let recipient = &notification.recipient;
    let send_email = reminder.channel.includes_email() && recipient.email().is_some();
    let send_whatsapp = reminder.channel.includes_whatsapp() && recipient.phone().is_some();
    if !send_email && !send_whatsapp {
        warn!(
            "No address of the sender for the channel(s) of reminder: {}",
            reminder.id
        );
        return false;
    }

    let email: OptionFuture<_> = send_email
        .then(|| ctx.notifier.send_email(&notification))
        .into();
    let whatsapp: OptionFuture<_> = send_whatsapp
        .then(|| ctx.notifier.send_whatsapp(&notification))
        .into();
    let delivery = async {
        let (email, whatsapp) = futures::join!(email, whatsapp);
        email.unwrap_or(false) || whatsapp.unwrap_or(false)
    };

    match tokio::time::timeout(ctx.config.dispatch_timeout, delivery).await {
        Ok(delivered) => delivered,
        Err(_) => {
            warn!("Dispatch of reminder: {} timed out", reminder.id);
            false
        }
    }
}
