use lembrete_domain::Notification;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    html: String,
}

/// Client for the transactional e-mail endpoint
pub struct EmailClient {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
}

impl EmailClient {
    pub fn new(api_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.map(|url| url.trim_end_matches('/').to_string()),
            api_key,
        }
    }

    pub async fn send(&self, notification: &Notification) -> bool {
        let (api_url, api_key) = match (&self.api_url, &self.api_key) {
            (Some(url), Some(key)) => (url, key),
            _ => {
                warn!("E-mail endpoint is not configured");
                return false;
            }
        };
        let to = match notification.recipient.email() {
            Some(to) => to,
            None => {
                warn!("No e-mail address for recipient: {}", notification.recipient.name);
                return false;
            }
        };

        let body = SendEmailRequest {
            to,
            subject: &notification.title,
            html: render_email_html(notification),
        };
        let res = self
            .client
            .post(&format!("{}/v1/email/send", api_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match res {
            Ok(res) if res.status().is_success() => {
                info!("E-mail sent to: {}", to);
                true
            }
            Ok(res) => {
                let status = res.status();
                let text = res.text().await.unwrap_or_default();
                error!("E-mail endpoint responded with {}: {}", status, text);
                false
            }
            Err(e) => {
                error!("Unable to send e-mail. Error: {:?}", e);
                false
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("<br>"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The firm's e-mail layout around the notification message
pub fn render_email_html(notification: &Notification) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background-color: #1e293b; padding: 20px; text-align: center;">
    <h1 style="color: white; margin: 0;">Djair Rota Advogados</h1>
  </div>
  <div style="padding: 30px; background-color: #f8fafc;">
    <h2 style="color: #1e293b;">Olá, {}!</h2>
    <p style="color: #475569; line-height: 1.6;">{}</p>
    <hr style="border: none; border-top: 1px solid #e2e8f0; margin: 20px 0;" />
    <p style="color: #64748b; font-size: 14px;">
      Esta é uma mensagem automática do sistema de gerenciamento jurídico.<br>
      Para mais informações, entre em contato conosco.
    </p>
    <p style="color: #64748b; font-size: 14px;">
      <strong>Djair Rota Advogados</strong><br>
      Rua Coronel Diogo, 525 - Mococa/SP<br>
      Telefone: (19) 3656-4903<br>
      E-mail: djair@djairrotta.com.br
    </p>
  </div>
</div>"#,
        escape_html(&notification.recipient.name),
        escape_html(&notification.message)
    )
}
