use serde::{Deserialize, Serialize};

/// Category of a notification, used to honour the user's preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Audiencia,
    Prazo,
    Atualizacao,
    Lembrete,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Recipient {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// A message ready to be delivered through one or more channels
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// E-mail subject and WhatsApp heading
    pub title: String,
    pub message: String,
    pub recipient: Recipient,
}

/// Which channels and which kinds of notifications the firm wants sent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub email: bool,
    pub whatsapp: bool,
    pub audiencias: bool,
    pub prazos: bool,
    pub atualizacoes: bool,
}

impl NotificationConfig {
    /// Reminders can not be switched off
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Audiencia => self.audiencias,
            NotificationKind::Prazo => self.prazos,
            NotificationKind::Atualizacao => self.atualizacoes,
            NotificationKind::Lembrete => true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            email: true,
            whatsapp: true,
            audiencias: true,
            prazos: true,
            atualizacoes: true,
        }
    }
}

/// Which kind of change in a legal process a client is told about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessUpdateKind {
    NovaMovimentacao,
    AudienciaAgendada,
    PrazoProximo,
    StatusAlterado,
}

impl ProcessUpdateKind {
    pub fn subject(&self) -> &'static str {
        match self {
            Self::NovaMovimentacao => "Nova Movimentação no Processo",
            Self::AudienciaAgendada => "Audiência Agendada",
            Self::PrazoProximo => "Prazo Próximo - Atenção Necessária",
            Self::StatusAlterado => "Status do Processo Atualizado",
        }
    }

    pub fn message(&self, process_number: &str, details: &str) -> String {
        match self {
            Self::NovaMovimentacao => format!(
                "Houve uma nova movimentação no seu processo {}.\n\n{}\n\nPara mais detalhes, acesse o Portal do Cliente ou entre em contato conosco.",
                process_number, details
            ),
            Self::AudienciaAgendada => format!(
                "Foi agendada uma audiência para o processo {}.\n\n{}\n\nPor favor, compareça no horário e local indicados.",
                process_number, details
            ),
            Self::PrazoProximo => format!(
                "Há um prazo importante se aproximando no processo {}.\n\n{}\n\nPor favor, entre em contato urgentemente.",
                process_number, details
            ),
            Self::StatusAlterado => format!(
                "O status do processo {} foi atualizado.\n\n{}\n\nAcesse o Portal do Cliente para mais informações.",
                process_number, details
            ),
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            Self::AudienciaAgendada => NotificationKind::Audiencia,
            Self::PrazoProximo => NotificationKind::Prazo,
            Self::NovaMovimentacao | Self::StatusAlterado => NotificationKind::Atualizacao,
        }
    }
}

/// Outcome of a fan-out over both channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub email: bool,
    pub whatsapp: bool,
}

impl DispatchReport {
    pub fn any(&self) -> bool {
        self.email || self.whatsapp
    }
}
