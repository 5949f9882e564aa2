use crate::date::{format_pt_br_date, format_pt_br_time};

/// Title and body of a ready-made notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationTemplate {
    pub title: String,
    pub message: String,
}

pub fn audiencia_proxima(case_number: &str, date: i64, location: &str) -> NotificationTemplate {
    NotificationTemplate {
        title: "Lembrete de Audiência".into(),
        message: format!(
            "Você tem uma audiência agendada:\n\nProcesso: {}\nData: {} às {}\nLocal: {}\n\nPrepare-se com antecedência!",
            case_number,
            format_pt_br_date(date),
            format_pt_br_time(date),
            location
        ),
    }
}

pub fn prazo_vencendo(case_number: &str, prazo: &str, dias: u32) -> NotificationTemplate {
    NotificationTemplate {
        title: "Alerta de Prazo".into(),
        message: format!(
            "⚠️ Prazo próximo do vencimento!\n\nProcesso: {}\nPrazo: {}\nVence em: {} {}\n\nAção necessária!",
            case_number,
            prazo,
            dias,
            if dias == 1 { "dia" } else { "dias" }
        ),
    }
}

pub fn processo_atualizado(case_number: &str, atualizacao: &str) -> NotificationTemplate {
    NotificationTemplate {
        title: "Atualização de Processo".into(),
        message: format!(
            "Processo {} foi atualizado:\n\n{}\n\nVerifique os detalhes no sistema.",
            case_number, atualizacao
        ),
    }
}

pub fn novo_cliente(client_name: &str, advogado: &str) -> NotificationTemplate {
    NotificationTemplate {
        title: "Novo Cliente Atribuído".into(),
        message: format!(
            "Novo cliente foi atribuído a você:\n\nCliente: {}\nAdvogado responsável: {}\n\nAcesse o sistema para mais detalhes.",
            client_name, advogado
        ),
    }
}
