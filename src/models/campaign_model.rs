//! models/campaign_model.rs
//! Requests/responses del API de campañas y estado agregado.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Formato con el que el dashboard consume los timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn default_subject() -> String {
    "Personalized Business Proposal".to_string()
}

/// Credenciales + asunto que llegan en POST /api/send-emails.
/// Se usan solo durante esa invocación: el password nunca se loguea
/// ni se guarda en el store.
#[derive(Clone, Deserialize)]
pub struct EmailConfig {
    pub sender_email: String,
    pub sender_password: String,
    #[serde(default = "default_subject")]
    pub email_subject: String,
}

// Debug manual: el password no sale ni por un {:?} accidental.
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"***")
            .field("email_subject", &self.email_subject)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// Resultado de UN intento de envío; se genera exactamente uno por lead,
/// en el mismo orden de la secuencia de leads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailOutcome {
    pub email: String,
    pub status: DeliveryStatus,
    pub timestamp: String,
    pub error: Option<String>,
}

impl EmailOutcome {
    pub fn sent(recipient: &str) -> Self {
        EmailOutcome {
            email: recipient.to_string(),
            status: DeliveryStatus::Sent,
            timestamp: now_stamp(),
            error: None,
        }
    }

    pub fn failed(recipient: &str, error: impl Into<String>) -> Self {
        EmailOutcome {
            email: recipient.to_string(),
            status: DeliveryStatus::Failed,
            timestamp: now_stamp(),
            error: Some(error.into()),
        }
    }
}

fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Snapshot agregado de la última campaña completada. Se sobreescribe
/// entero en cada commit; total_leads lo fija la carga del CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStats {
    pub total_leads: usize,
    pub emails_sent: usize,
    pub successful: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// Resumen que recibe el caller al terminar la campaña completa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub message: String,
    pub successful: usize,
    pub failed: usize,
}
