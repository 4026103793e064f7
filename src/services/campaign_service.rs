//! services/campaign_service.rs
//! Motor de envío de campañas: una única sesión SMTP autenticada para todo
//! el batch, un intento por lead en orden, un resultado por destinatario y
//! commit atómico del estado al final.

use anyhow::{Context, Result};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use uuid::Uuid;

use crate::config::campaign_config::CampaignConfig;
use crate::models::campaign_model::{
    DeliveryStatus, EmailConfig, EmailOutcome, EmailResponse,
};
use crate::models::lead_model::LeadRecord;
use crate::state::CampaignStore;

pub type SmtpSession = AsyncSmtpTransport<Tokio1Executor>;

// ======================================================
// Resolución de campos del lead
// ======================================================

/// Claves aceptadas para cada campo lógico, en orden de prioridad.
pub const RECIPIENT_KEYS: [&str; 3] = ["Email", "email", "EMAIL"];
pub const NAME_KEYS: [&str; 3] = ["Name", "name", "NAME"];
pub const COMPANY_KEYS: [&str; 3] = ["Company", "company", "COMPANY"];
pub const INTEREST_KEYS: [&str; 2] = ["Interest Category", "interest"];

/// Valores por defecto cuando el lead no trae el campo.
const DEFAULT_NAME: &str = "Valued Customer";
const DEFAULT_COMPANY: &str = "your company";
const DEFAULT_INTEREST: &str = "business solutions";

/// Marcadores para leads sin ninguna dirección utilizable.
pub const UNRESOLVED_RECIPIENT: &str = "N/A";
pub const NO_EMAIL_ERROR: &str = "No email address found";

// ======================================================
// Errores fatales de la invocación
// ======================================================

/// Errores que rechazan o abortan la campaña completa. Los fallos por
/// destinatario NO viven acá: esos viajan como outcome Failed dentro de la
/// secuencia de resultados y nunca cortan el batch.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("No leads data found. Please upload a CSV first.")]
    NoLeads,
    #[error("Email credentials are required")]
    InvalidCredentials,
    #[error("SMTP connection error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("SMTP connection error: the relay did not accept the session")]
    RelayUnavailable,
}

/// Lo que deja el loop de envío antes del commit.
pub struct BatchResult {
    pub outcomes: Vec<EmailOutcome>,
    pub successful: usize,
    pub failed: usize,
}

#[derive(Clone, Debug)]
pub struct CampaignService {
    store: CampaignStore,
    config: CampaignConfig,
}

impl CampaignService {
    pub fn new(store: CampaignStore, config: CampaignConfig) -> Self {
        CampaignService { store, config }
    }

    /// Envía la campaña a TODOS los leads cargados, secuencialmente y en el
    /// orden del CSV, sobre una sesión SMTP autenticada que se abre una sola
    /// vez. Los fallos por destinatario no cortan el envío; solo el fallo de
    /// sesión aborta, y en ese caso el snapshot previo del store queda
    /// intacto.
    pub async fn send_campaign(
        &self,
        email_config: EmailConfig,
    ) -> Result<EmailResponse, CampaignError> {
        let leads = self.store.leads();
        if leads.is_empty() {
            return Err(CampaignError::NoLeads);
        }
        if email_config.sender_email.is_empty() || email_config.sender_password.is_empty() {
            return Err(CampaignError::InvalidCredentials);
        }

        let campaign_id = Uuid::new_v4();
        log::info!(
            "(send_campaign) [{}] Iniciando campaña: {} leads, remitente={}, asunto='{}'",
            campaign_id,
            leads.len(),
            email_config.sender_email,
            email_config.email_subject
        );

        let mailer = self.open_relay_session(&email_config).await?;
        log::info!(
            "(send_campaign) [{}] Sesión SMTP abierta con {}:{}",
            campaign_id,
            self.config.relay_host,
            self.config.relay_port
        );

        let batch = self.run_batch(&mailer, &leads, &email_config).await;
        // La sesión se cierra antes de publicar resultados.
        drop(mailer);

        self.store
            .commit_run(batch.outcomes, batch.successful, batch.failed);
        log::info!(
            "(send_campaign) [{}] Campaña completada: {} exitosos, {} fallidos",
            campaign_id,
            batch.successful,
            batch.failed
        );

        Ok(EmailResponse {
            message: format!(
                "Email campaign completed! {} successful, {} failed",
                batch.successful, batch.failed
            ),
            successful: batch.successful,
            failed: batch.failed,
        })
    }

    /// Abre y autentica la sesión contra el relay. `test_connection` fuerza
    /// el handshake completo (TCP + TLS + AUTH) acá mismo, de modo que unas
    /// credenciales malas aborten antes del primer envío; la conexión queda
    /// viva y se reutiliza durante todo el batch.
    pub async fn open_relay_session(
        &self,
        email_config: &EmailConfig,
    ) -> Result<SmtpSession, CampaignError> {
        let tls = TlsParameters::new(self.config.relay_host.clone())?;
        let mailer: SmtpSession = SmtpSession::relay(&self.config.relay_host)?
            .port(self.config.relay_port)
            .credentials(Credentials::new(
                email_config.sender_email.clone(),
                email_config.sender_password.clone(),
            ))
            .tls(Tls::Wrapper(tls))
            .timeout(Some(self.config.send_timeout))
            .build();

        if !mailer.test_connection().await? {
            return Err(CampaignError::RelayUnavailable);
        }
        Ok(mailer)
    }

    /// Recorre los leads en orden, un intento por cada uno, y junta los
    /// resultados. Nunca aborta: cada fallo queda registrado en su outcome y
    /// el loop sigue con el siguiente lead.
    pub async fn run_batch(
        &self,
        mailer: &SmtpSession,
        leads: &[LeadRecord],
        email_config: &EmailConfig,
    ) -> BatchResult {
        let mut outcomes = Vec::with_capacity(leads.len());
        let mut successful = 0usize;
        let mut failed = 0usize;

        for lead in leads {
            let outcome = self.deliver_one(mailer, lead, email_config).await;
            match outcome.status {
                DeliveryStatus::Sent => {
                    successful += 1;
                    log::info!("(run_batch) Enviado a {}", outcome.email);
                    // Pausa solo tras envíos exitosos, para no gatillar el
                    // rate limit del relay. Los caminos de fallo no esperan.
                    tokio::time::sleep(self.config.send_delay).await;
                }
                DeliveryStatus::Failed => {
                    failed += 1;
                    log::error!(
                        "(run_batch) Falló {}: {}",
                        outcome.email,
                        outcome.error.as_deref().unwrap_or("?")
                    );
                }
            }
            outcomes.push(outcome);
        }

        BatchResult {
            outcomes,
            successful,
            failed,
        }
    }

    /// Un intento de envío para UN lead: resuelve el destinatario,
    /// personaliza el cuerpo y transmite por la sesión abierta. Siempre
    /// devuelve un outcome; acá el fallo es dato, nunca excepción.
    pub async fn deliver_one(
        &self,
        mailer: &SmtpSession,
        lead: &LeadRecord,
        email_config: &EmailConfig,
    ) -> EmailOutcome {
        let recipient = match lead.resolve(&RECIPIENT_KEYS) {
            Some(found) => found,
            None => return EmailOutcome::failed(UNRESOLVED_RECIPIENT, NO_EMAIL_ERROR),
        };

        match self.transmit(mailer, lead, recipient, email_config).await {
            Ok(()) => EmailOutcome::sent(recipient),
            Err(e) => EmailOutcome::failed(recipient, format!("{e:#}")),
        }
    }

    /// Construye el sobre y lo transmite con timeout. Los errores de acá son
    /// locales al destinatario: el caller los vuelca en un outcome Failed.
    async fn transmit(
        &self,
        mailer: &SmtpSession,
        lead: &LeadRecord,
        recipient: &str,
        email_config: &EmailConfig,
    ) -> Result<()> {
        let from: Mailbox = email_config
            .sender_email
            .parse()
            .context("Invalid sender address")?;
        let to: Mailbox = recipient.parse().context("Invalid recipient address")?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email_config.email_subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(build_email_body(lead, &email_config.sender_email))?;

        tokio::time::timeout(self.config.send_timeout, mailer.send(message)).await??;

        Ok(())
    }
}

// ======================================================
// Síntesis del mensaje
// ======================================================

/// Cuerpo personalizado en texto plano. Cada campo faltante cae a su
/// default; la firma sale de la parte local del remitente.
pub fn build_email_body(lead: &LeadRecord, sender_email: &str) -> String {
    let name = lead.resolve(&NAME_KEYS).unwrap_or(DEFAULT_NAME);
    let company = lead.resolve(&COMPANY_KEYS).unwrap_or(DEFAULT_COMPANY);
    let interest = lead.resolve(&INTEREST_KEYS).unwrap_or(DEFAULT_INTEREST);
    let signoff = title_case(local_part(sender_email));

    format!(
        "Dear {name},\n\n\
         I hope this email finds you well. I'm reaching out regarding {interest} solutions \
         that could benefit {company}.\n\n\
         Based on our research, I believe we have services that align perfectly with your \
         business needs. Our team specializes in providing customized solutions that drive \
         growth and efficiency.\n\n\
         I would love to schedule a brief call to discuss how we can help {company} achieve \
         its goals. Are you available for a 15-minute conversation this week?\n\n\
         Looking forward to hearing from you.\n\n\
         Best regards,\n\
         {signoff}"
    )
}

/// Parte local del remitente: "ana.perez" de "ana.perez@acme.com".
fn local_part(address: &str) -> &str {
    address.split('@').next().unwrap_or(address)
}

/// Capitaliza cada palabra: la primera letra tras cualquier carácter no
/// alfabético va en mayúscula y el resto en minúscula. "sam.smith" pasa a
/// "Sam.Smith".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}
