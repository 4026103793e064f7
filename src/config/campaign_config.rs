//! config/campaign_config.rs
//! Parámetros del motor de envío (relay fijo, pausas, timeouts).

use std::time::Duration;

/// Relay SMTP del motor; el mismo para todas las campañas.
pub const SMTP_RELAY_HOST: &str = "smtp.gmail.com";
/// Puerto SMTPS (TLS implícito).
pub const SMTP_RELAY_PORT: u16 = 465;

/// Configuración del motor de campañas. El endpoint del relay NO es
/// configurable por invocación: queda fijado al construir el servicio
/// (producción usa el Default; los tests apuntan a un relay inalcanzable).
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    pub relay_host: String,
    pub relay_port: u16,
    /// Pausa tras cada envío exitoso, para respetar el rate limit del relay.
    pub send_delay: Duration,
    /// Tiempo máximo por operación SMTP (handshake o envío individual).
    pub send_timeout: Duration,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            relay_host: SMTP_RELAY_HOST.to_string(),
            relay_port: SMTP_RELAY_PORT,
            send_delay: Duration::from_secs(2),
            send_timeout: Duration::from_secs(30),
        }
    }
}
