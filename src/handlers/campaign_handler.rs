//! handlers/campaign_handler.rs
use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use crate::models::campaign_model::EmailConfig;
use crate::services::campaign_service::{CampaignError, CampaignService};
use crate::state::CampaignStore;

/// POST /api/send-emails
/// Dispara la campaña sobre los leads cargados y devuelve el resumen
/// agregado. El detalle por destinatario queda en /api/email-results.
pub async fn send_emails_endpoint(
    campaign_service: web::Data<CampaignService>,
    req: web::Json<EmailConfig>,
) -> HttpResponse {
    match campaign_service.send_campaign(req.into_inner()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            log::error!("Email campaign error: {}", e);
            // Los rechazos de precondición son culpa del request; los de
            // sesión SMTP son un problema nuestro o del relay.
            let status_code = match e {
                CampaignError::NoLeads | CampaignError::InvalidCredentials => {
                    StatusCode::BAD_REQUEST
                }
                CampaignError::Transport(_) | CampaignError::RelayUnavailable => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            HttpResponse::build(status_code).json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/email-results
/// Resultados por destinatario de la última campaña completada.
pub async fn email_results_endpoint(store: web::Data<CampaignStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.outcomes())
}

/// GET /api/stats
pub async fn stats_endpoint(store: web::Data<CampaignStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.stats())
}
