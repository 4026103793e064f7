//! app.rs
use crate::handlers::{campaign_handler, dashboard_handler, lead_handler};
use actix_web::web;

/// Tope para el body crudo de los uploads; el default de actix (256 KB) se
/// queda corto para un CSV de leads real.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES));
    cfg.service(
        web::scope("/api")
            .route(
                "/upload-csv",
                web::post().to(lead_handler::upload_csv_endpoint),
            )
            .route("/leads", web::get().to(lead_handler::list_leads_endpoint))
            .route(
                "/send-emails",
                web::post().to(campaign_handler::send_emails_endpoint),
            )
            .route(
                "/email-results",
                web::get().to(campaign_handler::email_results_endpoint),
            )
            .route("/stats", web::get().to(campaign_handler::stats_endpoint)),
    )
    .route("/", web::get().to(dashboard_handler::dashboard_endpoint));
}
