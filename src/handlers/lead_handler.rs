//! handlers/lead_handler.rs
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::campaign_model::UploadResponse;
use crate::services::lead_service::LeadService;
use crate::state::CampaignStore;

/// POST /api/upload-csv
/// Recibe el CSV crudo en el body y reemplaza los leads cargados.
pub async fn upload_csv_endpoint(
    lead_service: web::Data<LeadService>,
    body: web::Bytes,
) -> HttpResponse {
    match lead_service.import_csv(&body) {
        Ok(count) => HttpResponse::Ok().json(UploadResponse {
            message: format!("Successfully uploaded {} leads", count),
        }),
        Err(e) => {
            log::error!("CSV upload error: {}", e);
            HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": format!("Error processing CSV: {}", e)
            }))
        }
    }
}

/// GET /api/leads
/// Devuelve los leads tal cual se cargaron, en el orden del CSV.
pub async fn list_leads_endpoint(store: web::Data<CampaignStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.leads())
}
