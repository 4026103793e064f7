use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::campaign_config::CampaignConfig;
use crate::logger::init_logger;
use crate::services::campaign_service::CampaignService;
use crate::services::lead_service::LeadService;
use crate::state::CampaignStore;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;
mod state;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // Estado de campaña en memoria, compartido por servicios y handlers.
    // Vive lo que vive el proceso: un reinicio lo deja vacío.
    let store = CampaignStore::new();

    let lead_service = LeadService::new(store.clone());
    let campaign_service = CampaignService::new(store.clone(), CampaignConfig::default());

    // Levantar servidor
    log::info!("Levantando servidor en 0.0.0.0:8000");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(lead_service.clone()))
            .app_data(web::Data::new(campaign_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
