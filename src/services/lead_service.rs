//! services/lead_service.rs
//! Adaptador de ingesta: convierte el CSV subido en la secuencia de leads.

use csv::ReaderBuilder;
use thiserror::Error;

use crate::models::lead_model::LeadRecord;
use crate::state::CampaignStore;

#[derive(Debug, Error)]
pub enum LeadImportError {
    /// El contenido no se pudo leer como tabla delimitada: bytes que no
    /// decodifican como texto, filas con distinto número de columnas, etc.
    #[error(transparent)]
    Malformed(#[from] csv::Error),
    #[error("missing header row")]
    MissingHeader,
}

/// Parsea los bytes crudos a la secuencia ordenada de leads. La primera
/// fila es el header (nombres de campo); cada fila siguiente es un lead.
/// El upload se rechaza entero: o entran todas las filas o ninguna.
pub fn parse_leads(bytes: &[u8]) -> Result<Vec<LeadRecord>, LeadImportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    // Con input vacío el reader devuelve un header de cero campos.
    if reader.headers()?.is_empty() {
        return Err(LeadImportError::MissingHeader);
    }

    let mut leads = Vec::new();
    for record in reader.deserialize::<LeadRecord>() {
        leads.push(record?);
    }
    Ok(leads)
}

#[derive(Clone, Debug)]
pub struct LeadService {
    store: CampaignStore,
}

impl LeadService {
    pub fn new(store: CampaignStore) -> Self {
        LeadService { store }
    }

    /// Ingesta un CSV: si parsea, reemplaza los leads actuales (y el total)
    /// sin tocar los resultados de envíos previos. Devuelve cuántos leads
    /// quedaron cargados.
    pub fn import_csv(&self, bytes: &[u8]) -> Result<usize, LeadImportError> {
        let leads = parse_leads(bytes)?;
        let count = leads.len();
        self.store.replace_leads(leads);
        log::info!("(import_csv) Se cargaron {} leads desde el CSV", count);
        Ok(count)
    }
}
