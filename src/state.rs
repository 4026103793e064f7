//! state.rs
//! Estado de campaña compartido en memoria: leads cargados, resultados del
//! último envío y stats agregadas. Nada se persiste; un restart arranca con
//! el store vacío.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::campaign_model::{CampaignStats, EmailOutcome};
use crate::models::lead_model::LeadRecord;

#[derive(Debug, Default)]
struct CampaignState {
    leads: Vec<LeadRecord>,
    outcomes: Vec<EmailOutcome>,
    stats: CampaignStats,
}

/// Handle clonable sobre el estado de campaña. Lo construye main y se
/// inyecta en los servicios y handlers que lo necesitan; cada clon apunta
/// al mismo estado.
#[derive(Debug, Clone, Default)]
pub struct CampaignStore {
    inner: Arc<RwLock<CampaignState>>,
}

impl CampaignStore {
    pub fn new() -> Self {
        CampaignStore::default()
    }

    /// Reemplaza la secuencia de leads y resetea total_leads.
    /// No toca resultados ni contadores de campañas previas.
    pub fn replace_leads(&self, leads: Vec<LeadRecord>) {
        let mut state = self.write();
        state.stats.total_leads = leads.len();
        state.leads = leads;
    }

    /// Snapshot de los leads en el orden en que se cargaron.
    pub fn leads(&self) -> Vec<LeadRecord> {
        self.read().leads.clone()
    }

    pub fn lead_count(&self) -> usize {
        self.read().leads.len()
    }

    pub fn outcomes(&self) -> Vec<EmailOutcome> {
        self.read().outcomes.clone()
    }

    pub fn stats(&self) -> CampaignStats {
        self.read().stats.clone()
    }

    /// Commit atómico de una campaña completada: los resultados reemplazan
    /// por completo a los anteriores y los contadores de envío se
    /// recalculan. total_leads queda como lo dejó la última carga de CSV.
    /// Una campaña abortada por fallo de sesión nunca llega acá, así que
    /// el snapshot previo sobrevive intacto.
    pub fn commit_run(&self, outcomes: Vec<EmailOutcome>, successful: usize, failed: usize) {
        let mut state = self.write();
        state.stats.emails_sent = successful + failed;
        state.stats.successful = successful;
        state.stats.failed = failed;
        state.outcomes = outcomes;
    }

    // Los guards nunca se retienen a través de un await.
    fn read(&self) -> RwLockReadGuard<'_, CampaignState> {
        self.inner.read().expect("campaign state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, CampaignState> {
        self.inner.write().expect("campaign state lock poisoned")
    }
}
