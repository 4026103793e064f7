//! handlers/mod.rs
//! Módulo que agrupa los handlers HTTP del servicio.

pub mod campaign_handler;
pub mod dashboard_handler;
pub mod lead_handler;
