//! services/mod.rs
//! Módulo que agrupa las capas de negocio: ingesta de leads y envío de
//! campañas.

pub mod campaign_service;
pub mod lead_service;
