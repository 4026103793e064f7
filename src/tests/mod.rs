//! tests/mod.rs
//! Pruebas del servicio: ingesta, motor de campañas, estado y endpoints.

mod state_tests;
