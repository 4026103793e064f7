//! models/lead_model.rs
//! Registros de leads tal como llegan del CSV subido.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Un lead es un mapa campo -> valor sin esquema fijo: cada CSV puede traer
/// columnas distintas (`Email`, `email`, `Company`, ...). El orden de los
/// registros en la secuencia importa (es el orden de envío); el orden de los
/// campos dentro de un registro no.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadRecord {
    pub fields: HashMap<String, String>,
}

impl LeadRecord {
    /// Resuelve un campo lógico probando `keys` en orden de prioridad.
    /// Gana la primera clave presente con valor NO vacío; las claves con
    /// valor vacío se saltan y se sigue con la siguiente.
    pub fn resolve(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .map(|value| value.as_str())
            .find(|value| !value.is_empty())
    }
}

#[cfg(test)]
impl LeadRecord {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        LeadRecord {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
