//! Feed de auditoría: catálogo de eventos y registros de acciones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Evento {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistroEvento {
    pub id: i64,
    pub evento: Option<i64>,
    pub evento_nombre: Option<String>,
    pub usuario_ejecutor: Option<i64>,
    pub usuario_ejecutor_nombre: Option<String>,
    pub usuario_afectado: Option<i64>,
    pub usuario_afectado_nombre: Option<String>,
    pub personal_afectado: Option<i64>,
    pub personal_afectado_nombre: Option<String>,
    pub descripcion: Option<String>,
    pub fecha: Option<DateTime<Utc>>,
}
