//! Tickets de mesa de partes (solicitudes sobre legajos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ESTADO_PENDIENTE: &str = "PENDIENTE";
pub const ESTADO_COMPLETADO: &str = "COMPLETADO";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ticket {
    pub id: i64,
    pub numero_ticket: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub persona_responsable: Option<String>,
    pub area: Option<i64>,
    pub area_nombre: Option<String>,
    pub observaciones: Option<String>,
    pub estado: Option<String>,
    pub fecha_creacion: Option<DateTime<Utc>>,
    pub fecha_resolucion: Option<DateTime<Utc>>,
    pub creado_por: Option<i64>,
}

impl Ticket {
    pub fn pendiente(&self) -> bool {
        self.estado.as_deref() == Some(ESTADO_PENDIENTE)
    }
}

/// Carga para crear un ticket nuevo; el backend asigna número y estado.
#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevoTicket {
    pub nombre: String,
    pub apellido: String,
    pub persona_responsable: Option<String>,
    pub area: Option<i64>,
    pub observaciones: String,
}
