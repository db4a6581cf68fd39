//! Resolución del orden de los documentos del legajo.
//!
//! La clave primaria es el `orden` de la sección que contiene al
//! documento, la secundaria `fecha_creacion` ascendente, y el desempate
//! final es el orden en que el backend devolvió la lista (el sort es
//! estable). Secciones inactivas o irresolubles mandan el documento al
//! final vía el centinela.

use crate::models::{LegajoDocumento, SeccionLegajo};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Clave de orden para documentos cuya sección no resuelve: sección
/// inactiva, `seccion_id` desconocido u `orden` nulo.
pub const ORDEN_SENTINELA: i64 = i64::MAX;

/// Índice sección-id → orden, solo sobre secciones activas.
pub fn indice_de_orden(secciones: &[SeccionLegajo]) -> HashMap<i64, i64> {
    secciones
        .iter()
        .filter(|s| s.activo)
        .map(|s| (s.id, s.orden.unwrap_or(ORDEN_SENTINELA)))
        .collect()
}

fn clave(doc: &LegajoDocumento, indice: &HashMap<i64, i64>) -> (i64, DateTime<Utc>) {
    let orden = doc
        .seccion_id
        .and_then(|id| indice.get(&id).copied())
        .unwrap_or(ORDEN_SENTINELA);
    // Sin fecha de creación se trata como la más antigua posible,
    // igual que hacía la vista original con `new Date(0)`.
    let fecha = doc.fecha_creacion.unwrap_or(DateTime::UNIX_EPOCH);
    (orden, fecha)
}

/// Ordena in situ por (orden de sección, fecha de creación); estable,
/// así que el orden de llegada del backend queda como clave terciaria.
pub fn ordenar_documentos(documentos: &mut [LegajoDocumento], indice: &HashMap<i64, i64>) {
    documentos.sort_by_key(|d| clave(d, indice));
}
