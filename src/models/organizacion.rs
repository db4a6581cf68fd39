//! Taxonomías organizacionales: áreas, cargos, regímenes, condiciones,
//! secciones de legajo y tipos de documento.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Area {
    pub id: i64,
    pub nombre: String,
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
    pub fecha_creacion: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cargo {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Regimen {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CondicionLaboral {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
}

/// Sección principal del legajo (p. ej. "1. Currículo Vitae Datos").
///
/// Solo las secciones con `activo = true` participan en el ordenamiento
/// de documentos; `orden` puede venir nulo y no tiene por qué ser único.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeccionLegajo {
    pub id: i64,
    pub numero: Option<i64>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub color: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
    pub orden: Option<i64>,
    pub fecha_creacion: Option<DateTime<Utc>>,
}

/// Subtipo de documento dentro de una sección (p. ej. "1.2 Estudios").
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TipoDocumento {
    pub id: i64,
    pub seccion: Option<i64>,
    pub seccion_nombre: Option<String>,
    pub numero: Option<i64>,
    pub codigo: Option<String>,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
    #[serde(default)]
    pub es_obligatorio: bool,
    pub orden: Option<i64>,
}

/// Carga de alta/edición para un área.
#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevaArea {
    pub nombre: String,
    pub codigo: String,
    pub descripcion: Option<String>,
}

/// Carga de alta/edición para las taxonomías de solo nombre
/// (cargos, regímenes, condiciones laborales).
#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevoNombre {
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevaSeccion {
    pub numero: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub color: Option<String>,
    pub orden: Option<i64>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevoTipoDocumento {
    pub seccion: i64,
    pub numero: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub es_obligatorio: bool,
    pub orden: Option<i64>,
}

pub(crate) fn activo_por_defecto() -> bool {
    true
}
