//! Usuarios del sistema y sus roles.

use serde::{Deserialize, Serialize};

pub const ROL_ADMIN: &str = "ADMIN";
pub const ROL_SUBGERENTE: &str = "SUBGERENTE";
pub const ROL_ENCARGADO: &str = "ENCARGADO";
pub const ROL_COORDINADOR: &str = "COORDINADOR";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub dni: Option<String>,
    pub telefono: Option<String>,
    pub rol: Option<String>,
    #[serde(default = "super::organizacion::activo_por_defecto")]
    pub is_active: bool,
}

/// Carga de alta/edición de usuario. `password` solo se envía en el alta
/// o en un cambio de clave.
#[derive(Serialize, Debug, Clone, Default)]
pub struct NuevoUsuario {
    pub username: String,
    pub email: String,
    pub nombres: String,
    pub apellidos: String,
    pub dni: Option<String>,
    pub telefono: Option<String>,
    pub rol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
