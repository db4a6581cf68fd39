//! Cliente SIGELP: API REST del sistema de legajos y ensamblado de
//! documentos en PDF.
//!
//! El backend es dueño de todos los datos y reglas de negocio; este
//! crate consume sus rutas HTTP y arma, del lado del cliente, el PDF
//! único del legajo o del escalafón de una persona.

pub mod api;
pub mod assembly;
pub mod config;
pub mod models;
pub mod selector;
