//! Entidades del backend SIGELP, tal como las serializa la API REST.
//!
//! El backend es dueño de todos los datos; estos structs son copias
//! transitorias en memoria. Los nombres de campo siguen el JSON del
//! backend (snake_case en español), por lo que no hace falta renombrar.

pub mod eventos;
pub mod organizacion;
pub mod personal;
pub mod tickets;
pub mod usuarios;

pub use eventos::*;
pub use organizacion::*;
pub use personal::*;
pub use tickets::*;
pub use usuarios::*;
