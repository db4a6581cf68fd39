//! Cliente HTTP tipado sobre la API REST del backend SIGELP.

pub mod client;
pub mod eventos;
pub mod organizacion;
pub mod pagination;
pub mod personal;
pub mod tickets;
pub mod usuarios;

pub use client::ApiClient;
pub use pagination::Listado;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error de red o de decodificación: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL inválida: {0}")]
    Url(#[from] url::ParseError),
    #[error("La API respondió {status}: {cuerpo}")]
    Status { status: u16, cuerpo: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
