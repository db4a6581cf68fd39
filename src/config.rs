//! Configuración del cliente: URL base, credencial bearer y timeouts.
//!
//! Se resuelve en capas: valores por defecto, archivo TOML opcional y por
//! último variables de entorno (`SIGELP_BASE_URL`, `SIGELP_TOKEN`,
//! `SIGELP_TIMEOUT_SECONDS`, `SIGELP_PAGE_SIZE`). Un `.env` en el
//! directorio de trabajo se honra vía `dotenv`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No se pudo leer el archivo de configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuración TOML inválida: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Falta la URL base de la API (SIGELP_BASE_URL)")]
    SinBaseUrl,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Raíz de la API REST, p. ej. `http://localhost:8000/api`.
    pub base_url: String,
    /// Token bearer; `None` solo sirve contra un backend sin autenticación.
    pub token: Option<String>,
    pub timeout_seconds: u64,
    /// Tamaño de página pedido en los listados completos.
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            token: None,
            timeout_seconds: 30,
            page_size: 100,
        }
    }
}

impl Config {
    /// Carga desde un archivo TOML y aplica el entorno encima.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contenido = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contenido)?;
        config.aplicar_entorno();
        config.validar()
    }

    /// Carga solo desde el entorno (y `.env` si existe).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mut config = Config::default();
        config.aplicar_entorno();
        config.validar()
    }

    fn aplicar_entorno(&mut self) {
        if let Ok(url) = std::env::var("SIGELP_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(token) = std::env::var("SIGELP_TOKEN") {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
        if let Ok(t) = std::env::var("SIGELP_TIMEOUT_SECONDS") {
            if let Ok(segundos) = t.parse() {
                self.timeout_seconds = segundos;
            }
        }
        if let Ok(t) = std::env::var("SIGELP_PAGE_SIZE") {
            if let Ok(tamano) = t.parse() {
                self.page_size = tamano;
            }
        }
    }

    fn validar(self) -> Result<Self, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::SinBaseUrl);
        }
        Ok(self)
    }
}
