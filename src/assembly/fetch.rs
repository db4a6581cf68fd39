//! Costura de descarga de documentos fuente.
//!
//! El ensamblado no habla HTTP directamente: consume un `DocumentSource`
//! para poder probarse con una fuente en memoria y para que un fallo de
//! descarga quede aislado por documento.

use crate::api::ApiClient;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Descarga el binario referenciado (URL absoluta o relativa al
    /// backend). Un error aquí afecta solo a ese documento.
    async fn fetch(&self, referencia: &str) -> anyhow::Result<Bytes>;
}

#[async_trait]
impl DocumentSource for ApiClient {
    async fn fetch(&self, referencia: &str) -> anyhow::Result<Bytes> {
        Ok(self.fetch_binary(referencia).await?)
    }
}
