//! Feed de auditoría (solo lectura desde el cliente).

use super::{ApiClient, ApiResult};
use crate::models::RegistroEvento;

impl ApiClient {
    pub async fn listar_eventos(&self) -> ApiResult<Vec<RegistroEvento>> {
        self.fetch_all("/registros-eventos/").await
    }

    /// Registros que afectan a una persona concreta.
    pub async fn eventos_de_personal(&self, personal_id: i64) -> ApiResult<Vec<RegistroEvento>> {
        self.fetch_all(&format!("/registros-eventos/?personal_afectado={personal_id}"))
            .await
    }
}
