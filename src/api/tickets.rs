//! Rutas de tickets de mesa de partes.

use super::{ApiClient, ApiResult};
use crate::models::{NuevoTicket, Ticket, ESTADO_COMPLETADO};
use serde_json::json;

impl ApiClient {
    pub async fn listar_tickets(&self) -> ApiResult<Vec<Ticket>> {
        self.fetch_all("/tickets/").await
    }

    pub async fn crear_ticket(&self, carga: &NuevoTicket) -> ApiResult<Ticket> {
        self.post_json("/tickets/", carga).await
    }

    /// Marca un ticket como completado; el backend fija la fecha de
    /// resolución.
    pub async fn completar_ticket(&self, id: i64) -> ApiResult<Ticket> {
        self.patch_json(
            &format!("/tickets/{id}/"),
            &json!({ "estado": ESTADO_COMPLETADO }),
        )
        .await
    }
}
