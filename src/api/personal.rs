//! Rutas de personal: ficha, legajo documental e historial de escalafón.

use super::{ApiClient, ApiResult};
use crate::models::{Escalafon, LegajoDocumento, Personal};

impl ApiClient {
    pub async fn listar_personal(&self) -> ApiResult<Vec<Personal>> {
        self.fetch_all("/personal/").await
    }

    /// Búsqueda del lado del servidor (DNI o apellidos).
    pub async fn buscar_personal(&self, termino: &str) -> ApiResult<Vec<Personal>> {
        self.fetch_all(&format!("/personal/?search={termino}")).await
    }

    pub async fn obtener_personal(&self, id: i64) -> ApiResult<Personal> {
        self.get_json(&format!("/personal/{id}/")).await
    }

    pub async fn alternar_personal(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/personal/{id}/toggle_active/")).await
    }

    /// Documentos del legajo de una persona. Esta ruta devuelve el
    /// arreglo directo, sin sobre de paginación.
    pub async fn obtener_legajo(&self, personal_id: i64) -> ApiResult<Vec<LegajoDocumento>> {
        self.get_json(&format!("/personal/{personal_id}/legajo/")).await
    }

    /// Historial de escalafón completo de una persona, en el orden en
    /// que lo devuelve el backend.
    pub async fn obtener_escalafon(&self, personal_id: i64) -> ApiResult<Vec<Escalafon>> {
        self.fetch_all(&format!("/escalafones/?personal={personal_id}"))
            .await
    }
}
