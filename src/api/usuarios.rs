//! Administración de usuarios del sistema.

use super::{ApiClient, ApiResult};
use crate::models::{NuevoUsuario, Usuario};
use serde_json::json;

impl ApiClient {
    pub async fn listar_usuarios(&self) -> ApiResult<Vec<Usuario>> {
        self.fetch_all("/usuarios/").await
    }

    pub async fn crear_usuario(&self, carga: &NuevoUsuario) -> ApiResult<Usuario> {
        self.post_json("/usuarios/", carga).await
    }

    pub async fn actualizar_usuario(&self, id: i64, carga: &NuevoUsuario) -> ApiResult<Usuario> {
        self.put_json(&format!("/usuarios/{id}/"), carga).await
    }

    pub async fn alternar_usuario(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/usuarios/{id}/toggle_active/")).await
    }

    pub async fn restablecer_password(&self, id: i64, password: &str) -> ApiResult<()> {
        let _: serde_json::Value = self
            .patch_json(&format!("/usuarios/{id}/"), &json!({ "password": password }))
            .await?;
        Ok(())
    }
}
