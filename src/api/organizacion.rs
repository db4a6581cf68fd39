//! Rutas de taxonomías: áreas, cargos, regímenes, condiciones,
//! secciones de legajo y tipos de documento.
//!
//! Todas las pantallas de administración siguen el mismo patrón
//! (listar completo, crear, editar, activar/desactivar), así que los
//! grupos de métodos son deliberadamente paralelos.

use super::{ApiClient, ApiResult};
use crate::models::{
    Area, Cargo, CondicionLaboral, NuevaArea, NuevaSeccion, NuevoNombre, NuevoTipoDocumento,
    Regimen, SeccionLegajo, TipoDocumento,
};

impl ApiClient {
    // --- áreas ---

    pub async fn listar_areas(&self) -> ApiResult<Vec<Area>> {
        self.fetch_all("/areas/").await
    }

    pub async fn crear_area(&self, carga: &NuevaArea) -> ApiResult<Area> {
        self.post_json("/areas/", carga).await
    }

    pub async fn actualizar_area(&self, id: i64, carga: &NuevaArea) -> ApiResult<Area> {
        self.put_json(&format!("/areas/{id}/"), carga).await
    }

    pub async fn alternar_area(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/areas/{id}/toggle_active/")).await
    }

    // --- cargos ---

    pub async fn listar_cargos(&self) -> ApiResult<Vec<Cargo>> {
        self.fetch_all("/cargos/").await
    }

    pub async fn crear_cargo(&self, carga: &NuevoNombre) -> ApiResult<Cargo> {
        self.post_json("/cargos/", carga).await
    }

    pub async fn actualizar_cargo(&self, id: i64, carga: &NuevoNombre) -> ApiResult<Cargo> {
        self.put_json(&format!("/cargos/{id}/"), carga).await
    }

    pub async fn alternar_cargo(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/cargos/{id}/toggle_active/")).await
    }

    // --- regímenes ---

    pub async fn listar_regimenes(&self) -> ApiResult<Vec<Regimen>> {
        self.fetch_all("/regimenes/").await
    }

    pub async fn crear_regimen(&self, carga: &NuevoNombre) -> ApiResult<Regimen> {
        self.post_json("/regimenes/", carga).await
    }

    pub async fn actualizar_regimen(&self, id: i64, carga: &NuevoNombre) -> ApiResult<Regimen> {
        self.put_json(&format!("/regimenes/{id}/"), carga).await
    }

    pub async fn alternar_regimen(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/regimenes/{id}/toggle_active/"))
            .await
    }

    // --- condiciones laborales ---

    pub async fn listar_condiciones(&self) -> ApiResult<Vec<CondicionLaboral>> {
        self.fetch_all("/condiciones-laborales/").await
    }

    pub async fn crear_condicion(&self, carga: &NuevoNombre) -> ApiResult<CondicionLaboral> {
        self.post_json("/condiciones-laborales/", carga).await
    }

    pub async fn actualizar_condicion(
        &self,
        id: i64,
        carga: &NuevoNombre,
    ) -> ApiResult<CondicionLaboral> {
        self.put_json(&format!("/condiciones-laborales/{id}/"), carga)
            .await
    }

    pub async fn alternar_condicion(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/condiciones-laborales/{id}/toggle_active/"))
            .await
    }

    // --- secciones de legajo ---

    pub async fn listar_secciones(&self) -> ApiResult<Vec<SeccionLegajo>> {
        self.fetch_all("/secciones-legajo/").await
    }

    pub async fn crear_seccion(&self, carga: &NuevaSeccion) -> ApiResult<SeccionLegajo> {
        self.post_json("/secciones-legajo/", carga).await
    }

    pub async fn actualizar_seccion(
        &self,
        id: i64,
        carga: &NuevaSeccion,
    ) -> ApiResult<SeccionLegajo> {
        self.put_json(&format!("/secciones-legajo/{id}/"), carga).await
    }

    pub async fn alternar_seccion(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/secciones-legajo/{id}/toggle_active/"))
            .await
    }

    // --- tipos de documento ---

    pub async fn listar_tipos_documento(&self) -> ApiResult<Vec<TipoDocumento>> {
        self.fetch_all("/tipos-documento/").await
    }

    pub async fn listar_tipos_por_seccion(&self, seccion_id: i64) -> ApiResult<Vec<TipoDocumento>> {
        self.fetch_all(&format!("/tipos-documento/?seccion={seccion_id}"))
            .await
    }

    pub async fn crear_tipo_documento(
        &self,
        carga: &NuevoTipoDocumento,
    ) -> ApiResult<TipoDocumento> {
        self.post_json("/tipos-documento/", carga).await
    }

    pub async fn actualizar_tipo_documento(
        &self,
        id: i64,
        carga: &NuevoTipoDocumento,
    ) -> ApiResult<TipoDocumento> {
        self.put_json(&format!("/tipos-documento/{id}/"), carga).await
    }

    pub async fn alternar_tipo_documento(&self, id: i64) -> ApiResult<()> {
        self.post_accion(&format!("/tipos-documento/{id}/toggle_active/"))
            .await
    }
}
