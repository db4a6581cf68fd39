//! Personal, documentos de legajo e historial de escalafón.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Detalle anidado que el backend incluye para las referencias actuales
/// (área, régimen, condición) del personal.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReferenciaDetalle {
    pub id: Option<i64>,
    pub nombre: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Personal {
    pub id: i64,
    pub dni: Option<String>,
    pub nombres: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,

    pub area_actual: Option<i64>,
    pub area_actual_detalle: Option<ReferenciaDetalle>,
    pub area_nombre: Option<String>,
    pub regimen_actual: Option<i64>,
    pub regimen_actual_detalle: Option<ReferenciaDetalle>,
    pub regimen_nombre: Option<String>,
    pub condicion_actual: Option<i64>,
    pub condicion_actual_detalle: Option<ReferenciaDetalle>,
    pub condicion_nombre: Option<String>,
    pub cargo_actual: Option<String>,
    pub cargo_nombre: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,

    #[serde(default = "super::organizacion::activo_por_defecto")]
    pub activo: bool,
    pub observaciones: Option<String>,
    pub fecha_creacion: Option<DateTime<Utc>>,
}

impl Personal {
    pub fn nombre_completo(&self) -> String {
        let partes = [
            self.nombres.as_deref(),
            self.apellido_paterno.as_deref(),
            self.apellido_materno.as_deref(),
        ];
        partes
            .iter()
            .flatten()
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Nombre del área actual, prefiriendo el detalle anidado cuando
    /// la API lo incluye (mismo orden de preferencia que la vista web).
    pub fn area(&self) -> Option<&str> {
        self.area_actual_detalle
            .as_ref()
            .and_then(|d| d.nombre.as_deref())
            .or(self.area_nombre.as_deref())
    }

    pub fn cargo(&self) -> Option<&str> {
        self.cargo_nombre.as_deref().or(self.cargo_actual.as_deref())
    }

    pub fn regimen(&self) -> Option<&str> {
        self.regimen_actual_detalle
            .as_ref()
            .and_then(|d| d.nombre.as_deref())
            .or(self.regimen_nombre.as_deref())
    }

    pub fn condicion(&self) -> Option<&str> {
        self.condicion_actual_detalle
            .as_ref()
            .and_then(|d| d.nombre.as_deref())
            .or(self.condicion_nombre.as_deref())
    }
}

/// Documento archivado en el legajo de una persona. `archivo` es una URL
/// (absoluta o relativa al backend) al PDF binario.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LegajoDocumento {
    pub id: i64,
    pub personal: Option<i64>,
    pub seccion_id: Option<i64>,
    pub seccion_nombre: Option<String>,
    pub tipo_documento_id: Option<i64>,
    pub tipo_documento_nombre: Option<String>,
    pub nombre_documento: Option<String>,
    pub descripcion: Option<String>,
    pub archivo: Option<String>,
    pub numero_documento: Option<String>,
    pub fecha_documento: Option<NaiveDate>,
    pub fecha_creacion: Option<DateTime<Utc>>,
}

/// Registro del historial de escalafón: un tramo de asignación
/// (área/cargo/régimen/condición) con su resolución opcional.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Escalafon {
    pub id: i64,
    pub personal: Option<i64>,
    pub area: Option<i64>,
    pub area_nombre: Option<String>,
    pub cargo: Option<String>,
    pub cargo_nombre: Option<String>,
    pub regimen: Option<i64>,
    pub regimen_nombre: Option<String>,
    pub condicion_laboral: Option<i64>,
    pub condicion_nombre: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub resolucion: Option<String>,
    pub documento_resolucion: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_registro: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_completo_ignora_faltantes() {
        let p: Personal = serde_json::from_str(
            r#"{"id": 7, "nombres": "Rosa", "apellido_paterno": "Quispe"}"#,
        )
        .unwrap();
        assert_eq!(p.nombre_completo(), "Rosa Quispe");
        assert!(p.activo);
    }

    #[test]
    fn area_prefiere_detalle_anidado() {
        let p: Personal = serde_json::from_str(
            r#"{
                "id": 1,
                "area_nombre": "Viejo",
                "area_actual_detalle": {"id": 3, "nombre": "Rentas"}
            }"#,
        )
        .unwrap();
        assert_eq!(p.area(), Some("Rentas"));
    }

    #[test]
    fn documento_con_campos_minimos() {
        let d: LegajoDocumento = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert!(d.archivo.is_none());
        assert!(d.seccion_id.is_none());
    }
}
