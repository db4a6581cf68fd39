//! Ensamblado de documentos: arma un único PDF visualizable a partir de
//! los PDF archivados de una persona.
//!
//! Hay dos variantes con el mismo esqueleto: el legajo (documentos
//! ordenados por sección y fecha) y el escalafón (carátula generada más
//! las resoluciones del historial). Ambas son de mejor esfuerzo: la
//! caída de un documento fuente nunca aborta el resto, y no se
//! reintenta dentro de una misma corrida. Las descargas van en serie,
//! una a la vez, en el orden ya resuelto.

pub mod artifact;
pub mod cancel;
pub mod cover;
pub mod fetch;
pub mod merge;
pub mod order;


pub use artifact::ArtifactSlot;
pub use cancel::CancelToken;
pub use fetch::DocumentSource;

use crate::api::{ApiClient, ApiError};
use crate::models::{Escalafon, LegajoDocumento, Personal, SeccionLegajo};
use lopdf::Document;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Falla al traer los metadatos (secciones, listados, ficha):
    /// fatal, no se produce ningún PDF.
    #[error("Error de la API: {0}")]
    Api(#[from] ApiError),
    /// El legajo no tiene documentos: estado informativo, distinto de
    /// una falla.
    #[error("No hay documentos en el legajo para visualizar")]
    SinDocumentos,
    /// Los metadatos llegaron pero ninguna descarga individual
    /// prosperó.
    #[error("No se pudo cargar ningún documento")]
    NadaCargado,
    #[error("Error al generar el PDF: {0}")]
    Pdf(#[from] merge::MergeError),
    #[error("Ensamblado cancelado")]
    Cancelado,
}

/// Metadatos de entrada de la variante legajo.
pub struct EntradaLegajo {
    pub secciones: Vec<SeccionLegajo>,
    pub documentos: Vec<LegajoDocumento>,
}

/// Metadatos de entrada de la variante escalafón.
pub struct EntradaEscalafon {
    pub personal: Personal,
    pub historial: Vec<Escalafon>,
}

/// Variante legajo con los metadatos ya traídos del backend.
pub async fn ensamblar_legajo_con(
    entrada: EntradaLegajo,
    fuente: &dyn DocumentSource,
    cancel: &CancelToken,
) -> Result<Vec<u8>, AssemblyError> {
    if entrada.documentos.is_empty() {
        return Err(AssemblyError::SinDocumentos);
    }

    let indice = order::indice_de_orden(&entrada.secciones);
    let mut documentos = entrada.documentos;
    order::ordenar_documentos(&mut documentos, &indice);

    let mut cargados: Vec<Document> = Vec::new();
    for documento in &documentos {
        let Some(archivo) = documento.archivo.as_deref() else {
            continue;
        };
        if cancel.cancelado() {
            return Err(AssemblyError::Cancelado);
        }
        match descargar_pdf(fuente, archivo).await {
            Ok(pdf) => {
                debug!(
                    documento = documento.id,
                    seccion = documento.seccion_nombre.as_deref().unwrap_or("?"),
                    tipo = documento.tipo_documento_nombre.as_deref().unwrap_or("?"),
                    "documento agregado"
                );
                cargados.push(pdf);
            }
            // Equivale a que el documento no exista en esta corrida.
            Err(error) => warn!(
                documento = documento.id,
                %error,
                "documento omitido"
            ),
        }
    }

    if cargados.is_empty() {
        return Err(AssemblyError::NadaCargado);
    }
    if cancel.cancelado() {
        return Err(AssemblyError::Cancelado);
    }

    let agregados = cargados.len();
    let combinado = merge::combinar(cargados)?;
    let bytes = merge::serializar(combinado)?;
    info!(
        documentos = agregados,
        omitidos = documentos.len() - agregados,
        "legajo ensamblado"
    );
    Ok(bytes)
}

/// Variante escalafón con los metadatos ya traídos del backend. Un
/// historial vacío sigue produciendo la carátula.
pub async fn ensamblar_escalafon_con(
    entrada: EntradaEscalafon,
    fuente: &dyn DocumentSource,
    cancel: &CancelToken,
) -> Result<Vec<u8>, AssemblyError> {
    let caratula = cover::caratula_escalafon(&entrada.personal, &entrada.historial)?;

    let mut partes = vec![caratula];
    for registro in &entrada.historial {
        let Some(resolucion) = registro.documento_resolucion.as_deref() else {
            continue;
        };
        if cancel.cancelado() {
            return Err(AssemblyError::Cancelado);
        }
        match descargar_pdf(fuente, resolucion).await {
            Ok(pdf) => {
                debug!(
                    registro = registro.id,
                    resolucion = registro.resolucion.as_deref().unwrap_or("?"),
                    "resolución agregada"
                );
                partes.push(pdf);
            }
            Err(error) => warn!(registro = registro.id, %error, "resolución omitida"),
        }
    }

    if cancel.cancelado() {
        return Err(AssemblyError::Cancelado);
    }
    let agregadas = partes.len() - 1;
    let combinado = merge::combinar(partes)?;
    let bytes = merge::serializar(combinado)?;
    info!(resoluciones = agregadas, "escalafón ensamblado");
    Ok(bytes)
}

async fn descargar_pdf(
    fuente: &dyn DocumentSource,
    referencia: &str,
) -> anyhow::Result<Document> {
    let bytes = fuente.fetch(referencia).await?;
    Ok(merge::parse_pdf(&bytes)?)
}

/// Trae los metadatos del backend y ensambla el legajo completo de una
/// persona.
pub async fn ensamblar_legajo(
    api: &ApiClient,
    personal_id: i64,
    cancel: &CancelToken,
) -> Result<Vec<u8>, AssemblyError> {
    let secciones = api.listar_secciones().await?;
    let documentos = api.obtener_legajo(personal_id).await?;
    ensamblar_legajo_con(
        EntradaLegajo {
            secciones,
            documentos,
        },
        api,
        cancel,
    )
    .await
}

/// Trae la ficha y el historial y ensambla el escalafón de una persona.
pub async fn ensamblar_escalafon(
    api: &ApiClient,
    personal_id: i64,
    cancel: &CancelToken,
) -> Result<Vec<u8>, AssemblyError> {
    let personal = api.obtener_personal(personal_id).await?;
    let historial = api.obtener_escalafon(personal_id).await?;
    ensamblar_escalafon_con(EntradaEscalafon { personal, historial }, api, cancel).await
}
