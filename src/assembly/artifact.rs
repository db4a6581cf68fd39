//! Ranura de artefacto de salida: dueña única del PDF ensamblado.
//!
//! El equivalente del objeto-URL del visor: como mucho un archivo vivo
//! por ranura. `reemplazar` libera el anterior antes de emitir el nuevo
//! y `Drop` libera lo que quede, así las regeneraciones repetidas no
//! acumulan salidas huérfanas.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ArtifactSlot {
    actual: Option<PathBuf>,
}

impl ArtifactSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escribe los bytes en `destino` y lo adopta como artefacto
    /// vigente, liberando el anterior si lo había.
    pub fn reemplazar(&mut self, destino: PathBuf, bytes: &[u8]) -> io::Result<&Path> {
        self.liberar()?;
        fs::write(&destino, bytes)?;
        debug!(destino = %destino.display(), "artefacto emitido");
        Ok(self.actual.insert(destino).as_path())
    }

    /// Borra el artefacto vigente, si existe.
    pub fn liberar(&mut self) -> io::Result<()> {
        if let Some(ruta) = self.actual.take() {
            if ruta.exists() {
                fs::remove_file(&ruta)?;
                debug!(ruta = %ruta.display(), "artefacto liberado");
            }
        }
        Ok(())
    }

    /// Cede la propiedad del archivo sin borrarlo (p. ej. cuando el
    /// usuario pidió conservar la salida).
    pub fn persistir(&mut self) -> Option<PathBuf> {
        self.actual.take()
    }

    pub fn ruta(&self) -> Option<&Path> {
        self.actual.as_deref()
    }
}

impl Drop for ArtifactSlot {
    fn drop(&mut self) {
        let _ = self.liberar();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reemplazar_libera_el_anterior() {
        let dir = tempfile::tempdir().unwrap();
        let primero = dir.path().join("v1.pdf");
        let segundo = dir.path().join("v2.pdf");

        let mut ranura = ArtifactSlot::new();
        ranura.reemplazar(primero.clone(), b"uno").unwrap();
        assert!(primero.exists());

        ranura.reemplazar(segundo.clone(), b"dos").unwrap();
        assert!(!primero.exists(), "el artefacto previo debió liberarse");
        assert!(segundo.exists());
    }

    #[test]
    fn drop_libera_lo_vigente() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("salida.pdf");
        {
            let mut ranura = ArtifactSlot::new();
            ranura.reemplazar(ruta.clone(), b"pdf").unwrap();
        }
        assert!(!ruta.exists());
    }

    #[test]
    fn persistir_desarma_la_limpieza() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("definitivo.pdf");
        let mut ranura = ArtifactSlot::new();
        ranura.reemplazar(ruta.clone(), b"pdf").unwrap();
        assert_eq!(ranura.persistir().as_deref(), Some(ruta.as_path()));
        drop(ranura);
        assert!(ruta.exists());
    }
}
