//! Cancelación cooperativa de un ensamblado en curso.
//!
//! El ensamblado consulta el token antes de cada descarga y antes de
//! serializar, así una corrida superada por otra navegación termina en
//! `Cancelado` en vez de completar trabajo que nadie va a mirar.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelar(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn cancelado(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
