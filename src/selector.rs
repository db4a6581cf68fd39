//! Máquina de estados del selector buscable: un desplegable de opción
//! única con filtro por subcadena, sin red ni persistencia.
//!
//! Tres estados: cerrado, abierto sin filtro y abierto filtrado. Elegir
//! una opción cierra y limpia el filtro; limpiar la selección informa
//! "sin valor" hacia afuera.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcion {
    pub id: i64,
    pub nombre: String,
}

impl Opcion {
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estado {
    Cerrado,
    AbiertoSinFiltro,
    AbiertoFiltrado,
}

#[derive(Debug, Clone)]
pub struct SelectorBuscable {
    opciones: Vec<Opcion>,
    abierto: bool,
    filtro: String,
    seleccion: Option<i64>,
}

impl SelectorBuscable {
    pub fn new(opciones: Vec<Opcion>) -> Self {
        Self {
            opciones,
            abierto: false,
            filtro: String::new(),
            seleccion: None,
        }
    }

    pub fn estado(&self) -> Estado {
        match (self.abierto, self.filtro.is_empty()) {
            (false, _) => Estado::Cerrado,
            (true, true) => Estado::AbiertoSinFiltro,
            (true, false) => Estado::AbiertoFiltrado,
        }
    }

    pub fn abrir(&mut self) {
        self.abierto = true;
    }

    /// Cerrar descarta el filtro (clic fuera del desplegable).
    pub fn cerrar(&mut self) {
        self.abierto = false;
        self.filtro.clear();
    }

    pub fn escribir(&mut self, texto: &str) {
        self.abierto = true;
        self.filtro = texto.to_string();
    }

    /// Opciones visibles bajo el filtro vigente (subcadena sin
    /// distinguir mayúsculas).
    pub fn visibles(&self) -> Vec<&Opcion> {
        let aguja = self.filtro.to_lowercase();
        self.opciones
            .iter()
            .filter(|opcion| opcion.nombre.to_lowercase().contains(&aguja))
            .collect()
    }

    /// Elige una opción por id; devuelve el id informado hacia afuera,
    /// o `None` si el id no existe en la lista.
    pub fn seleccionar(&mut self, id: i64) -> Option<i64> {
        if !self.opciones.iter().any(|opcion| opcion.id == id) {
            return None;
        }
        self.seleccion = Some(id);
        self.cerrar();
        Some(id)
    }

    /// Borra la selección (la X del campo).
    pub fn limpiar(&mut self) {
        self.seleccion = None;
        self.filtro.clear();
    }

    pub fn seleccion(&self) -> Option<i64> {
        self.seleccion
    }

    pub fn etiqueta(&self) -> Option<&str> {
        let id = self.seleccion?;
        self.opciones
            .iter()
            .find(|opcion| opcion.id == id)
            .map(|opcion| opcion.nombre.as_str())
    }

    /// Lo que muestra el campo de texto: el filtro mientras está
    /// abierto, la etiqueta seleccionada cuando está cerrado.
    pub fn texto_visible(&self) -> &str {
        if self.abierto {
            &self.filtro
        } else {
            self.etiqueta().unwrap_or("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> SelectorBuscable {
        SelectorBuscable::new(vec![
            Opcion::new(1, "Gerencia Municipal"),
            Opcion::new(2, "Subgerencia de Recursos Humanos"),
            Opcion::new(3, "Rentas"),
        ])
    }

    #[test]
    fn transiciones_de_estado() {
        let mut s = selector();
        assert_eq!(s.estado(), Estado::Cerrado);
        s.abrir();
        assert_eq!(s.estado(), Estado::AbiertoSinFiltro);
        s.escribir("ren");
        assert_eq!(s.estado(), Estado::AbiertoFiltrado);
        s.cerrar();
        assert_eq!(s.estado(), Estado::Cerrado);
        // El filtro no sobrevive al cierre.
        s.abrir();
        assert_eq!(s.estado(), Estado::AbiertoSinFiltro);
    }

    #[test]
    fn filtra_sin_distinguir_mayusculas() {
        let mut s = selector();
        s.escribir("RECURSOS");
        let visibles = s.visibles();
        assert_eq!(visibles.len(), 1);
        assert_eq!(visibles[0].id, 2);
    }

    #[test]
    fn sin_filtro_muestra_todo() {
        let mut s = selector();
        s.abrir();
        assert_eq!(s.visibles().len(), 3);
    }

    #[test]
    fn seleccionar_cierra_y_reporta() {
        let mut s = selector();
        s.escribir("ren");
        assert_eq!(s.seleccionar(3), Some(3));
        assert_eq!(s.estado(), Estado::Cerrado);
        assert_eq!(s.etiqueta(), Some("Rentas"));
        assert_eq!(s.texto_visible(), "Rentas");
    }

    #[test]
    fn seleccionar_id_inexistente_no_cambia_nada() {
        let mut s = selector();
        assert_eq!(s.seleccionar(99), None);
        assert_eq!(s.seleccion(), None);
    }

    #[test]
    fn limpiar_reporta_vacio() {
        let mut s = selector();
        s.seleccionar(1);
        s.limpiar();
        assert_eq!(s.seleccion(), None);
        assert_eq!(s.texto_visible(), "");
    }

    #[test]
    fn filtro_sin_resultados() {
        let mut s = selector();
        s.escribir("zzz");
        assert!(s.visibles().is_empty());
    }
}
