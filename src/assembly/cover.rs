//! Carátula del escalafón: resumen del personal y tabla del historial,
//! generados con `lopdf` (tipografía Helvetica, A4 vertical).

use super::merge::MergeError;
use crate::models::{Escalafon, Personal};
use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const ANCHO: f32 = 595.28;
const ALTO: f32 = 841.89;
const MARGEN: f32 = 40.0;
const PIE: f32 = 60.0;

const AZUL: (f32, f32, f32) = (0.0, 0.2, 0.4);
const GRIS_CLARO: (f32, f32, f32) = (0.9, 0.9, 0.9);
const GRIS_FILA: (f32, f32, f32) = (0.96, 0.96, 0.96);
const NEGRO: (f32, f32, f32) = (0.0, 0.0, 0.0);
const BLANCO: (f32, f32, f32) = (1.0, 1.0, 1.0);
const GRIS_TEXTO: (f32, f32, f32) = (0.4, 0.4, 0.4);

const FUENTE_NORMAL: &[u8] = b"F1";
const FUENTE_NEGRITA: &[u8] = b"F2";

// Bordes izquierdos de las columnas de la tabla del historial:
// N°, fecha inicio, fecha fin, área, cargo, régimen, condición, doc.
const COLUMNAS: [f32; 8] = [40.0, 68.0, 128.0, 188.0, 288.0, 358.0, 428.0, 518.0];
const ANCHO_CARACTER: f32 = 0.5;

/// WinAnsi comparte con Latin-1 todo el rango que nos interesa
/// (tildes, eñes, signos); lo que quede fuera degrada a `?`.
fn codificar(texto: &str) -> Vec<u8> {
    texto
        .chars()
        .map(|c| {
            let codigo = c as u32;
            if codigo <= 0xFF {
                codigo as u8
            } else {
                b'?'
            }
        })
        .collect()
}

fn recortar(texto: &str, max: usize) -> String {
    if texto.chars().count() <= max {
        texto.to_string()
    } else {
        let cortado: String = texto.chars().take(max.saturating_sub(1)).collect();
        format!("{cortado}.")
    }
}

fn fecha_corta(fecha: Option<NaiveDate>) -> String {
    match fecha {
        Some(f) => f.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Acumula operaciones de contenido página por página.
struct Escritor {
    paginas: Vec<Vec<Operation>>,
    actual: Vec<Operation>,
    y: f32,
}

impl Escritor {
    fn new() -> Self {
        Self {
            paginas: Vec::new(),
            actual: Vec::new(),
            y: ALTO,
        }
    }

    fn salto_de_pagina(&mut self) {
        let terminada = std::mem::take(&mut self.actual);
        self.paginas.push(terminada);
        self.y = ALTO - MARGEN;
    }

    fn asegurar_espacio(&mut self, alto: f32) {
        if self.y - alto < PIE {
            self.salto_de_pagina();
        }
    }

    fn rectangulo(&mut self, x: f32, y: f32, ancho: f32, alto: f32, color: (f32, f32, f32)) {
        self.actual.push(Operation::new(
            "rg",
            vec![color.0.into(), color.1.into(), color.2.into()],
        ));
        self.actual.push(Operation::new(
            "re",
            vec![x.into(), y.into(), ancho.into(), alto.into()],
        ));
        self.actual.push(Operation::new("f", vec![]));
    }

    fn texto(
        &mut self,
        x: f32,
        y: f32,
        fuente: &[u8],
        tamano: f32,
        color: (f32, f32, f32),
        contenido: &str,
    ) {
        self.actual.push(Operation::new("BT", vec![]));
        self.actual.push(Operation::new(
            "Tf",
            vec![Object::Name(fuente.to_vec()), tamano.into()],
        ));
        self.actual.push(Operation::new(
            "rg",
            vec![color.0.into(), color.1.into(), color.2.into()],
        ));
        self.actual
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.actual.push(Operation::new(
            "Tj",
            vec![Object::String(
                codificar(contenido),
                lopdf::StringFormat::Literal,
            )],
        ));
        self.actual.push(Operation::new("ET", vec![]));
    }

    /// Centrado aproximado: Helvetica ronda el medio cuerpo por glifo.
    fn texto_centrado(
        &mut self,
        y: f32,
        fuente: &[u8],
        tamano: f32,
        color: (f32, f32, f32),
        contenido: &str,
    ) {
        let ancho = contenido.chars().count() as f32 * tamano * ANCHO_CARACTER;
        self.texto((ANCHO - ancho) / 2.0, y, fuente, tamano, color, contenido);
    }

    fn barra_de_seccion(&mut self, titulo: &str) {
        self.asegurar_espacio(30.0);
        self.rectangulo(MARGEN, self.y - 16.0, ANCHO - 2.0 * MARGEN, 16.0, GRIS_CLARO);
        self.texto(MARGEN + 6.0, self.y - 12.0, FUENTE_NEGRITA, 11.0, AZUL, titulo);
        self.y -= 26.0;
    }

    fn terminar(mut self) -> Vec<Vec<Operation>> {
        if !self.actual.is_empty() || self.paginas.is_empty() {
            let terminada = std::mem::take(&mut self.actual);
            self.paginas.push(terminada);
        }
        self.paginas
    }
}

/// Construye el documento de carátula del escalafón.
pub fn caratula_escalafon(
    personal: &Personal,
    historial: &[Escalafon],
) -> Result<Document, MergeError> {
    let mut escritor = Escritor::new();

    // Banda de título.
    escritor.rectangulo(0.0, ALTO - 85.0, ANCHO, 85.0, AZUL);
    escritor.texto_centrado(ALTO - 40.0, FUENTE_NEGRITA, 20.0, BLANCO, "HISTORIAL ESCALAFÓN");
    escritor.texto_centrado(
        ALTO - 58.0,
        FUENTE_NORMAL,
        11.0,
        BLANCO,
        "Sistema de Gestión de Legajos del Personal",
    );
    let emision = chrono::Local::now().format("%d/%m/%Y");
    escritor.texto_centrado(
        ALTO - 74.0,
        FUENTE_NORMAL,
        9.0,
        BLANCO,
        &format!("Fecha de emisión: {emision}"),
    );
    escritor.y = ALTO - 110.0;

    // Datos del personal en dos columnas.
    escritor.barra_de_seccion("DATOS DEL PERSONAL");
    let datos = [
        ("DNI:", personal.dni.clone().unwrap_or_else(|| "-".into())),
        (
            "Nombres:",
            personal.nombres.clone().unwrap_or_else(|| "-".into()),
        ),
        (
            "Apellido Paterno:",
            personal
                .apellido_paterno
                .clone()
                .unwrap_or_else(|| "-".into()),
        ),
        (
            "Apellido Materno:",
            personal
                .apellido_materno
                .clone()
                .unwrap_or_else(|| "-".into()),
        ),
        (
            "Área Actual:",
            personal.area().unwrap_or("-").to_string(),
        ),
        (
            "Cargo Actual:",
            personal.cargo().unwrap_or("-").to_string(),
        ),
        (
            "Régimen Actual:",
            personal.regimen().unwrap_or("-").to_string(),
        ),
        (
            "Condición Laboral:",
            personal.condicion().unwrap_or("-").to_string(),
        ),
    ];
    for (indice, (etiqueta, valor)) in datos.iter().enumerate() {
        let columna = indice % 2;
        let fila = (indice / 2) as f32;
        let x = if columna == 0 { MARGEN } else { ANCHO / 2.0 + 10.0 };
        let y = escritor.y - fila * 16.0;
        escritor.texto(x, y, FUENTE_NEGRITA, 10.0, NEGRO, etiqueta);
        escritor.texto(x + 95.0, y, FUENTE_NORMAL, 10.0, NEGRO, &recortar(valor, 30));
    }
    escritor.y -= (datos.len() as f32 / 2.0).ceil() * 16.0 + 20.0;

    // Tabla del historial.
    escritor.barra_de_seccion("HISTORIAL DE ESCALAFÓN");
    if historial.is_empty() {
        escritor.texto_centrado(
            escritor.y - 10.0,
            FUENTE_NORMAL,
            10.0,
            GRIS_TEXTO,
            "No hay registros en el historial de escalafón",
        );
        escritor.y -= 30.0;
    } else {
        encabezado_de_tabla(&mut escritor);
        for (indice, registro) in historial.iter().enumerate() {
            // El encabezado de columnas se repite en cada página que
            // la tabla desborde.
            if escritor.y - 14.0 < PIE {
                escritor.salto_de_pagina();
                encabezado_de_tabla(&mut escritor);
            }
            fila_de_tabla(&mut escritor, indice, registro);
        }
    }

    let paginas = escritor.terminar();
    documento_desde_paginas(con_pie_de_pagina(paginas))
}

fn encabezado_de_tabla(escritor: &mut Escritor) {
    escritor.asegurar_espacio(30.0);
    escritor.rectangulo(MARGEN, escritor.y - 14.0, ANCHO - 2.0 * MARGEN, 14.0, AZUL);
    let titulos = [
        "N°",
        "Fecha Inicio",
        "Fecha Fin",
        "Área",
        "Cargo",
        "Régimen",
        "Condición",
        "Doc.",
    ];
    for (columna, titulo) in titulos.iter().enumerate() {
        escritor.texto(
            COLUMNAS[columna] + 2.0,
            escritor.y - 10.0,
            FUENTE_NEGRITA,
            8.0,
            BLANCO,
            titulo,
        );
    }
    escritor.y -= 18.0;
}

fn fila_de_tabla(escritor: &mut Escritor, indice: usize, registro: &Escalafon) {
    if indice % 2 == 1 {
        escritor.rectangulo(MARGEN, escritor.y - 11.0, ANCHO - 2.0 * MARGEN, 13.0, GRIS_FILA);
    }
    let fin = match registro.fecha_fin {
        Some(f) => f.format("%d/%m/%Y").to_string(),
        None => "Actual".to_string(),
    };
    let cargo = registro
        .cargo
        .as_deref()
        .or(registro.cargo_nombre.as_deref())
        .unwrap_or("-");
    let celdas = [
        (indice + 1).to_string(),
        fecha_corta(registro.fecha_inicio),
        fin,
        recortar(registro.area_nombre.as_deref().unwrap_or("-"), 24),
        recortar(cargo, 16),
        recortar(registro.regimen_nombre.as_deref().unwrap_or("-"), 16),
        recortar(registro.condicion_nombre.as_deref().unwrap_or("-"), 20),
        if registro.documento_resolucion.is_some() {
            "Sí".to_string()
        } else {
            "No".to_string()
        },
    ];
    for (columna, celda) in celdas.iter().enumerate() {
        escritor.texto(
            COLUMNAS[columna] + 2.0,
            escritor.y - 8.0,
            FUENTE_NORMAL,
            8.0,
            NEGRO,
            celda,
        );
    }
    escritor.y -= 14.0;
}

/// Numeración "Página i de n" y sello institucional al pie.
fn con_pie_de_pagina(mut paginas: Vec<Vec<Operation>>) -> Vec<Vec<Operation>> {
    let total = paginas.len();
    for (indice, pagina) in paginas.iter_mut().enumerate() {
        let mut pie = Escritor::new();
        pie.texto_centrado(
            26.0,
            FUENTE_NORMAL,
            8.0,
            GRIS_TEXTO,
            "Sistema de Gestión de Legajos del Personal - SIGELP",
        );
        pie.texto_centrado(
            16.0,
            FUENTE_NORMAL,
            8.0,
            GRIS_TEXTO,
            &format!("Página {} de {}", indice + 1, total),
        );
        pagina.extend(pie.actual);
    }
    paginas
}

/// Arma un `Document` de una o más páginas A4 a partir de sus
/// operaciones de contenido.
pub(crate) fn documento_desde_paginas(
    paginas: Vec<Vec<Operation>>,
) -> Result<Document, MergeError> {
    let mut documento = Document::with_version("1.5");
    let paginas_id = documento.new_object_id();

    let normal = documento.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let negrita = documento.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let recursos = documento.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(normal),
            "F2" => Object::Reference(negrita),
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let cantidad = paginas.len();
    for operaciones in paginas {
        let contenido = Content {
            operations: operaciones,
        };
        let bytes = contenido
            .encode()
            .map_err(|e| MergeError::Serializacion(e.to_string()))?;
        let contenido_id = documento.add_object(Stream::new(dictionary! {}, bytes));
        let pagina_id = documento.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(paginas_id),
            "MediaBox" => vec![0f32.into(), 0f32.into(), ANCHO.into(), ALTO.into()],
            "Contents" => Object::Reference(contenido_id),
            "Resources" => Object::Reference(recursos),
        });
        kids.push(Object::Reference(pagina_id));
    }

    documento.objects.insert(
        paginas_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => cantidad as i64,
        }),
    );
    let catalogo_id = documento.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(paginas_id),
    });
    documento.trailer.set("Root", catalogo_id);
    Ok(documento)
}

/// PDF mínimo para pruebas: una página por marca, con la marca como
/// único texto.
#[cfg(test)]
pub(crate) fn pdf_de_prueba(marcas: &[&str]) -> Document {
    let paginas = marcas
        .iter()
        .map(|marca| {
            let mut escritor = Escritor::new();
            escritor.texto(MARGEN, ALTO / 2.0, FUENTE_NORMAL, 12.0, NEGRO, marca);
            escritor.actual
        })
        .collect();
    documento_desde_paginas(paginas).expect("pdf de prueba")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona() -> Personal {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "dni": "45671234",
            "nombres": "María",
            "apellido_paterno": "Ñahui",
            "apellido_materno": "Córdova",
            "area_nombre": "Subgerencia de Recursos Humanos",
            "cargo_actual": "Asistente administrativa",
            "regimen_nombre": "D.L. 276",
            "condicion_nombre": "Nombrada"
        }))
        .unwrap()
    }

    fn registro(fin: Option<&str>, con_resolucion: bool) -> Escalafon {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "personal": 1,
            "area_nombre": "Rentas",
            "cargo": "Auxiliar",
            "regimen_nombre": "CAS",
            "condicion_nombre": "Contratada",
            "fecha_inicio": "2019-04-01",
            "fecha_fin": fin,
            "documento_resolucion": if con_resolucion { Some("/media/resoluciones/r1.pdf") } else { None }
        }))
        .unwrap()
    }

    #[test]
    fn caratula_con_historial_rinde_una_pagina() {
        let doc = caratula_escalafon(&persona(), &[registro(Some("2021-12-31"), true)]).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn caratula_sin_historial_tambien_rinde() {
        let doc = caratula_escalafon(&persona(), &[]).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let (_, pagina) = doc.get_pages().into_iter().next().unwrap();
        let contenido = doc.get_page_content(pagina).unwrap();
        let texto = String::from_utf8_lossy(&contenido).to_string();
        assert!(texto.contains("No hay registros"));
    }

    #[test]
    fn historial_largo_pagina_en_varias() {
        let registros: Vec<Escalafon> = (0..120).map(|_| registro(None, false)).collect();
        let doc = caratula_escalafon(&persona(), &registros).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn el_encabezado_de_tabla_se_repite_en_cada_pagina() {
        let registros: Vec<Escalafon> = (0..120).map(|_| registro(None, false)).collect();
        let doc = caratula_escalafon(&persona(), &registros).unwrap();
        let paginas = doc.get_pages();
        assert!(paginas.len() > 1);
        for (_, id) in paginas {
            let texto = String::from_utf8_lossy(&doc.get_page_content(id).unwrap()).to_string();
            assert!(texto.contains("Fecha Inicio"));
        }
    }

    #[test]
    fn codificacion_degrada_fuera_de_latin1() {
        assert_eq!(codificar("año"), vec![b'a', 0xF1, b'o']);
        assert_eq!(codificar("→"), vec![b'?']);
    }
}
