//! Combinación de varios PDF en un único documento con `lopdf`.
//!
//! Cada documento fuente se renumera a un rango de ids propio y sus
//! páginas se encadenan bajo un único árbol `Pages`, preservando el
//! orden de entrada de los documentos y el orden interno de sus
//! páginas. Los marcadores (`Outlines`) de las fuentes se descartan.

use lopdf::{Dictionary, Document, Object, ObjectId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("PDF ilegible: {0}")]
    Parse(#[from] lopdf::Error),
    #[error("Ningún documento aportó páginas")]
    SinPaginas,
    #[error("El resultado quedó sin catálogo raíz")]
    SinCatalogo,
    #[error("No se pudo serializar el PDF: {0}")]
    Serializacion(String),
}

/// Interpreta un cuerpo binario como PDF. Falla con contenido que no
/// es PDF (p. ej. una página de error HTML servida donde iba el archivo).
pub fn parse_pdf(bytes: &[u8]) -> Result<Document, MergeError> {
    Ok(Document::load_mem(bytes)?)
}

/// Serializa el documento final a bytes.
pub fn serializar(mut documento: Document) -> Result<Vec<u8>, MergeError> {
    let mut buffer = Vec::new();
    documento
        .save_to(&mut buffer)
        .map_err(|e| MergeError::Serializacion(e.to_string()))?;
    Ok(buffer)
}

fn tipo_de(objeto: &Object) -> Option<&[u8]> {
    objeto
        .as_dict()
        .ok()
        .and_then(|d| d.get(b"Type").ok())
        .and_then(|t| t.as_name().ok())
}

// Atributos que una página puede heredar de sus ancestros `Pages`.
const HEREDABLES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

fn es_heredable(clave: &[u8]) -> bool {
    HEREDABLES.iter().any(|k| *k == clave)
}

/// Resuelve los atributos heredables de una página subiendo por su
/// cadena de `Parent`; el ancestro más cercano gana.
fn atributos_heredados(doc: &Document, pagina_id: ObjectId) -> Dictionary {
    let mut heredados = Dictionary::new();
    let mut padre = doc
        .get_object(pagina_id)
        .and_then(|o| o.as_dict())
        .ok()
        .and_then(|d| d.get(b"Parent").ok())
        .and_then(|p| p.as_reference().ok());
    let mut saltos = 0;
    while let Some(padre_id) = padre {
        // Un árbol malformado con ciclos no debe colgar la mezcla.
        saltos += 1;
        if saltos > 64 {
            break;
        }
        let Ok(dict) = doc.get_object(padre_id).and_then(|o| o.as_dict()) else {
            break;
        };
        for clave in HEREDABLES {
            if !heredados.has(clave) {
                if let Ok(valor) = dict.get(clave) {
                    heredados.set(clave, valor.clone());
                }
            }
        }
        padre = dict.get(b"Parent").ok().and_then(|p| p.as_reference().ok());
    }
    heredados
}

/// Concatena los documentos en el orden dado.
pub fn combinar(documentos: Vec<Document>) -> Result<Document, MergeError> {
    let mut siguiente_id = 1;
    // Páginas en orden de aparición; el resto de objetos por id.
    let mut paginas: Vec<(ObjectId, Dictionary)> = Vec::new();
    let mut objetos: Vec<(ObjectId, Object)> = Vec::new();

    for mut doc in documentos {
        doc.renumber_objects_with(siguiente_id);
        siguiente_id = doc.max_id + 1;

        for (_, pagina_id) in doc.get_pages() {
            let Ok(dict) = doc.get_object(pagina_id).and_then(|o| o.as_dict()) else {
                continue;
            };
            let mut dict = dict.clone();
            // Al reencadenar bajo otro árbol la página pierde su
            // herencia original, así que los atributos heredables
            // bajan a la página antes de moverla.
            for (clave, valor) in atributos_heredados(&doc, pagina_id).iter() {
                if !dict.has(clave) {
                    dict.set(clave.clone(), valor.clone());
                }
            }
            paginas.push((pagina_id, dict));
        }
        objetos.extend(doc.objects.into_iter());
    }

    if paginas.is_empty() {
        return Err(MergeError::SinPaginas);
    }

    let mut combinado = Document::with_version("1.5");
    let mut catalogo: Option<(ObjectId, Dictionary)> = None;
    let mut arbol_paginas: Option<(ObjectId, Dictionary)> = None;

    for (id, objeto) in objetos {
        match tipo_de(&objeto) {
            Some(b"Catalog") => {
                if let Ok(dict) = objeto.as_dict() {
                    let id_final = catalogo.as_ref().map(|(i, _)| *i).unwrap_or(id);
                    catalogo = Some((id_final, dict.clone()));
                }
            }
            Some(b"Pages") => {
                if let Ok(dict) = objeto.as_dict() {
                    let (id_final, mut acumulado) = match arbol_paginas.take() {
                        Some((i, d)) => (i, d),
                        None => (id, Dictionary::new()),
                    };
                    // Los heredables ya bajaron a cada página; dejarlos
                    // en el árbol fusionado impondría los del último
                    // documento al resto.
                    for (clave, valor) in dict.iter() {
                        if es_heredable(clave) {
                            continue;
                        }
                        acumulado.set(clave.clone(), valor.clone());
                    }
                    arbol_paginas = Some((id_final, acumulado));
                }
            }
            // Las páginas se insertan después con el Parent corregido;
            // los marcadores de las fuentes no sobreviven a la mezcla.
            Some(b"Page") | Some(b"Outlines") | Some(b"Outline") => {}
            _ => {
                combinado.objects.insert(id, objeto);
            }
        }
    }

    let (paginas_id, mut paginas_dict) = arbol_paginas.ok_or(MergeError::SinCatalogo)?;
    let (catalogo_id, mut catalogo_dict) = catalogo.ok_or(MergeError::SinCatalogo)?;

    for (id, dict) in &paginas {
        let mut dict = dict.clone();
        dict.set("Parent", Object::Reference(paginas_id));
        combinado.objects.insert(*id, Object::Dictionary(dict));
    }

    paginas_dict.set("Count", paginas.len() as i64);
    paginas_dict.set(
        "Kids",
        paginas
            .iter()
            .map(|(id, _)| Object::Reference(*id))
            .collect::<Vec<_>>(),
    );
    combinado
        .objects
        .insert(paginas_id, Object::Dictionary(paginas_dict));

    catalogo_dict.set("Pages", Object::Reference(paginas_id));
    catalogo_dict.remove(b"Outlines");
    combinado
        .objects
        .insert(catalogo_id, Object::Dictionary(catalogo_dict));

    combinado.trailer.set("Root", catalogo_id);
    combinado.max_id = combinado.objects.len() as u32;
    combinado.renumber_objects();
    combinado.compress();
    Ok(combinado)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::cover::pdf_de_prueba;
    use lopdf::{dictionary, Stream};

    /// Documento de una página que hereda `Resources` y `MediaBox` de
    /// su nodo `Pages` en vez de definirlos ella misma.
    fn pdf_con_herencia(fuente_base: &str, ancho: f32) -> Document {
        let mut doc = Document::with_version("1.5");
        let paginas_id = doc.new_object_id();
        let fuente = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => fuente_base,
        });
        let recursos = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(fuente) },
        });
        let contenido = doc.add_object(Stream::new(
            dictionary! {},
            b"BT /F1 12 Tf ET".to_vec(),
        ));
        let pagina = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(paginas_id),
            "Contents" => Object::Reference(contenido),
        });
        doc.objects.insert(
            paginas_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(pagina)],
                "Count" => 1i64,
                "Resources" => Object::Reference(recursos),
                "MediaBox" => vec![0f32.into(), 0f32.into(), ancho.into(), 842f32.into()],
            }),
        );
        let catalogo = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(paginas_id),
        });
        doc.trailer.set("Root", catalogo);
        doc
    }

    fn dict_de(doc: &Document, objeto: &Object) -> Dictionary {
        match objeto {
            Object::Reference(id) => doc.get_object(*id).unwrap().as_dict().unwrap().clone(),
            Object::Dictionary(d) => d.clone(),
            otro => panic!("se esperaba un diccionario, no {otro:?}"),
        }
    }

    fn fuente_efectiva(doc: &Document, pagina_id: ObjectId) -> String {
        let pagina = doc.get_object(pagina_id).unwrap().as_dict().unwrap();
        let recursos = dict_de(doc, pagina.get(b"Resources").unwrap());
        let fuentes = dict_de(doc, recursos.get(b"Font").unwrap());
        let f1 = dict_de(doc, fuentes.get(b"F1").unwrap());
        String::from_utf8_lossy(f1.get(b"BaseFont").unwrap().as_name().unwrap()).to_string()
    }

    fn textos_de_paginas(doc: &Document) -> Vec<String> {
        doc.get_pages()
            .into_iter()
            .map(|(_, id)| {
                let contenido = doc.get_page_content(id).unwrap();
                String::from_utf8_lossy(&contenido).to_string()
            })
            .collect()
    }

    #[test]
    fn conserva_orden_de_documentos_y_paginas() {
        let a = pdf_de_prueba(&["A1", "A2"]);
        let b = pdf_de_prueba(&["B1"]);
        let c = pdf_de_prueba(&["C1", "C2", "C3"]);

        let combinado = combinar(vec![a, b, c]).unwrap();
        assert_eq!(combinado.get_pages().len(), 6);

        let textos = textos_de_paginas(&combinado);
        let marcas: Vec<&str> = ["A1", "A2", "B1", "C1", "C2", "C3"]
            .into_iter()
            .collect();
        for (texto, marca) in textos.iter().zip(marcas) {
            assert!(texto.contains(marca), "esperaba {marca} en {texto:?}");
        }
    }

    #[test]
    fn ida_y_vuelta_por_bytes() {
        let doc = pdf_de_prueba(&["X"]);
        let bytes = serializar(combinar(vec![doc]).unwrap()).unwrap();
        let releido = parse_pdf(&bytes).unwrap();
        assert_eq!(releido.get_pages().len(), 1);
    }

    #[test]
    fn bytes_que_no_son_pdf() {
        assert!(parse_pdf(b"<html>error 404</html>").is_err());
    }

    #[test]
    fn sin_documentos_no_hay_paginas() {
        assert!(matches!(combinar(Vec::new()), Err(MergeError::SinPaginas)));
    }

    #[test]
    fn la_herencia_de_atributos_sobrevive_a_la_mezcla() {
        let a = pdf_con_herencia("Helvetica", 595.0);
        let b = pdf_con_herencia("Courier", 300.0);

        let combinado = combinar(vec![a, b]).unwrap();
        let paginas: Vec<ObjectId> = combinado.get_pages().into_values().collect();
        assert_eq!(paginas.len(), 2);

        // Cada página conserva los recursos de su documento de origen,
        // no los del último árbol fusionado.
        assert_eq!(fuente_efectiva(&combinado, paginas[0]), "Helvetica");
        assert_eq!(fuente_efectiva(&combinado, paginas[1]), "Courier");
        for id in paginas {
            let pagina = combinado.get_object(id).unwrap().as_dict().unwrap();
            assert!(pagina.has(b"MediaBox"));
        }
    }
}
