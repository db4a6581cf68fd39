//! Paginación estilo DRF: sobre `{ results, next }` o arreglo plano.
//!
//! `fetch_all` es todo-o-nada: el primer error de página se propaga sin
//! devolver resultados parciales, porque respalda pantallas de listado
//! donde una vista incompleta silenciosa sería engañosa.

use super::{ApiClient, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Respuesta de un listado: el backend pagina casi todo, pero algunas
/// rutas (p. ej. el legajo de una persona) devuelven el arreglo directo.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Listado<T> {
    Paginado {
        results: Vec<T>,
        next: Option<String>,
    },
    Plano(Vec<T>),
}

/// Costura del recorrido de páginas: quién entrega el listado de una
/// URL y cómo se resuelve un `next` relativo. `ApiClient` es la
/// implementación real; las pruebas usan un guion en memoria.
#[async_trait]
trait FuenteDePaginas {
    async fn pagina<T: DeserializeOwned + Send>(&self, url: Url) -> ApiResult<Listado<T>>;

    fn resolver_siguiente(&self, referencia: &str) -> ApiResult<Url>;
}

#[async_trait]
impl FuenteDePaginas for ApiClient {
    async fn pagina<T: DeserializeOwned + Send>(&self, url: Url) -> ApiResult<Listado<T>> {
        self.get_json_url(url).await
    }

    fn resolver_siguiente(&self, referencia: &str) -> ApiResult<Url> {
        self.resolver(referencia)
    }
}

/// Sigue la cadena de `next` hasta agotarla y concatena todos los
/// `results` en una sola lista en memoria.
async fn recolectar<T, F>(fuente: &F, inicial: Url) -> ApiResult<Vec<T>>
where
    T: DeserializeOwned + Send,
    F: FuenteDePaginas,
{
    let mut acumulado = Vec::new();
    let mut siguiente = Some(inicial);
    let mut paginas = 0usize;

    while let Some(url) = siguiente {
        let pagina: Listado<T> = fuente.pagina(url).await?;
        paginas += 1;
        match pagina {
            Listado::Paginado { results, next } => {
                acumulado.extend(results);
                siguiente = match next {
                    Some(referencia) => Some(fuente.resolver_siguiente(&referencia)?),
                    None => None,
                };
            }
            Listado::Plano(items) => {
                acumulado.extend(items);
                siguiente = None;
            }
        }
    }

    debug!(paginas, total = acumulado.len(), "listado completo");
    Ok(acumulado)
}

impl ApiClient {
    /// Trae la colección completa de una ruta, siguiendo la paginación
    /// hasta el final.
    pub async fn fetch_all<T: DeserializeOwned + Send>(&self, ruta: &str) -> ApiResult<Vec<T>> {
        let mut inicial = self.url(ruta)?;
        inicial
            .query_pairs_mut()
            .append_pair("page_size", &self.page_size().to_string());
        recolectar(self, inicial).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: i64,
    }

    /// Páginas pregrabadas por URL absoluta.
    struct FuenteGuionada {
        base: Url,
        paginas: HashMap<String, serde_json::Value>,
    }

    impl FuenteGuionada {
        fn new() -> Self {
            Self {
                base: Url::parse("http://backend/api/").unwrap(),
                paginas: HashMap::new(),
            }
        }

        fn con_pagina(mut self, url: &str, cuerpo: serde_json::Value) -> Self {
            self.paginas.insert(url.to_string(), cuerpo);
            self
        }
    }

    #[async_trait]
    impl FuenteDePaginas for FuenteGuionada {
        async fn pagina<T: DeserializeOwned + Send>(&self, url: Url) -> ApiResult<Listado<T>> {
            match self.paginas.get(url.as_str()) {
                Some(cuerpo) => Ok(serde_json::from_value(cuerpo.clone()).unwrap()),
                None => Err(ApiError::Status {
                    status: 404,
                    cuerpo: format!("sin página para {url}"),
                }),
            }
        }

        fn resolver_siguiente(&self, referencia: &str) -> ApiResult<Url> {
            match Url::parse(referencia) {
                Ok(url) => Ok(url),
                Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.base.join(referencia)?),
                Err(e) => Err(e.into()),
            }
        }
    }

    #[test]
    fn sobre_paginado() {
        let listado: Listado<Item> = serde_json::from_str(
            r#"{"results": [{"id": 1}, {"id": 2}], "next": "http://x/api/areas/?page=2"}"#,
        )
        .unwrap();
        match listado {
            Listado::Paginado { results, next } => {
                assert_eq!(results.len(), 2);
                assert!(next.is_some());
            }
            Listado::Plano(_) => panic!("debió reconocer el sobre paginado"),
        }
    }

    #[test]
    fn sobre_paginado_sin_next() {
        let listado: Listado<Item> =
            serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        match listado {
            Listado::Paginado { results, next } => {
                assert!(results.is_empty());
                assert!(next.is_none());
            }
            Listado::Plano(_) => panic!("debió reconocer el sobre paginado"),
        }
    }

    #[test]
    fn arreglo_plano() {
        let listado: Listado<Item> =
            serde_json::from_str(r#"[{"id": 5}]"#).unwrap();
        match listado {
            Listado::Plano(items) => assert_eq!(items, vec![Item { id: 5 }]),
            Listado::Paginado { .. } => panic!("debió reconocer el arreglo plano"),
        }
    }

    #[tokio::test]
    async fn recorre_la_cadena_de_next_y_concatena() {
        // El `next` de la primera página viene relativo, como lo emite
        // el backend detrás de un proxy.
        let fuente = FuenteGuionada::new()
            .con_pagina(
                "http://backend/api/items/",
                json!({"results": [{"id": 1}, {"id": 2}], "next": "/api/items/?page=2"}),
            )
            .con_pagina(
                "http://backend/api/items/?page=2",
                json!({"results": [{"id": 3}], "next": null}),
            );

        let inicial = Url::parse("http://backend/api/items/").unwrap();
        let items: Vec<Item> = recolectar(&fuente, inicial).await.unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }, Item { id: 3 }]);
    }

    #[tokio::test]
    async fn arreglo_plano_termina_el_recorrido() {
        let fuente = FuenteGuionada::new()
            .con_pagina("http://backend/api/legajo/", json!([{"id": 7}]));

        let inicial = Url::parse("http://backend/api/legajo/").unwrap();
        let items: Vec<Item> = recolectar(&fuente, inicial).await.unwrap();
        assert_eq!(items, vec![Item { id: 7 }]);
    }

    #[tokio::test]
    async fn el_error_de_una_pagina_intermedia_se_propaga() {
        // La segunda página no existe: todo-o-nada, sin parciales.
        let fuente = FuenteGuionada::new().con_pagina(
            "http://backend/api/items/",
            json!({"results": [{"id": 1}], "next": "/api/items/?page=2"}),
        );

        let inicial = Url::parse("http://backend/api/items/").unwrap();
        let resultado: ApiResult<Vec<Item>> = recolectar(&fuente, inicial).await;
        assert!(matches!(
            resultado,
            Err(ApiError::Status { status: 404, .. })
        ));
    }
}
