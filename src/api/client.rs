//! Envoltorio de `reqwest` con autenticación bearer y rutas relativas.

use super::{ApiError, ApiResult};
use crate::config::Config;
use bytes::Bytes;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
    page_size: u32,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let base = Url::parse(config.base_url.trim_end_matches('/'))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base,
            token: config.token.clone(),
            page_size: config.page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Construye la URL absoluta de una ruta de la API (`/areas/`,
    /// `/escalafones/?personal=3`, ...).
    pub fn url(&self, ruta: &str) -> ApiResult<Url> {
        let completa = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            ruta.trim_start_matches('/')
        );
        Ok(Url::parse(&completa)?)
    }

    /// Resuelve una referencia que puede venir absoluta (`http://...`) o
    /// relativa al backend (`/media/legajos/x.pdf`), como pasa con los
    /// campos `archivo` y con el `next` de la paginación.
    pub fn resolver(&self, referencia: &str) -> ApiResult<Url> {
        match Url::parse(referencia) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.base.join(referencia)?),
            Err(e) => Err(e.into()),
        }
    }

    fn solicitud(&self, metodo: Method, url: Url) -> RequestBuilder {
        let req = self.http.request(metodo, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn enviar<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let respuesta = req.send().await?;
        let status = respuesta.status();
        if !status.is_success() {
            let cuerpo = respuesta.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                cuerpo,
            });
        }
        Ok(respuesta.json().await?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, ruta: &str) -> ApiResult<T> {
        let url = self.url(ruta)?;
        self.get_json_url(url).await
    }

    pub async fn get_json_url<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!(%url, "GET");
        self.enviar(self.solicitud(Method::GET, url)).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ruta: &str,
        carga: &B,
    ) -> ApiResult<T> {
        let url = self.url(ruta)?;
        debug!(%url, "POST");
        self.enviar(self.solicitud(Method::POST, url).json(carga))
            .await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ruta: &str,
        carga: &B,
    ) -> ApiResult<T> {
        let url = self.url(ruta)?;
        debug!(%url, "PUT");
        self.enviar(self.solicitud(Method::PUT, url).json(carga))
            .await
    }

    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ruta: &str,
        carga: &B,
    ) -> ApiResult<T> {
        let url = self.url(ruta)?;
        debug!(%url, "PATCH");
        self.enviar(self.solicitud(Method::PATCH, url).json(carga))
            .await
    }

    /// POST sin cuerpo ni respuesta útil (acciones tipo `toggle_active`).
    pub async fn post_accion(&self, ruta: &str) -> ApiResult<()> {
        let url = self.url(ruta)?;
        debug!(%url, "POST (acción)");
        let respuesta = self.solicitud(Method::POST, url).send().await?;
        Self::verificar_estado(respuesta).await
    }

    pub async fn delete(&self, ruta: &str) -> ApiResult<()> {
        let url = self.url(ruta)?;
        debug!(%url, "DELETE");
        let respuesta = self.solicitud(Method::DELETE, url).send().await?;
        Self::verificar_estado(respuesta).await
    }

    /// Descarga un recurso binario (un PDF de `media/`) referenciado por
    /// una URL absoluta o relativa.
    pub async fn fetch_binary(&self, referencia: &str) -> ApiResult<Bytes> {
        let url = self.resolver(referencia)?;
        debug!(%url, "GET binario");
        let respuesta = self.solicitud(Method::GET, url).send().await?;
        let status = respuesta.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                cuerpo: String::new(),
            });
        }
        Ok(respuesta.bytes().await?)
    }

    async fn verificar_estado(respuesta: reqwest::Response) -> ApiResult<()> {
        let status: StatusCode = respuesta.status();
        if !status.is_success() {
            let cuerpo = respuesta.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                cuerpo,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente() -> ApiClient {
        let config = Config {
            base_url: "http://localhost:8000/api".to_string(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn url_une_rutas_con_y_sin_barra() {
        let api = cliente();
        assert_eq!(
            api.url("/areas/").unwrap().as_str(),
            "http://localhost:8000/api/areas/"
        );
        assert_eq!(
            api.url("areas/").unwrap().as_str(),
            "http://localhost:8000/api/areas/"
        );
    }

    #[test]
    fn resolver_respeta_urls_absolutas() {
        let api = cliente();
        assert_eq!(
            api.resolver("https://cdn.example.com/f.pdf").unwrap().as_str(),
            "https://cdn.example.com/f.pdf"
        );
        assert_eq!(
            api.resolver("/media/legajos/f.pdf").unwrap().as_str(),
            "http://localhost:8000/media/legajos/f.pdf"
        );
    }
}
