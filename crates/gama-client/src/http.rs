//! HTTP client for the Gama backend
//!
//! Three endpoints, one client. Error mapping is centralized in
//! [`ApiCliente::respuesta`]: 401/403 get their own variants, any other
//! non-success status surfaces the backend's `{"error": "..."}` message
//! verbatim when present.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use gama_core::types::{NuevaVenta, PartidaDetalle, Producto, VentaCreada, VentaDetalle};

use crate::config::ClienteConfig;
use crate::error::{ApiError, ApiResult};

/// REST client for the Gama backend.
#[derive(Debug, Clone)]
pub struct ApiCliente {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Error body the backend sends on rejection: `{"error": "mensaje"}`.
#[derive(Debug, Deserialize)]
struct CuerpoError {
    error: String,
}

/// `GET /ventas/:id` has returned the line items both wrapped and bare
/// across backend versions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RespuestaDetalle {
    Envuelto(VentaDetalle),
    Partidas(Vec<PartidaDetalle>),
}

impl ApiCliente {
    /// Create a client from configuration.
    pub fn new(config: &ClienteConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(ApiError::Red)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await.map_err(ApiError::Red)?;
        Self::respuesta(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await.map_err(ApiError::Red)?;
        Self::respuesta(response).await
    }

    /// Centralized status → error mapping.
    async fn respuesta<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let cuerpo = response.text().await.unwrap_or_default();
            let mensaje = serde_json::from_str::<CuerpoError>(&cuerpo)
                .map(|c| c.error)
                .unwrap_or(cuerpo);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ApiError::NoAutorizado),
                StatusCode::FORBIDDEN => Err(ApiError::Prohibido(mensaje)),
                _ => Err(ApiError::Rechazada { mensaje }),
            };
        }

        response.json().await.map_err(ApiError::Decodificacion)
    }

    // ========== Catalog ==========

    /// `GET /productos`: the full catalog.
    pub async fn productos(&self) -> ApiResult<Vec<Producto>> {
        debug!("solicitando catálogo");
        self.get("productos").await
    }

    // ========== Sales ==========

    /// `POST /ventas`: persist a sale. Returns the new sale id.
    pub async fn crear_venta(&self, venta: &NuevaVenta) -> ApiResult<i64> {
        debug!(
            forma_pago = %venta.forma_pago,
            lineas = venta.productos.len(),
            "enviando venta"
        );
        let creada: VentaCreada = self.post("ventas", venta).await?;
        creada.venta_id().ok_or(ApiError::Rechazada {
            mensaje: "El servidor no devolvió el folio de la venta".to_string(),
        })
    }

    /// `GET /ventas/:id`: the authoritative sale record.
    pub async fn venta_detalle(&self, venta_id: i64) -> ApiResult<VentaDetalle> {
        let detalle: RespuestaDetalle = self.get(&format!("ventas/{venta_id}")).await?;
        Ok(match detalle {
            RespuestaDetalle::Envuelto(d) => d,
            RespuestaDetalle::Partidas(productos) => VentaDetalle { productos },
        })
    }
}
