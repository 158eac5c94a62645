//! Sale submission coordinator
//!
//! The single write path of the terminal. Owns the two-step saga against the
//! backend and the state the UI hangs its "Procesando..." spinner on.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Inactivo ──confirmar()──► Procesando ──POST ok──► Completado          │
//! │      ▲                          │                        │              │
//! │      │                          └──POST falla──► Fallido │              │
//! │      └──────────── next confirmar() ◄────────────────────┘              │
//! │                                                                         │
//! │   confirmar() while Procesando → Err(EnProceso), nothing sent           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The POST is the point of no return: once the backend persists the sale,
//! every later failure (detail fetch, catalog refresh) degrades the result
//! instead of failing it. The cart is cleared exactly when the sale
//! persisted, and only then.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use gama_core::checkout::Cobro;
use gama_core::receipt::Recibo;
use gama_core::types::{NuevaVenta, Producto, VentaDetalle};

use crate::error::{ApiResult, CobroError};
use crate::http::ApiCliente;
use crate::session::Sesion;

// =============================================================================
// API Seam
// =============================================================================

/// The slice of the backend the coordinator needs. [`ApiCliente`] is the
/// production implementation; tests plug in an in-memory double.
#[async_trait]
pub trait SalesApi: Send + Sync {
    async fn productos(&self) -> ApiResult<Vec<Producto>>;
    async fn crear_venta(&self, venta: &NuevaVenta) -> ApiResult<i64>;
    async fn venta_detalle(&self, venta_id: i64) -> ApiResult<VentaDetalle>;
}

#[async_trait]
impl SalesApi for ApiCliente {
    async fn productos(&self) -> ApiResult<Vec<Producto>> {
        ApiCliente::productos(self).await
    }

    async fn crear_venta(&self, venta: &NuevaVenta) -> ApiResult<i64> {
        ApiCliente::crear_venta(self, venta).await
    }

    async fn venta_detalle(&self, venta_id: i64) -> ApiResult<VentaDetalle> {
        ApiCliente::venta_detalle(self, venta_id).await
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Where the coordinator currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstadoVenta {
    #[default]
    Inactivo,
    Procesando,
    Completado,
    Fallido,
}

/// What a persisted sale hands back to the UI.
#[derive(Debug, Clone)]
pub struct VentaConfirmada {
    pub recibo: Recibo,
    /// Refreshed catalog (stock changed server-side). `None` when the
    /// refresh failed; the UI keeps showing the stale catalog.
    pub catalogo: Option<Vec<Producto>>,
}

/// Drives a [`Cobro`] through submission.
pub struct VentaCoordinador<A: SalesApi> {
    api: A,
    sesion: Sesion,
    estado: EstadoVenta,
}

impl<A: SalesApi> VentaCoordinador<A> {
    /// The session is given at construction; the coordinator never reads
    /// seller identity ambiently.
    pub fn new(api: A, sesion: Sesion) -> Self {
        Self {
            api,
            sesion,
            estado: EstadoVenta::Inactivo,
        }
    }

    pub fn estado(&self) -> EstadoVenta {
        self.estado
    }

    /// Submits the cobro. On success the cobro is reset to idle; on any
    /// failure it is left untouched so the cashier can correct and retry.
    pub async fn confirmar(
        &mut self,
        cobro: &mut Cobro,
        cliente_id: Option<i64>,
    ) -> Result<VentaConfirmada, CobroError> {
        if self.estado == EstadoVenta::Procesando {
            return Err(CobroError::EnProceso);
        }

        // Local gate: nothing below runs for an invalid cobro
        cobro.validar()?;

        self.estado = EstadoVenta::Procesando;
        let resultado = self.enviar(cobro, cliente_id).await;
        self.estado = if resultado.is_ok() {
            EstadoVenta::Completado
        } else {
            EstadoVenta::Fallido
        };
        resultado
    }

    async fn enviar(
        &self,
        cobro: &mut Cobro,
        cliente_id: Option<i64>,
    ) -> Result<VentaConfirmada, CobroError> {
        let payload = cobro.payload(cliente_id);

        // Step 1: persist. A failure here leaves the cart intact.
        let venta_id = self.api.crear_venta(&payload).await?;
        info!(venta_id, total = %cobro.total(), "venta registrada");

        // Step 2: authoritative record, degrading to the local snapshot.
        // The sale already persisted; from here on nothing fails.
        let fecha = Utc::now();
        let recibo = match self.api.venta_detalle(venta_id).await {
            Ok(detalle) => {
                Recibo::desde_detalle(venta_id, &detalle, cobro, &self.sesion.nombre, fecha)
            }
            Err(err) => {
                warn!(venta_id, %err, "sin detalle de venta, usando el ticket local");
                Recibo::desde_ticket(venta_id, cobro, &self.sesion.nombre, fecha)
            }
        };

        cobro.limpiar();

        // Step 3: best-effort catalog refresh (stock moved server-side).
        let catalogo = match self.api.productos().await {
            Ok(productos) => Some(productos),
            Err(err) => {
                warn!(%err, "no se pudo refrescar el catálogo");
                None
            }
        };

        Ok(VentaConfirmada { recibo, catalogo })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use gama_core::money::Money;
    use gama_core::types::{FormaPago, PartidaDetalle};
    use gama_core::DESCUENTO_10_BPS;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory backend double that counts calls and can be told to fail
    /// at each step.
    #[derive(Default)]
    struct ApiFalsa {
        posts: AtomicUsize,
        fallar_post: bool,
        fallar_detalle: bool,
        fallar_catalogo: bool,
        ultimo_payload: Mutex<Option<NuevaVenta>>,
    }

    fn rechazo(mensaje: &str) -> ApiError {
        ApiError::Rechazada {
            mensaje: mensaje.to_string(),
        }
    }

    #[async_trait]
    impl SalesApi for ApiFalsa {
        async fn productos(&self) -> ApiResult<Vec<Producto>> {
            if self.fallar_catalogo {
                return Err(rechazo("catalogo caido"));
            }
            Ok(vec![producto(1, 65.0)])
        }

        async fn crear_venta(&self, venta: &NuevaVenta) -> ApiResult<i64> {
            self.posts.fetch_add(1, Ordering::SeqCst);
            if self.fallar_post {
                return Err(rechazo("Caja cerrada"));
            }
            *self.ultimo_payload.lock().unwrap() = Some(venta.clone());
            Ok(42)
        }

        async fn venta_detalle(&self, _venta_id: i64) -> ApiResult<VentaDetalle> {
            if self.fallar_detalle {
                return Err(rechazo("detalle caido"));
            }
            Ok(VentaDetalle {
                productos: vec![PartidaDetalle {
                    descripcion: "Producto 1".to_string(),
                    cantidad: 2,
                    precio_unitario: 65.0,
                }],
            })
        }
    }

    fn producto(id: i64, precio: f64) -> Producto {
        Producto {
            id,
            codigo: format!("P-{id}"),
            codigo_barras: None,
            descripcion: format!("Producto {id}"),
            precio_venta: precio,
            precio_costo: 0.0,
            cantidad_stock: 100,
        }
    }

    fn sesion() -> Sesion {
        Sesion {
            usuario_id: Some(5),
            nombre: "Laura".to_string(),
            expira: i64::MAX,
        }
    }

    /// $130 ticket, 10% preset, $150 tendered.
    fn cobro_escenario() -> Cobro {
        let mut cobro = Cobro::new();
        let p = producto(1, 65.0);
        cobro.ticket.agregar(&p);
        cobro.ticket.agregar(&p);
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        cobro.recibido = Money::from_cents(150_00);
        cobro
    }

    #[tokio::test]
    async fn test_venta_completa_de_punta_a_punta() {
        let mut coordinador = VentaCoordinador::new(ApiFalsa::default(), sesion());
        let mut cobro = cobro_escenario();
        assert_eq!(cobro.total().cents(), 117_00);
        assert_eq!(cobro.cambio().cents(), 33_00);

        let confirmada = coordinador.confirmar(&mut cobro, None).await.unwrap();

        // Exact wire payload
        let enviado = coordinador.api.ultimo_payload.lock().unwrap().clone().unwrap();
        let json = serde_json::to_value(enviado).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "forma_pago": "Efectivo",
                "productos": [{"id": 1, "cantidad": 2}],
                "monto_recibido": 150.0,
                "descuento_total": 13.0,
                "cliente_id": null
            })
        );

        // Receipt carries the frozen amounts and the seller name
        assert_eq!(confirmada.recibo.venta_id, "42");
        assert_eq!(confirmada.recibo.vendedor, "Laura");
        assert_eq!(confirmada.recibo.total.cents(), 117_00);
        assert_eq!(confirmada.recibo.cambio.cents(), 33_00);
        assert!(confirmada.catalogo.is_some());

        // Success side effects
        assert!(cobro.ticket.esta_vacio());
        assert_eq!(cobro.forma_pago, FormaPago::Efectivo);
        assert_eq!(coordinador.estado(), EstadoVenta::Completado);
    }

    #[tokio::test]
    async fn test_validacion_bloquea_antes_de_la_red() {
        let api = ApiFalsa::default();
        let mut coordinador = VentaCoordinador::new(api, sesion());

        // Insufficient cash
        let mut cobro = cobro_escenario();
        cobro.recibido = Money::from_cents(100_00);
        let err = coordinador.confirmar(&mut cobro, None).await.unwrap_err();
        assert!(matches!(err, CobroError::Validacion(_)));

        // Empty ticket
        let mut vacio = Cobro::new();
        let err = coordinador.confirmar(&mut vacio, None).await.unwrap_err();
        assert!(matches!(err, CobroError::Validacion(_)));

        // Not a single POST went out
        assert_eq!(coordinador.api.posts.load(Ordering::SeqCst), 0);
        // And the cart survived
        assert_eq!(cobro.ticket.num_lineas(), 1);
    }

    #[tokio::test]
    async fn test_fallo_del_post_conserva_el_ticket() {
        let api = ApiFalsa {
            fallar_post: true,
            ..ApiFalsa::default()
        };
        let mut coordinador = VentaCoordinador::new(api, sesion());
        let mut cobro = cobro_escenario();

        let err = coordinador.confirmar(&mut cobro, None).await.unwrap_err();
        // Server message verbatim
        assert_eq!(err.to_string(), "Caja cerrada");
        assert!(!cobro.ticket.esta_vacio());
        assert_eq!(coordinador.estado(), EstadoVenta::Fallido);

        // No automatic retry happened
        assert_eq!(coordinador.api.posts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_detalle_caido_degrada_al_ticket_local() {
        let api = ApiFalsa {
            fallar_detalle: true,
            ..ApiFalsa::default()
        };
        let mut coordinador = VentaCoordinador::new(api, sesion());
        let mut cobro = cobro_escenario();

        let confirmada = coordinador.confirmar(&mut cobro, None).await.unwrap();

        // Receipt built from the local snapshot; the sale still counts
        assert_eq!(confirmada.recibo.partidas.len(), 1);
        assert_eq!(confirmada.recibo.partidas[0].cantidad, 2);
        assert_eq!(confirmada.recibo.partidas[0].precio_unitario.cents(), 65_00);
        assert!(cobro.ticket.esta_vacio());
        assert_eq!(coordinador.estado(), EstadoVenta::Completado);
    }

    #[tokio::test]
    async fn test_catalogo_caido_no_degrada_la_venta() {
        let api = ApiFalsa {
            fallar_catalogo: true,
            ..ApiFalsa::default()
        };
        let mut coordinador = VentaCoordinador::new(api, sesion());
        let mut cobro = cobro_escenario();

        let confirmada = coordinador.confirmar(&mut cobro, None).await.unwrap();
        assert!(confirmada.catalogo.is_none());
        assert!(cobro.ticket.esta_vacio());
        assert_eq!(coordinador.estado(), EstadoVenta::Completado);
    }

    #[tokio::test]
    async fn test_no_efectivo_envia_el_total_como_recibido() {
        let api = ApiFalsa::default();
        let mut coordinador = VentaCoordinador::new(api, sesion());
        let mut cobro = cobro_escenario();
        cobro.forma_pago = FormaPago::Transferencia;
        cobro.recibido = Money::zero();

        coordinador.confirmar(&mut cobro, None).await.unwrap();

        let payload = coordinador.api.ultimo_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.monto_recibido, 117.0);
        assert_eq!(payload.forma_pago, FormaPago::Transferencia);
    }
}
