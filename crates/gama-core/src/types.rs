//! # Core Types
//!
//! Domain and wire types shared by every layer of Gama POS.
//!
//! ## Type Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Type Organization                               │
//! │                                                                         │
//! │  Catalog:   Producto                 (GET /productos)                  │
//! │  Payment:   FormaPago                                                   │
//! │  Outbound:  NuevaVenta, PartidaVenta (POST /ventas, NO prices!)        │
//! │  Inbound:   VentaCreada, VentaDetalle, PartidaDetalle                  │
//! │                                                                         │
//! │  All types derive Serialize/Deserialize + TS for frontend bindings    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire amounts are decimal pesos (`f64`) because that is what the backend
//! speaks; they cross into [`crate::money::Money`] at the first opportunity
//! and never come back out except in the payload builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// A product as served by `GET /productos`.
///
/// `cantidad_stock` is advisory on this terminal: overselling is allowed and
/// only produces an informational notice (stock truth lives server-side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Producto {
    pub id: i64,
    pub codigo: String,
    #[serde(default)]
    pub codigo_barras: Option<String>,
    pub descripcion: String,
    /// Sale price in decimal pesos, as the backend sends it.
    pub precio_venta: f64,
    /// Cost price in decimal pesos. Never printed, never sent back.
    #[serde(default)]
    pub precio_costo: f64,
    #[serde(default)]
    pub cantidad_stock: i64,
}

impl Producto {
    /// Sale price converted to exact centavos.
    pub fn precio(&self) -> Money {
        Money::from_pesos(self.precio_venta)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment methods the terminal accepts.
///
/// Serialized with the accented display names the backend stores
/// (`"Crédito"`, `"Débito"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FormaPago {
    #[default]
    Efectivo,
    #[serde(rename = "Crédito")]
    Credito,
    #[serde(rename = "Débito")]
    Debito,
    Transferencia,
}

impl FormaPago {
    /// True only for cash, the one method with tendered-amount math.
    pub fn es_efectivo(&self) -> bool {
        matches!(self, FormaPago::Efectivo)
    }
}

impl fmt::Display for FormaPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            FormaPago::Efectivo => "Efectivo",
            FormaPago::Credito => "Crédito",
            FormaPago::Debito => "Débito",
            FormaPago::Transferencia => "Transferencia",
        };
        write!(f, "{}", nombre)
    }
}

// =============================================================================
// Outbound: Sale Submission
// =============================================================================

/// One line of the sale payload: product id and quantity, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartidaVenta {
    pub id: i64,
    pub cantidad: i64,
}

/// The `POST /ventas` payload.
///
/// Unit prices are deliberately absent: the backend reprices every line from
/// its own catalog, so a stale or tampered client can never set a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NuevaVenta {
    pub forma_pago: FormaPago,
    pub productos: Vec<PartidaVenta>,
    /// Decimal pesos. For non-cash methods this equals the computed total.
    pub monto_recibido: f64,
    /// Decimal pesos.
    pub descuento_total: f64,
    pub cliente_id: Option<i64>,
}

// =============================================================================
// Inbound: Sale Records
// =============================================================================

/// Response to `POST /ventas`. The backend has keyed the new id both as
/// `id` and as `venta_id` across versions, so both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct VentaCreada {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub venta_id: Option<i64>,
}

impl VentaCreada {
    /// The sale id under whichever key the backend used.
    pub fn venta_id(&self) -> Option<i64> {
        self.id.or(self.venta_id)
    }
}

/// One authoritative line item from `GET /ventas/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartidaDetalle {
    pub descripcion: String,
    pub cantidad: i64,
    /// Price-at-sale in decimal pesos, as persisted by the backend.
    pub precio_unitario: f64,
}

/// The authoritative sale record fetched after a successful submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VentaDetalle {
    #[serde(default)]
    pub productos: Vec<PartidaDetalle>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producto_precio_en_centavos() {
        let p = Producto {
            id: 1,
            codigo: "MS-12K".to_string(),
            codigo_barras: None,
            descripcion: "Minisplit".to_string(),
            precio_venta: 6499.99,
            precio_costo: 4100.0,
            cantidad_stock: 3,
        };
        assert_eq!(p.precio().cents(), 649_999);
    }

    #[test]
    fn test_forma_pago_serializa_con_acentos() {
        assert_eq!(
            serde_json::to_string(&FormaPago::Credito).unwrap(),
            "\"Crédito\""
        );
        assert_eq!(
            serde_json::to_string(&FormaPago::Efectivo).unwrap(),
            "\"Efectivo\""
        );
        let fp: FormaPago = serde_json::from_str("\"Débito\"").unwrap();
        assert_eq!(fp, FormaPago::Debito);
    }

    #[test]
    fn test_forma_pago_default_es_efectivo() {
        assert_eq!(FormaPago::default(), FormaPago::Efectivo);
        assert!(FormaPago::Efectivo.es_efectivo());
        assert!(!FormaPago::Transferencia.es_efectivo());
    }

    #[test]
    fn test_venta_creada_acepta_ambas_claves() {
        let a: VentaCreada = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(a.venta_id(), Some(42));

        let b: VentaCreada = serde_json::from_str(r#"{"venta_id": 99}"#).unwrap();
        assert_eq!(b.venta_id(), Some(99));

        let c: VentaCreada = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(c.venta_id(), None);
    }

    #[test]
    fn test_nueva_venta_no_lleva_precios() {
        let venta = NuevaVenta {
            forma_pago: FormaPago::Efectivo,
            productos: vec![PartidaVenta { id: 7, cantidad: 2 }],
            monto_recibido: 150.0,
            descuento_total: 13.0,
            cliente_id: None,
        };
        let json = serde_json::to_string(&venta).unwrap();
        assert!(!json.contains("precio"));
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"cantidad\":2"));
    }
}
