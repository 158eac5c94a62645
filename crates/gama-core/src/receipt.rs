//! # Receipt Module (Recibo)
//!
//! The pure view-model behind the printed ticket. No layout here: this is
//! *what* goes on the receipt; `gama-ticket` decides *where* each value
//! lands on 58 mm paper.
//!
//! ## Two Sources of Truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Preferred:  GET /ventas/:id ──► PartidaRecibo::desde_detalle           │
//! │              (prices as the backend persisted them)                     │
//! │                                                                         │
//! │  Fallback:   local ticket snapshot ──► PartidaRecibo::desde_linea       │
//! │              (used only when the detail fetch fails after a             │
//! │               confirmed POST; the customer still gets a receipt)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each row's extended price is computed independently from its own unit
//! price and quantity; the totals block carries the checkout amounts frozen
//! at submission time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineaTicket;
use crate::checkout::Cobro;
use crate::letras;
use crate::money::Money;
use crate::types::{FormaPago, PartidaDetalle, VentaDetalle};

// =============================================================================
// Line Item
// =============================================================================

/// One printed row: quantity, description, unit price at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartidaRecibo {
    pub descripcion: String,
    pub cantidad: i64,
    pub precio_unitario: Money,
}

impl PartidaRecibo {
    /// From the authoritative sale record.
    pub fn desde_detalle(detalle: &PartidaDetalle) -> Self {
        PartidaRecibo {
            descripcion: detalle.descripcion.clone(),
            cantidad: detalle.cantidad,
            precio_unitario: Money::from_pesos(detalle.precio_unitario),
        }
    }

    /// From the local ticket snapshot (fallback path).
    pub fn desde_linea(linea: &LineaTicket) -> Self {
        PartidaRecibo {
            descripcion: linea.descripcion.clone(),
            cantidad: linea.cantidad,
            precio_unitario: linea.precio_unitario,
        }
    }

    /// Extended price for this row, computed from this row alone.
    pub fn importe(&self) -> Money {
        self.precio_unitario.multiply_quantity(self.cantidad)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Everything the printed ticket needs, frozen at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recibo {
    pub venta_id: String,
    #[ts(as = "String")]
    pub fecha: DateTime<Utc>,
    pub vendedor: String,
    pub forma_pago: FormaPago,
    pub partidas: Vec<PartidaRecibo>,
    pub subtotal: Money,
    pub descuento: Money,
    pub total: Money,
    /// Cash tendered; equals `total` for non-cash methods.
    pub recibido: Money,
    pub cambio: Money,
}

impl Recibo {
    /// Builds a receipt from the checkout state plus a row source.
    ///
    /// Amounts come from the `Cobro` as it stood at submission; call this
    /// *before* `limpiar()`.
    fn del_cobro(
        venta_id: i64,
        cobro: &Cobro,
        vendedor: &str,
        fecha: DateTime<Utc>,
        partidas: Vec<PartidaRecibo>,
    ) -> Self {
        Recibo {
            venta_id: venta_id.to_string(),
            fecha,
            vendedor: vendedor.to_string(),
            forma_pago: cobro.forma_pago,
            partidas,
            subtotal: cobro.subtotal(),
            descuento: cobro.monto_descuento(),
            total: cobro.total(),
            recibido: cobro.monto_recibido_envio(),
            cambio: cobro.cambio(),
        }
    }

    /// Receipt from the authoritative record (the normal path).
    pub fn desde_detalle(
        venta_id: i64,
        detalle: &VentaDetalle,
        cobro: &Cobro,
        vendedor: &str,
        fecha: DateTime<Utc>,
    ) -> Self {
        let partidas = detalle
            .productos
            .iter()
            .map(PartidaRecibo::desde_detalle)
            .collect();
        Recibo::del_cobro(venta_id, cobro, vendedor, fecha, partidas)
    }

    /// Receipt from the local snapshot (detail fetch failed after a
    /// confirmed POST).
    pub fn desde_ticket(
        venta_id: i64,
        cobro: &Cobro,
        vendedor: &str,
        fecha: DateTime<Utc>,
    ) -> Self {
        let partidas = cobro
            .ticket
            .lineas()
            .iter()
            .map(PartidaRecibo::desde_linea)
            .collect();
        Recibo::del_cobro(venta_id, cobro, vendedor, fecha, partidas)
    }

    /// The legal line: the total spelled out in uppercase Spanish.
    pub fn total_en_letras(&self) -> String {
        letras::importe_con_letra(self.total)
    }

    /// True when the discount line should print.
    pub fn tiene_descuento(&self) -> bool {
        self.descuento.is_positive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Producto;
    use crate::DESCUENTO_10_BPS;

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

    fn cobro_de_prueba() -> Cobro {
        let mut cobro = Cobro::new();
        cobro.ticket.agregar(&producto(1, 65.0));
        cobro.ticket.agregar(&producto(1, 65.0));
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        cobro.recibido = Money::from_cents(150_00);
        cobro
    }

    #[test]
    fn test_desde_detalle_usa_precios_del_servidor() {
        let cobro = cobro_de_prueba();
        let detalle = VentaDetalle {
            productos: vec![PartidaDetalle {
                descripcion: "Producto 1".to_string(),
                cantidad: 2,
                precio_unitario: 64.5, // repriced server-side
            }],
        };
        let recibo = Recibo::desde_detalle(42, &detalle, &cobro, "Laura", Utc::now());

        assert_eq!(recibo.venta_id, "42");
        assert_eq!(recibo.partidas.len(), 1);
        assert_eq!(recibo.partidas[0].precio_unitario.cents(), 64_50);
        assert_eq!(recibo.partidas[0].importe().cents(), 129_00);
        // Totals block still reflects what was charged at the terminal
        assert_eq!(recibo.subtotal.cents(), 130_00);
        assert_eq!(recibo.total.cents(), 117_00);
        assert_eq!(recibo.cambio.cents(), 33_00);
    }

    #[test]
    fn test_desde_ticket_es_el_respaldo_local() {
        let cobro = cobro_de_prueba();
        let recibo = Recibo::desde_ticket(42, &cobro, "Laura", Utc::now());

        assert_eq!(recibo.partidas.len(), 1);
        assert_eq!(recibo.partidas[0].cantidad, 2);
        assert_eq!(recibo.partidas[0].precio_unitario.cents(), 65_00);
        assert_eq!(recibo.total.cents(), 117_00);
    }

    #[test]
    fn test_total_en_letras() {
        let cobro = cobro_de_prueba();
        let recibo = Recibo::desde_ticket(42, &cobro, "Laura", Utc::now());
        assert_eq!(
            recibo.total_en_letras(),
            "CIENTO DIECISIETE PESOS 00/100 M.N."
        );
    }

    #[test]
    fn test_tiene_descuento() {
        let mut cobro = Cobro::new();
        cobro.ticket.agregar(&producto(1, 100.0));
        cobro.recibido = Money::from_cents(100_00);
        let recibo = Recibo::desde_ticket(1, &cobro, "Laura", Utc::now());
        assert!(!recibo.tiene_descuento());

        let con = cobro_de_prueba();
        let recibo = Recibo::desde_ticket(2, &con, "Laura", Utc::now());
        assert!(recibo.tiene_descuento());
    }
}
