//! # Cart Module (Ticket)
//!
//! The in-progress sale: an ordered list of lines, one per product.
//!
//! ## Price Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product (catalog)              LineaTicket (on the ticket)             │
//! │  ┌──────────────────┐           ┌──────────────────────────┐            │
//! │  │ id: 7            │──agregar──│ producto_id: 7           │            │
//! │  │ precio: $6499.99 │           │ precio_unitario: $6499.99│ ◄─snapshot │
//! │  │ stock: 3         │           │ cantidad: 1              │            │
//! │  └──────────────────┘           └──────────────────────────┘            │
//! │                                                                         │
//! │  A price change in the catalog does NOT reprice lines already on        │
//! │  the ticket. The displayed subtotal is what the customer pays           │
//! │  (subject to server-side repricing at submission).                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is advisory: adding past `cantidad_stock` succeeds and surfaces an
//! informational [`AltaLinea::SinStock`] notice for the cashier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PartidaVenta, Producto};

// =============================================================================
// Line Item
// =============================================================================

/// One line of the ticket. Invariant: `cantidad >= 1`; a line that would
/// drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineaTicket {
    pub producto_id: i64,
    pub codigo: String,
    pub descripcion: String,
    /// Price snapshot taken when the line was created.
    pub precio_unitario: Money,
    pub cantidad: i64,
}

impl LineaTicket {
    /// Extended price for this line.
    pub fn importe(&self) -> Money {
        self.precio_unitario.multiply_quantity(self.cantidad)
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// What happened when a product was added to the ticket.
///
/// `SinStock` reports the new on-ticket quantity alongside the catalog stock;
/// it is a notice for the cashier, never a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltaLinea {
    /// A new line was appended with quantity 1.
    Nueva,
    /// An existing line's quantity went up by one.
    Incrementada { cantidad: i64 },
    /// The add succeeded but the ticket now exceeds recorded stock.
    SinStock { cantidad: i64, stock: i64 },
}

// =============================================================================
// Ticket
// =============================================================================

/// The cart aggregate. Owns its lines; all mutation goes through methods so
/// the one-line-per-product and quantity-floor invariants hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ticket {
    lineas: Vec<LineaTicket>,
}

impl Ticket {
    pub fn new() -> Self {
        Ticket::default()
    }

    /// Adds a product: merges +1 onto an existing line or appends a new line
    /// with quantity 1. Insertion order of lines is preserved.
    pub fn agregar(&mut self, producto: &Producto) -> AltaLinea {
        if let Some(linea) = self
            .lineas
            .iter_mut()
            .find(|l| l.producto_id == producto.id)
        {
            linea.cantidad += 1;
            let cantidad = linea.cantidad;
            if cantidad > producto.cantidad_stock {
                AltaLinea::SinStock {
                    cantidad,
                    stock: producto.cantidad_stock,
                }
            } else {
                AltaLinea::Incrementada { cantidad }
            }
        } else {
            self.lineas.push(LineaTicket {
                producto_id: producto.id,
                codigo: producto.codigo.clone(),
                descripcion: producto.descripcion.clone(),
                precio_unitario: producto.precio(),
                cantidad: 1,
            });
            if producto.cantidad_stock < 1 {
                AltaLinea::SinStock {
                    cantidad: 1,
                    stock: producto.cantidad_stock,
                }
            } else {
                AltaLinea::Nueva
            }
        }
    }

    /// Sets a line's quantity outright. A non-positive quantity or an unknown
    /// product id is a silent no-op (the UI path for direct edits).
    pub fn poner_cantidad(&mut self, producto_id: i64, cantidad: i64) {
        if cantidad < 1 {
            return;
        }
        if let Some(linea) = self.lineas.iter_mut().find(|l| l.producto_id == producto_id) {
            linea.cantidad = cantidad;
        }
    }

    /// Nudges a line's quantity by `delta`, clamped so it never drops
    /// below 1. Removal is always explicit via [`Ticket::quitar`].
    pub fn ajustar_cantidad(&mut self, producto_id: i64, delta: i64) {
        if let Some(linea) = self.lineas.iter_mut().find(|l| l.producto_id == producto_id) {
            linea.cantidad = (linea.cantidad + delta).max(1);
        }
    }

    /// Removes a line unconditionally. Unknown ids are a no-op.
    pub fn quitar(&mut self, producto_id: i64) {
        self.lineas.retain(|l| l.producto_id != producto_id);
    }

    /// Drops every line.
    pub fn limpiar(&mut self) {
        self.lineas.clear();
    }

    /// Sum of extended prices. Always derived, never cached.
    pub fn subtotal(&self) -> Money {
        self.lineas.iter().map(|l| l.importe()).sum()
    }

    pub fn esta_vacio(&self) -> bool {
        self.lineas.is_empty()
    }

    /// Number of distinct lines.
    pub fn num_lineas(&self) -> usize {
        self.lineas.len()
    }

    /// Total units across all lines.
    pub fn total_articulos(&self) -> i64 {
        self.lineas.iter().map(|l| l.cantidad).sum()
    }

    pub fn lineas(&self) -> &[LineaTicket] {
        &self.lineas
    }

    /// The `{id, cantidad}` pairs for the sale payload. Prices stay home.
    pub fn partidas_venta(&self) -> Vec<PartidaVenta> {
        self.lineas
            .iter()
            .map(|l| PartidaVenta {
                id: l.producto_id,
                cantidad: l.cantidad,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
