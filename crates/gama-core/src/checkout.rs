//! # Checkout Module (Cobro)
//!
//! Discount and payment math over a [`Ticket`], plus the local validation
//! gate a sale must pass before anything touches the network.
//!
//! ## Money Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal  = Σ línea.importe()                                          │
//! │  total     = max(0, subtotal − descuento)                               │
//! │                                                                         │
//! │  Efectivo:   cambio   = max(0, recibido − total)                        │
//! │              faltante = max(0, total − recibido)    (never both > 0)    │
//! │  Non-cash:   cambio = faltante = $0.00  (tendered implicitly = total)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount as a Tagged Value
//!
//! The preset buttons (5% / 10%) toggle: pressing the active preset again
//! clears the discount. Because [`Descuento`] records *which* preset produced
//! the amount, the toggle compares tags, not pesos. A manual entry that
//! happens to equal 10% of the subtotal is still a manual entry and does not
//! toggle off.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Ticket;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{FormaPago, NuevaVenta};

// =============================================================================
// Discount
// =============================================================================

/// The active discount, tagged by its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Descuento {
    #[default]
    Ninguno,
    /// Amount typed in by the cashier.
    Manual(Money),
    /// Amount produced by a preset percentage button; `monto` is frozen at
    /// the subtotal the moment the button was pressed.
    Porcentaje { bps: u32, monto: Money },
}

impl Descuento {
    /// The amount to subtract from the subtotal.
    pub fn monto(&self) -> Money {
        match self {
            Descuento::Ninguno => Money::zero(),
            Descuento::Manual(m) => *m,
            Descuento::Porcentaje { monto, .. } => *monto,
        }
    }

    pub fn es_ninguno(&self) -> bool {
        matches!(self, Descuento::Ninguno)
    }
}

// =============================================================================
// Cobro
// =============================================================================

/// The checkout state: the ticket plus the transient payment fields.
///
/// [`Cobro::limpiar`] resets everything to the post-sale idle state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cobro {
    pub ticket: Ticket,
    descuento: Descuento,
    pub forma_pago: FormaPago,
    /// Cash tendered. Meaningless for non-cash methods.
    pub recibido: Money,
}

impl Cobro {
    pub fn new() -> Self {
        Cobro::default()
    }

    // -------------------------------------------------------------------------
    // Discount
    // -------------------------------------------------------------------------

    pub fn descuento(&self) -> Descuento {
        self.descuento
    }

    /// Amount currently being discounted.
    pub fn monto_descuento(&self) -> Money {
        self.descuento.monto()
    }

    /// Preset percentage button. Toggle semantics:
    /// - empty subtotal → no-op (nothing to discount)
    /// - same preset already active → clears to Ninguno
    /// - anything else active (none, manual, other preset) → overwrites
    pub fn alternar_porcentaje(&mut self, bps: u32) {
        let subtotal = self.ticket.subtotal();
        if !subtotal.is_positive() {
            return;
        }
        match self.descuento {
            Descuento::Porcentaje { bps: activo, .. } if activo == bps => {
                self.descuento = Descuento::Ninguno;
            }
            _ => {
                self.descuento = Descuento::Porcentaje {
                    bps,
                    monto: subtotal.percentage(bps),
                };
            }
        }
    }

    /// Manual discount entry. Zero or negative clears; the amount is *not*
    /// clamped to the subtotal (the total floors at zero instead).
    pub fn poner_descuento_manual(&mut self, monto: Money) {
        if monto.is_positive() {
            self.descuento = Descuento::Manual(monto);
        } else {
            self.descuento = Descuento::Ninguno;
        }
    }

    // -------------------------------------------------------------------------
    // Derived Amounts
    // -------------------------------------------------------------------------

    pub fn subtotal(&self) -> Money {
        self.ticket.subtotal()
    }

    /// `max(0, subtotal − descuento)`.
    pub fn total(&self) -> Money {
        self.ticket
            .subtotal()
            .saturating_sub_zero(self.descuento.monto())
    }

    /// Change due. Zero for non-cash methods.
    pub fn cambio(&self) -> Money {
        if self.forma_pago.es_efectivo() {
            self.recibido.saturating_sub_zero(self.total())
        } else {
            Money::zero()
        }
    }

    /// Amount still missing from the tendered cash. Zero for non-cash.
    pub fn faltante(&self) -> Money {
        if self.forma_pago.es_efectivo() {
            self.total().saturating_sub_zero(self.recibido)
        } else {
            Money::zero()
        }
    }

    /// The tendered amount that goes on the wire: what the cashier took for
    /// cash, the exact total for everything else.
    pub fn monto_recibido_envio(&self) -> Money {
        if self.forma_pago.es_efectivo() {
            self.recibido
        } else {
            self.total()
        }
    }

    // -------------------------------------------------------------------------
    // Validation & Payload
    // -------------------------------------------------------------------------

    /// The local gate before submission: a cobro that fails here never
    /// produces a network call.
    pub fn validar(&self) -> CoreResult<()> {
        if self.ticket.esta_vacio() {
            return Err(CoreError::TicketVacio);
        }
        if self.forma_pago.es_efectivo() && self.recibido < self.total() {
            return Err(CoreError::EfectivoInsuficiente {
                requerido: self.total(),
                recibido: self.recibido,
            });
        }
        Ok(())
    }

    /// Builds the `POST /ventas` payload. Call [`Cobro::validar`] first; this
    /// does not re-check.
    pub fn payload(&self, cliente_id: Option<i64>) -> NuevaVenta {
        NuevaVenta {
            forma_pago: self.forma_pago,
            productos: self.ticket.partidas_venta(),
            monto_recibido: self.monto_recibido_envio().as_pesos(),
            descuento_total: self.descuento.monto().as_pesos(),
            cliente_id,
        }
    }

    /// Resets to the idle state after a persisted sale: empty ticket, no
    /// discount, Efectivo, nothing tendered.
    pub fn limpiar(&mut self) {
        self.ticket.limpiar();
        self.descuento = Descuento::Ninguno;
        self.forma_pago = FormaPago::Efectivo;
        self.recibido = Money::zero();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Producto;
    use crate::{DESCUENTO_10_BPS, DESCUENTO_5_BPS};

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

    fn cobro_con(precio: f64) -> Cobro {
        let mut cobro = Cobro::new();
        cobro.ticket.agregar(&producto(1, precio));
        cobro
    }

    #[test]
    fn test_total_resta_descuento() {
        let mut cobro = cobro_con(130.0);
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        assert_eq!(cobro.monto_descuento().cents(), 13_00);
        assert_eq!(cobro.total().cents(), 117_00);
    }

    #[test]
    fn test_total_nunca_negativo() {
        let mut cobro = cobro_con(100.0);
        cobro.poner_descuento_manual(Money::from_cents(150_00));
        assert_eq!(cobro.total(), Money::zero());
    }

    #[test]
    fn test_alternar_mismo_preset_lo_apaga() {
        let mut cobro = cobro_con(130.0);
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        assert!(!cobro.descuento().es_ninguno());
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        assert!(cobro.descuento().es_ninguno());
        assert_eq!(cobro.total().cents(), 130_00);
    }

    #[test]
    fn test_alternar_otro_preset_sobrescribe() {
        let mut cobro = cobro_con(130.0);
        cobro.alternar_porcentaje(DESCUENTO_5_BPS);
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        assert_eq!(cobro.monto_descuento().cents(), 13_00);
        // And the swap did not toggle off
        assert!(!cobro.descuento().es_ninguno());
    }

    #[test]
    fn test_manual_igual_al_preset_no_alterna() {
        let mut cobro = cobro_con(130.0);
        // Manually typed $13.00 == 10% of $130.00, but it is tagged Manual
        cobro.poner_descuento_manual(Money::from_cents(13_00));
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        // Overwrites to the preset rather than clearing
        assert_eq!(
            cobro.descuento(),
            Descuento::Porcentaje {
                bps: DESCUENTO_10_BPS,
                monto: Money::from_cents(13_00)
            }
        );
    }

    #[test]
    fn test_alternar_sobre_ticket_vacio_es_noop() {
        let mut cobro = Cobro::new();
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        assert!(cobro.descuento().es_ninguno());
    }

    #[test]
    fn test_descuento_manual_no_positivo_limpia() {
        let mut cobro = cobro_con(100.0);
        cobro.poner_descuento_manual(Money::from_cents(10_00));
        cobro.poner_descuento_manual(Money::zero());
        assert!(cobro.descuento().es_ninguno());
        cobro.poner_descuento_manual(Money::from_cents(-5_00));
        assert!(cobro.descuento().es_ninguno());
    }

    #[test]
    fn test_cambio_y_faltante_excluyentes() {
        let mut cobro = cobro_con(117.0);
        cobro.recibido = Money::from_cents(150_00);
        assert_eq!(cobro.cambio().cents(), 33_00);
        assert_eq!(cobro.faltante(), Money::zero());

        cobro.recibido = Money::from_cents(100_00);
        assert_eq!(cobro.cambio(), Money::zero());
        assert_eq!(cobro.faltante().cents(), 17_00);

        cobro.recibido = Money::from_cents(117_00);
        assert_eq!(cobro.cambio(), Money::zero());
        assert_eq!(cobro.faltante(), Money::zero());
    }

    #[test]
    fn test_no_efectivo_sin_cambio_ni_faltante() {
        let mut cobro = cobro_con(117.0);
        cobro.forma_pago = FormaPago::Credito;
        cobro.recibido = Money::zero();
        assert_eq!(cobro.cambio(), Money::zero());
        assert_eq!(cobro.faltante(), Money::zero());
        // Wire amount defaults to the total
        assert_eq!(cobro.monto_recibido_envio().cents(), 117_00);
        assert!(cobro.validar().is_ok());
    }

    #[test]
    fn test_validar_ticket_vacio() {
        let cobro = Cobro::new();
        assert!(matches!(cobro.validar(), Err(CoreError::TicketVacio)));
    }

    #[test]
    fn test_validar_efectivo_insuficiente() {
        let mut cobro = cobro_con(117.0);
        cobro.recibido = Money::from_cents(100_00);
        assert!(matches!(
            cobro.validar(),
            Err(CoreError::EfectivoInsuficiente { .. })
        ));
        cobro.recibido = Money::from_cents(117_00);
        assert!(cobro.validar().is_ok());
    }

    #[test]
    fn test_limpiar_restablece_todo() {
        let mut cobro = cobro_con(130.0);
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        cobro.forma_pago = FormaPago::Debito;
        cobro.recibido = Money::from_cents(200_00);

        cobro.limpiar();
        assert!(cobro.ticket.esta_vacio());
        assert!(cobro.descuento().es_ninguno());
        assert_eq!(cobro.forma_pago, FormaPago::Efectivo);
        assert_eq!(cobro.recibido, Money::zero());
    }

    #[test]
    fn test_payload_completo() {
        let mut cobro = cobro_con(65.0);
        cobro.ticket.agregar(&producto(1, 65.0)); // merge → qty 2
        cobro.alternar_porcentaje(DESCUENTO_10_BPS);
        cobro.recibido = Money::from_cents(150_00);

        let payload = cobro.payload(None);
        let json = serde_json::to_value(&payload).unwrap();
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
    }
}
