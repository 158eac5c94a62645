//! # gama-core: Pure Business Logic for Gama POS
//!
//! This crate is the **heart** of the point-of-sale terminal. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Gama POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Terminal UI                               │   │
//! │  │    Search box ──► Ticket panel ──► Cobro panel ──► Recibo       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ gama-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │   │
//! │  │  │  money  │ │ letras  │ │  cart   │ │ checkout │ │ receipt │  │   │
//! │  │  │  Money  │ │ spell-  │ │ Ticket  │ │  Cobro   │ │ Recibo  │  │   │
//! │  │  │  fmt MX │ │  out    │ │ Línea   │ │Descuento │ │ Partida │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────────┐  ┌──────▼───────────┐                            │
//! │  │   gama-client    │  │   gama-ticket    │                            │
//! │  │   (REST API)     │  │   (ESC/POS)      │                            │
//! │  └──────────────────┘  └──────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire/domain types (Producto, NuevaVenta, VentaDetalle, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`letras`] - Spanish spell-out of monetary amounts for receipts
//! - [`search`] - Diacritic-insensitive catalog search
//! - [`cart`] - The in-progress ticket (cart aggregate)
//! - [`checkout`] - Discount and cash payment math
//! - [`receipt`] - Receipt view-model for the printed ticket
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, printer access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Server authority**: the backend owns prices and stock; this crate never
//!    sends a client-computed price over the wire

pub mod cart;
pub mod checkout;
pub mod error;
pub mod letras;
pub mod money;
pub mod receipt;
pub mod search;
pub mod types;
pub mod validation;

pub use cart::{AltaLinea, LineaTicket, Ticket};
pub use checkout::{Cobro, Descuento};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use receipt::{PartidaRecibo, Recibo};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quick-discount preset: 5%, in basis points.
///
/// The cobro panel exposes fixed percentage buttons; pressing one twice in a
/// row clears the discount again (see [`checkout::Cobro::alternar_porcentaje`]).
pub const DESCUENTO_5_BPS: u32 = 500;

/// Quick-discount preset: 10%, in basis points.
pub const DESCUENTO_10_BPS: u32 = 1000;
