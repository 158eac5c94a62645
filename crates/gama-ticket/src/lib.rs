//! # gama-ticket: Printed Ticket for Gama POS
//!
//! Lays a [`gama_core::Recibo`] out on 58 mm thermal paper (32 columns) and
//! ships the resulting ESC/POS bytes to a file or a network printer.
//!
//! The layout itself is pure: [`render::renderizar`] and its helpers never
//! touch I/O, so every line of the ticket is testable. Side effects live in
//! [`salida`] and nowhere else.

pub mod config;
pub mod encoding;
pub mod error;
pub mod escpos;
pub mod render;
pub mod salida;

pub use config::Tienda;
pub use error::{TicketError, TicketResult};
pub use escpos::TicketBuilder;
pub use render::renderizar;
pub use salida::{nombre_ticket, ImpresoraRed};

/// Column width of 58 mm paper at the standard font.
pub const ANCHO_58MM: usize = 32;
