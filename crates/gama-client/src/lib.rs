//! # gama-client: REST Boundary for Gama POS
//!
//! Everything that talks to the backend lives here: configuration, the HTTP
//! client, the session context decoded from the login token, and the sale
//! submission coordinator.
//!
//! ## The Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cobro (gama-core)                                                      │
//! │     │ validar()  ◄── fails here? nothing ever hits the network          │
//! │     ▼                                                                   │
//! │  VentaCoordinador::confirmar                                            │
//! │     │  POST /ventas ──────────► sale persisted (point of no return)     │
//! │     │  GET  /ventas/:id ──────► authoritative receipt rows              │
//! │     │       └─ on failure: local-snapshot receipt, sale still counts    │
//! │     │  GET  /productos ───────► catalog refresh (best effort)           │
//! │     ▼                                                                   │
//! │  VentaConfirmada { recibo, catálogo }                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod venta;

pub use config::ClienteConfig;
pub use error::{ApiError, ApiResult, CobroError};
pub use http::ApiCliente;
pub use session::{Sesion, SesionError};
pub use venta::{EstadoVenta, SalesApi, VentaConfirmada, VentaCoordinador};
