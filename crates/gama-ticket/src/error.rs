//! Error types for ticket output

use thiserror::Error;

/// Ticket output error types
#[derive(Debug, Error)]
pub enum TicketError {
    /// IO error while writing the ticket file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network connection to the printer failed
    #[error("No se pudo conectar con la impresora: {0}")]
    Conexion(String),

    /// Timeout waiting for the printer
    #[error("La impresora no respondió: {0}")]
    Timeout(String),

    /// Invalid printer configuration
    #[error("Configuración inválida: {0}")]
    ConfigInvalida(String),
}

/// Result type for ticket operations
pub type TicketResult<T> = Result<T, TicketError>;
