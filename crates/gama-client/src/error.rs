//! Client error types
//!
//! Two layers: [`ApiError`] is the transport/backend taxonomy, [`CobroError`]
//! is what the submission flow reports upward. The distinction matters for
//! the cart: a `Validacion` never left the terminal, an `Api` error left it
//! but did not persist; in both cases the cart survives for retry.

use gama_core::CoreError;
use thiserror::Error;

/// REST transport and backend errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 - the session token is missing, invalid or expired
    #[error("Sesión no autorizada")]
    NoAutorizado,

    /// 403 - the seller's role does not allow this operation
    #[error("Operación no permitida: {0}")]
    Prohibido(String),

    /// The backend rejected the request with its own message
    /// (insufficient stock, closed register, ...). Surfaced verbatim.
    #[error("{mensaje}")]
    Rechazada { mensaje: String },

    /// Transport failure: DNS, refused connection, timeout
    #[error("No se pudo conectar con el servidor")]
    Red(#[source] reqwest::Error),

    /// The response body was not the shape we expected
    #[error("Respuesta inválida del servidor")]
    Decodificacion(#[source] reqwest::Error),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from the sale submission flow.
#[derive(Debug, Error)]
pub enum CobroError {
    /// Local validation failed; no network call was made.
    #[error(transparent)]
    Validacion(#[from] CoreError),

    /// The backend or the network failed; the cart is preserved.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A submission is already in flight for this coordinator.
    #[error("Ya hay una venta en proceso")]
    EnProceso,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mensaje_del_servidor_se_muestra_tal_cual() {
        let err = ApiError::Rechazada {
            mensaje: "Stock insuficiente para MS-12K".to_string(),
        };
        assert_eq!(err.to_string(), "Stock insuficiente para MS-12K");
    }

    #[test]
    fn test_validacion_es_transparente() {
        let err: CobroError = CoreError::TicketVacio.into();
        assert_eq!(err.to_string(), "El ticket está vacío");
    }
}
