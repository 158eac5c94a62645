//! # Error Types
//!
//! Domain-specific error types for gama-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gama-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gama-client errors (separate crate)                                   │
//! │  ├── ApiError         - REST transport / backend failures              │
//! │  └── CobroError       - Sale submission failures                       │
//! │                                                                         │
//! │  gama-ticket errors (separate crate)                                   │
//! │  └── TicketError      - Printer / file output failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CobroError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, ids)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use crate::money::Money;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent checkout rule violations. They are raised *before*
/// any network call: a cobro that fails here never leaves the terminal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The ticket has no lines; there is nothing to charge.
    #[error("El ticket está vacío")]
    TicketVacio,

    /// Cash tendered does not cover the total.
    ///
    /// ## User Workflow
    /// ```text
    /// Cobrar ($117.00, Efectivo, recibido $100.00)
    ///      │
    ///      ▼
    /// EfectivoInsuficiente { requerido: $117.00, recibido: $100.00 }
    ///      │
    ///      ▼
    /// UI shows: "Faltan $17.00"
    /// ```
    #[error("Efectivo insuficiente: se requieren {requerido}, se recibieron {recibido}")]
    EfectivoInsuficiente { requerido: Money, recibido: Money },

    /// A line operation referenced a product id not present on the ticket.
    #[error("El producto {0} no está en el ticket")]
    LineaNoEncontrada(i64),

    /// Validation error (wraps ValidationError).
    #[error("Error de validación: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed percentage).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::EfectivoInsuficiente {
            requerido: Money::from_cents(117_00),
            recibido: Money::from_cents(100_00),
        };
        assert_eq!(
            err.to_string(),
            "Efectivo insuficiente: se requieren $117.00, se recibieron $100.00"
        );

        assert_eq!(CoreError::TicketVacio.to_string(), "El ticket está vacío");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "descripcion".to_string(),
        };
        assert_eq!(err.to_string(), "descripcion is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "cantidad".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
