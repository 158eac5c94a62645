//! # Validation Module
//!
//! Input validation utilities for Gama POS.
//!
//! These run at the edge, before cart or checkout logic sees the value. The
//! cart's own invariants (quantity floor, merge) still hold without them;
//! validation exists to give the cashier a precise message instead of a
//! silent clamp.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (an empty query lists everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validar_busqueda(consulta: &str) -> ValidationResult<String> {
    let consulta = consulta.trim();

    if consulta.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "busqueda".to_string(),
            max: 100,
        });
    }

    Ok(consulta.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity entered directly by the cashier.
///
/// ## Rules
/// - Must be positive (> 0); a line never holds zero units
pub fn validar_cantidad(cantidad: i64) -> ValidationResult<()> {
    if cantidad <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "cantidad".to_string(),
        });
    }

    Ok(())
}

/// Validates a manual discount amount in centavos.
///
/// ## Rules
/// - Must be non-negative (zero clears the discount)
pub fn validar_descuento_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "descuento".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tendered cash amount in centavos.
///
/// ## Rules
/// - Must be non-negative (zero is valid while the cashier is still typing)
pub fn validar_recibido_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "recibido".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validar_porcentaje_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "porcentaje".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
