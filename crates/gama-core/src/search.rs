//! # Search Module
//!
//! Diacritic- and case-insensitive catalog search.
//!
//! The catalog is Spanish: the cashier types `camion` and must still find
//! `Camión`. Every comparison goes through the same normalizer so a string
//! equals its own normalization no matter where it came from.
//!
//! ## Matching pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "  Camión GRANDE " ──► NFD decompose ──► strip combining marks         │
//! │                     ──► lowercase ──► trim ──► "camion grande"          │
//! │                                                                         │
//! │  Query tokens use AND semantics: every token must appear somewhere      │
//! │  in the concatenated, normalized fields of the product.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::Producto;

// =============================================================================
// Normalizer
// =============================================================================

/// Normalizes text for comparison: NFD decompose, drop combining marks,
/// lowercase, trim.
///
/// ## Example
/// ```rust
/// use gama_core::search::normalizar;
///
/// assert_eq!(normalizar("  Camión  "), "camion");
/// assert_eq!(normalizar("NIÑO"), "nino");
/// ```
pub fn normalizar(texto: &str) -> String {
    texto
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

// =============================================================================
// Token Matching
// =============================================================================

/// Returns true when every whitespace-separated token of `consulta` appears
/// as a substring of the normalized concatenation of `campos`.
///
/// An empty query (no tokens) matches everything.
pub fn coincide_todos_los_tokens(campos: &[&str], consulta: &str) -> bool {
    let pajar = normalizar(&campos.join(" "));
    normalizar(consulta)
        .split_whitespace()
        .all(|token| pajar.contains(token))
}

/// Returns true when `consulta` is exactly the product's code or barcode
/// (normalized full equality, not substring).
pub fn es_codigo_exacto(producto: &Producto, consulta: &str) -> bool {
    let consulta = normalizar(consulta);
    if consulta.is_empty() {
        return false;
    }
    if normalizar(&producto.codigo) == consulta {
        return true;
    }
    producto
        .codigo_barras
        .as_deref()
        .map(|cb| normalizar(cb) == consulta)
        .unwrap_or(false)
}

// =============================================================================
// Catalog Queries
// =============================================================================

/// Finds the single product whose code or barcode matches `consulta` exactly.
///
/// This is the scan-entry path: on Enter, an exact code hit wins over the
/// filtered suggestion list.
pub fn buscar_codigo_exacto<'a>(productos: &'a [Producto], consulta: &str) -> Option<&'a Producto> {
    productos.iter().find(|p| es_codigo_exacto(p, consulta))
}

/// Filters the catalog down to products matching every query token across
/// code, barcode and description.
pub fn filtrar<'a>(productos: &'a [Producto], consulta: &str) -> Vec<&'a Producto> {
    productos
        .iter()
        .filter(|p| {
            coincide_todos_los_tokens(
                &[
                    p.codigo.as_str(),
                    p.codigo_barras.as_deref().unwrap_or(""),
                    p.descripcion.as_str(),
                ],
                consulta,
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
