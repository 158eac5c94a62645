//! # Letras Module
//!
//! Spells out a monetary amount in uppercase Spanish for the legal line of a
//! printed receipt, e.g. `$1,021.50` → `MIL VEINTIUN PESOS 50/100 M.N.`
//!
//! ## Irregulars
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Spanish number irregulars handled here                                 │
//! │                                                                         │
//! │   0        → CERO                                                       │
//! │   10..19   → DIEZ, ONCE, ... DIECINUEVE        (fused, no "Y")          │
//! │   21..29   → VEINTIUN, VEINTIDOS, ...          (fused with VEINTI)      │
//! │   31..99   → TREINTA Y UN, ...                 (decena Y unidad)        │
//! │   100      → CIEN                              (not CIENTO)             │
//! │   101..199 → CIENTO UN, ...                                             │
//! │   500/700/900 → QUINIENTOS / SETECIENTOS / NOVECIENTOS                  │
//! │   1000     → MIL                               (never UN MIL)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The breakdown works on plain integers; the currency suffix
//! `" PESOS {CC}/100 M.N."` is appended exactly once at the top level, never
//! inside the recursion. Amounts at or above one million pesos fall back to
//! plain digits for the integer part.

use crate::money::Money;

// =============================================================================
// Lookup Tables
// =============================================================================

const UNIDADES: [&str; 10] = [
    "", "UN", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];

const DIECES: [&str; 10] = [
    "DIEZ",
    "ONCE",
    "DOCE",
    "TRECE",
    "CATORCE",
    "QUINCE",
    "DIECISEIS",
    "DIECISIETE",
    "DIECIOCHO",
    "DIECINUEVE",
];

const DECENAS: [&str; 10] = [
    "",
    "DIEZ",
    "VEINTE",
    "TREINTA",
    "CUARENTA",
    "CINCUENTA",
    "SESENTA",
    "SETENTA",
    "OCHENTA",
    "NOVENTA",
];

const CENTENAS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

// =============================================================================
// Integer Breakdown
// =============================================================================

/// Spells out an integer peso count in uppercase Spanish.
///
/// Supports `[0, 1_000_000)`; anything larger renders as plain digits.
pub fn entero_en_letras(n: u64) -> String {
    match n {
        0 => "CERO".to_string(),
        1..=9 => UNIDADES[n as usize].to_string(),
        10..=19 => DIECES[(n - 10) as usize].to_string(),
        20 => "VEINTE".to_string(),
        // 21-29 fuse onto VEINTI with no space: VEINTIUN, VEINTIDOS, ...
        21..=29 => format!("VEINTI{}", UNIDADES[(n - 20) as usize]),
        30..=99 => {
            let decena = DECENAS[(n / 10) as usize];
            let unidad = n % 10;
            if unidad == 0 {
                decena.to_string()
            } else {
                format!("{} Y {}", decena, UNIDADES[unidad as usize])
            }
        }
        // Exactly 100 is CIEN; 101+ uses CIENTO
        100 => "CIEN".to_string(),
        101..=999 => {
            let centena = CENTENAS[(n / 100) as usize];
            let resto = n % 100;
            if resto == 0 {
                centena.to_string()
            } else {
                format!("{} {}", centena, entero_en_letras(resto))
            }
        }
        1000..=999_999 => {
            let miles = n / 1000;
            let resto = n % 1000;
            // "MIL", never "UN MIL"
            let cabeza = if miles == 1 {
                "MIL".to_string()
            } else {
                format!("{} MIL", entero_en_letras(miles))
            };
            if resto == 0 {
                cabeza
            } else {
                format!("{} {}", cabeza, entero_en_letras(resto))
            }
        }
        _ => n.to_string(),
    }
}

// =============================================================================
// Currency Rendering
// =============================================================================

/// Renders a [`Money`] amount as the uppercase legal line of a receipt:
/// `CIENTO DIECISIETE PESOS 00/100 M.N.`
///
/// Negative amounts spell out as zero, matching the display rule that a
/// receipt never shows negative currency.
pub fn importe_con_letra(importe: Money) -> String {
    let importe = if importe.is_negative() {
        Money::zero()
    } else {
        importe
    };
    let pesos = importe.pesos() as u64;
    let centavos = importe.centavos_part();

    format!("{} PESOS {:02}/100 M.N.", entero_en_letras(pesos), centavos)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cero() {
        assert_eq!(entero_en_letras(0), "CERO");
        assert_eq!(
            importe_con_letra(Money::zero()),
            "CERO PESOS 00/100 M.N."
        );
    }

    #[test]
    fn test_unidades_y_teens() {
        assert_eq!(entero_en_letras(1), "UN");
        assert_eq!(entero_en_letras(7), "SIETE");
        assert_eq!(entero_en_letras(10), "DIEZ");
        assert_eq!(entero_en_letras(11), "ONCE");
        assert_eq!(entero_en_letras(15), "QUINCE");
        assert_eq!(entero_en_letras(16), "DIECISEIS");
        assert_eq!(entero_en_letras(19), "DIECINUEVE");
    }

    #[test]
    fn test_veintis_fusionados() {
        assert_eq!(entero_en_letras(20), "VEINTE");
        assert_eq!(entero_en_letras(21), "VEINTIUN");
        assert_eq!(entero_en_letras(25), "VEINTICINCO");
        assert_eq!(entero_en_letras(29), "VEINTINUEVE");
    }

    #[test]
    fn test_decenas_con_y() {
        assert_eq!(entero_en_letras(30), "TREINTA");
        assert_eq!(entero_en_letras(31), "TREINTA Y UN");
        assert_eq!(entero_en_letras(57), "CINCUENTA Y SIETE");
        assert_eq!(entero_en_letras(99), "NOVENTA Y NUEVE");
    }

    #[test]
    fn test_centenas() {
        assert_eq!(entero_en_letras(100), "CIEN");
        assert_eq!(entero_en_letras(101), "CIENTO UN");
        assert_eq!(entero_en_letras(117), "CIENTO DIECISIETE");
        assert_eq!(entero_en_letras(200), "DOSCIENTOS");
        assert_eq!(entero_en_letras(555), "QUINIENTOS CINCUENTA Y CINCO");
        assert_eq!(entero_en_letras(700), "SETECIENTOS");
        assert_eq!(entero_en_letras(999), "NOVECIENTOS NOVENTA Y NUEVE");
    }

    #[test]
    fn test_miles() {
        assert_eq!(entero_en_letras(1000), "MIL");
        assert_eq!(entero_en_letras(1021), "MIL VEINTIUN");
        assert_eq!(entero_en_letras(2000), "DOS MIL");
        assert_eq!(entero_en_letras(15_350), "QUINCE MIL TRESCIENTOS CINCUENTA");
        assert_eq!(
            entero_en_letras(999_999),
            "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE"
        );
    }

    #[test]
    fn test_fallback_a_digitos() {
        assert_eq!(entero_en_letras(1_000_000), "1000000");
        assert_eq!(entero_en_letras(1_234_567), "1234567");
    }

    #[test]
    fn test_importe_con_letra() {
        assert_eq!(
            importe_con_letra(Money::from_cents(100_00)),
            "CIEN PESOS 00/100 M.N."
        );
        assert_eq!(
            importe_con_letra(Money::from_cents(21_50)),
            "VEINTIUN PESOS 50/100 M.N."
        );
        assert_eq!(
            importe_con_letra(Money::from_cents(1_000_00)),
            "MIL PESOS 00/100 M.N."
        );
        assert_eq!(
            importe_con_letra(Money::from_cents(117_00)),
            "CIENTO DIECISIETE PESOS 00/100 M.N."
        );
    }

    #[test]
    fn test_importe_negativo_es_cero() {
        assert_eq!(
            importe_con_letra(Money::from_cents(-500)),
            "CERO PESOS 00/100 M.N."
        );
    }

    #[test]
    fn test_sufijo_aparece_una_sola_vez() {
        let texto = importe_con_letra(Money::from_cents(123_456_78));
        assert_eq!(texto.matches("PESOS").count(), 1);
        assert_eq!(texto.matches("M.N.").count(), 1);
        assert!(texto.ends_with("78/100 M.N."));
    }
}
