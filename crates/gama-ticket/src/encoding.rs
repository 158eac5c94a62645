//! Windows-1252 encoding utilities for Spanish thermal printers
//!
//! The printers at the counter speak code page WPC1252, where every accented
//! Spanish character is a single byte. This module provides:
//! - Width calculation and truncation/padding in printed columns
//! - UTF-8 → Windows-1252 conversion that preserves ESC/POS commands

/// Printed width of a string in Windows-1252 columns.
///
/// Every encodable character is one byte, so this is the byte length after
/// encoding (unmappable characters become `?`, still one column).
pub fn ancho(s: &str) -> usize {
    let (cow, _, _) = encoding_rs::WINDOWS_1252.encode(s);
    cow.len()
}

/// Truncate a string to fit within a printed column width.
pub fn truncar(s: &str, max_ancho: usize) -> String {
    let mut ancho_actual = 0;
    let mut resultado = String::new();
    for c in s.chars() {
        let pedazo = c.to_string();
        let (cow, _, _) = encoding_rs::WINDOWS_1252.encode(&pedazo);
        if ancho_actual + cow.len() > max_ancho {
            break;
        }
        resultado.push(c);
        ancho_actual += cow.len();
    }
    resultado
}

/// Pad a string to a specific printed width.
///
/// If the string is longer than the width, it will be truncated.
pub fn rellenar(s: &str, ancho_total: usize, alinear_derecha: bool) -> String {
    let ancho_actual = ancho(s);
    if ancho_actual >= ancho_total {
        return truncar(s, ancho_total);
    }
    let espacios = ancho_total - ancho_actual;
    if alinear_derecha {
        format!("{}{}", " ".repeat(espacios), s)
    } else {
        format!("{}{}", s, " ".repeat(espacios))
    }
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to Windows-1252.
///
/// ASCII bytes (0x00-0x7F) pass through untouched, which protects ESC/POS
/// commands from being corrupted. Only bytes >= 0x80 are treated as UTF-8
/// sequences and re-encoded.
///
/// The output starts by selecting code page WPC1252 (ESC t 16), and
/// re-selects it after any INIT command (ESC @) found in the stream, since
/// INIT resets the printer to its default code page.
pub fn convertir_cp1252(bytes: &[u8]) -> Vec<u8> {
    let mut resultado = Vec::with_capacity(bytes.len() + 16);

    // ESC t 16 - select code page WPC1252
    resultado.extend_from_slice(&[0x1B, 0x74, 16]);

    let mut pendiente = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT (ESC @) resets the code page; re-select after it
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            vaciar(&mut pendiente, &mut resultado);
            resultado.extend_from_slice(&[0x1B, 0x40, 0x1B, 0x74, 16]);
            i += 2;
            continue;
        }

        if b < 128 {
            // ASCII: command byte or plain text
            vaciar(&mut pendiente, &mut resultado);
            resultado.push(b);
        } else {
            // Part of a UTF-8 sequence
            pendiente.push(b);
        }
        i += 1;
    }

    vaciar(&mut pendiente, &mut resultado);
    resultado
}

/// Flush the pending non-ASCII bytes, re-encoding them as Windows-1252.
fn vaciar(pendiente: &mut Vec<u8>, resultado: &mut Vec<u8>) {
    if pendiente.is_empty() {
        return;
    }
    let s = String::from_utf8_lossy(pendiente);
    let (cp1252, _, _) = encoding_rs::WINDOWS_1252.encode(&s);
    resultado.extend_from_slice(&cp1252);
    pendiente.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancho() {
        assert_eq!(ancho("hola"), 4);
        assert_eq!(ancho("Camión"), 6); // ó is one byte in cp1252
        assert_eq!(ancho("¡Gracias!"), 9);
    }

    #[test]
    fn test_truncar() {
        assert_eq!(truncar("hola mundo", 4), "hola");
        assert_eq!(truncar("Instalación", 8), "Instalac");
        assert_eq!(truncar("ab", 10), "ab");
    }

    #[test]
    fn test_rellenar() {
        assert_eq!(rellenar("hi", 5, false), "hi   ");
        assert_eq!(rellenar("hi", 5, true), "   hi");
        assert_eq!(rellenar("hola mundo", 4, false), "hola");
    }

    #[test]
    fn test_convertir_preserva_comandos() {
        // bold-on, text with accent, bold-off
        let entrada = [&[0x1B, 0x45, 0x01][..], "Camión".as_bytes(), &[0x1B, 0x45, 0x00][..]]
            .concat();
        let salida = convertir_cp1252(&entrada);

        // Starts with code page selection
        assert_eq!(&salida[..3], &[0x1B, 0x74, 16]);
        // Commands intact
        assert!(salida.windows(3).any(|w| w == [0x1B, 0x45, 0x01]));
        assert!(salida.windows(3).any(|w| w == [0x1B, 0x45, 0x00]));
        // ó encoded as single cp1252 byte 0xF3
        assert!(salida.contains(&0xF3));
        // No raw UTF-8 continuation bytes left
        assert!(!salida.windows(2).any(|w| w == [0xC3, 0xB3]));
    }

    #[test]
    fn test_convertir_reselecciona_tras_init() {
        let entrada = [0x1B, 0x40, b'a'];
        let salida = convertir_cp1252(&entrada);
        // prelude, INIT, re-selection, then the text
        assert_eq!(
            salida,
            vec![0x1B, 0x74, 16, 0x1B, 0x40, 0x1B, 0x74, 16, b'a']
        );
    }
}
