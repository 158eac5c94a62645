//! Receipt layout for 58 mm paper
//!
//! Everything here is pure string/byte work: the layout helpers return the
//! lines they would print, and [`renderizar`] assembles the final ESC/POS
//! buffer. Nothing in this module touches a socket or the filesystem.
//!
//! ## Ticket anatomy (32 columns)
//! ```text
//!          CLIMAS GAMA               ← double size, bold, centered
//!   Prol. Juarez #435 2, ...         ← wrapped address, centered
//! --------------------------------
//! Fecha: 29/08/2026 18:45
//! Folio: 42
//! Atendió: Laura
//! --------------------------------
//! Cant Producto           Importe
//! 2    Minisplit Frío 12  $130.00
//! --------------------------------
//! Subtotal                 $130.00
//! Descuento                 $13.00  ← only when > 0
//! TOTAL                    $117.00  ← bold
//! Efectivo                 $150.00
//! Cambio                    $33.00
//! CIENTO DIECISIETE PESOS 00/100
//! M.N.
//!
//!     ¡Gracias por su compra!
//!  Facturación: 5569700587
//! ```

use gama_core::receipt::Recibo;

use crate::config::Tienda;
use crate::encoding::{ancho, rellenar, truncar};
use crate::escpos::TicketBuilder;
use crate::ANCHO_58MM;

/// Sale ids longer than this are cut on the printed ticket.
const MAX_ID_IMPRESO: usize = 12;

// =============================================================================
// Pure Layout Helpers
// =============================================================================

/// Word-wraps text to the given printed width. Words longer than the width
/// are split hard.
pub fn envolver(texto: &str, ancho_max: usize) -> Vec<String> {
    let mut lineas = Vec::new();
    let mut actual = String::new();

    for palabra in texto.split_whitespace() {
        let mut palabra = palabra.to_string();
        // Hard-split oversized words
        while ancho(&palabra) > ancho_max {
            let pedazo = truncar(&palabra, ancho_max);
            palabra = palabra[pedazo.len()..].to_string();
            if !actual.is_empty() {
                lineas.push(std::mem::take(&mut actual));
            }
            lineas.push(pedazo);
        }
        if palabra.is_empty() {
            continue;
        }
        if actual.is_empty() {
            actual = palabra;
        } else if ancho(&actual) + 1 + ancho(&palabra) <= ancho_max {
            actual.push(' ');
            actual.push_str(&palabra);
        } else {
            lineas.push(std::mem::take(&mut actual));
            actual = palabra;
        }
    }
    if !actual.is_empty() {
        lineas.push(actual);
    }
    lineas
}

/// The item table: header plus one row per line item.
///
/// Columns at 32 wide: quantity 4, description 17, extended price 11
/// (right-aligned). Long descriptions are truncated, never wrapped, so a
/// ticket with many items stays short.
pub fn tabla_partidas(recibo: &Recibo, ancho_papel: usize) -> Vec<String> {
    let col_cant = 4;
    let col_importe = 11;
    let col_desc = ancho_papel - col_cant - col_importe;

    let mut filas = Vec::with_capacity(recibo.partidas.len() + 1);
    filas.push(format!(
        "{}{}{}",
        rellenar("Cant", col_cant, false),
        rellenar("Producto", col_desc, false),
        rellenar("Importe", col_importe, true),
    ));

    for partida in &recibo.partidas {
        filas.push(format!(
            "{}{}{}",
            rellenar(&partida.cantidad.to_string(), col_cant, false),
            rellenar(&partida.descripcion, col_desc, false),
            rellenar(&partida.importe().formato_mx(), col_importe, true),
        ));
    }
    filas
}

/// The sale id as printed: truncated so it never wraps the metadata line.
pub fn folio_impreso(venta_id: &str) -> String {
    truncar(venta_id, MAX_ID_IMPRESO)
}

// =============================================================================
// Renderer
// =============================================================================

/// Lays the receipt out as an ESC/POS byte buffer ready for
/// [`crate::salida`].
pub fn renderizar(recibo: &Recibo, tienda: &Tienda) -> Vec<u8> {
    let mut b = TicketBuilder::new(ANCHO_58MM);

    // Header
    b.centrar().negrita().tamano_doble();
    b.linea(&tienda.nombre);
    b.tamano_normal().negrita_off();
    for linea in envolver(&tienda.direccion, ANCHO_58MM) {
        b.linea(&linea);
    }
    b.izquierda().separador();

    // Metadata
    b.linea(&format!(
        "Fecha: {}",
        recibo.fecha.format("%d/%m/%Y %H:%M")
    ));
    b.linea(&format!("Folio: {}", folio_impreso(&recibo.venta_id)));
    b.linea(&format!("Atendió: {}", recibo.vendedor));
    b.separador();

    // Items
    for fila in tabla_partidas(recibo, ANCHO_58MM) {
        b.linea(&fila);
    }
    b.separador();

    // Totals
    b.linea_lr("Subtotal", &recibo.subtotal.formato_mx());
    if recibo.tiene_descuento() {
        b.linea_lr("Descuento", &recibo.descuento.formato_mx());
    }
    b.negrita();
    b.linea_lr("TOTAL", &recibo.total.formato_mx());
    b.negrita_off();

    // Payment block
    if recibo.forma_pago.es_efectivo() {
        b.linea_lr("Efectivo", &recibo.recibido.formato_mx());
        b.linea_lr("Cambio", &recibo.cambio.formato_mx());
    } else {
        b.linea_lr("Forma de pago", &recibo.forma_pago.to_string());
    }

    // Legal line
    for linea in envolver(&recibo.total_en_letras(), ANCHO_58MM) {
        b.linea(&linea);
    }

    // Footer
    b.nueva_linea().centrar();
    b.linea("¡Gracias por su compra!");
    b.linea(&format!("Facturación: {}", tienda.telefono_factura));
    b.cortar(4);

    b.build()
}

// =============================================================================
// Unit Tests
// =============================================================================
