//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.

use crate::encoding::{ancho, convertir_cp1252};

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers. All text is
/// converted to Windows-1252 on [`TicketBuilder::build`].
pub struct TicketBuilder {
    buf: Vec<u8>,
    ancho: usize,
}

impl TicketBuilder {
    /// Create a new builder with the specified paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(ancho: usize) -> Self {
        let mut buf = Vec::with_capacity(4096);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self { buf, ancho }
    }

    /// Get the configured paper width
    pub fn ancho(&self) -> usize {
        self.ancho
    }

    // === Text Output ===

    /// Write raw text (encoded on build)
    pub fn texto(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Write text followed by newline
    pub fn linea(&mut self, s: &str) -> &mut Self {
        self.texto(s);
        self.buf.push(b'\n');
        self
    }

    /// Write empty line
    pub fn nueva_linea(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Print and feed n lines (ESC d n)
    pub fn avanzar(&mut self, lineas: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x64, lineas]);
        self
    }

    // === Alignment ===

    /// Align text to center
    pub fn centrar(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    /// Align text to left (default)
    pub fn izquierda(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x00]);
        self
    }

    // === Text Style ===

    /// Enable bold text
    pub fn negrita(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x01]);
        self
    }

    /// Disable bold text
    pub fn negrita_off(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x00]);
        self
    }

    /// Double width and height
    pub fn tamano_doble(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x11]);
        self
    }

    /// Reset to normal size
    pub fn tamano_normal(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x00]);
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn separador_doble(&mut self) -> &mut Self {
        let s = "=".repeat(self.ancho);
        self.linea(&s)
    }

    /// Print a line of '-' characters
    pub fn separador(&mut self) -> &mut Self {
        let s = "-".repeat(self.ancho);
        self.linea(&s)
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap.
    pub fn linea_lr(&mut self, izq: &str, der: &str) -> &mut Self {
        let ai = ancho(izq);
        let ad = ancho(der);

        if ai + ad >= self.ancho {
            // Too long, just print with a space between
            self.texto(izq);
            self.texto(" ");
            self.linea(der);
        } else {
            let espacios = self.ancho - ai - ad;
            self.texto(izq);
            self.texto(&" ".repeat(espacios));
            self.linea(der);
        }
        self
    }

    // === Paper Control ===

    /// Full cut after feeding n lines (GS V 66 n)
    ///
    /// Lets the printer manage cutter-to-head distance, which wastes less
    /// top margin on the next ticket than separate feed + cut commands.
    pub fn cortar(&mut self, lineas: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x42, lineas]);
        self
    }

    // === Build ===

    /// Build the final byte buffer with Windows-1252 encoding
    ///
    /// Converts all UTF-8 text while preserving ESC/POS commands.
    pub fn build(self) -> Vec<u8> {
        convertir_cp1252(&self.buf)
    }

    /// Build without encoding conversion (for tests and ASCII-only content)
    pub fn build_raw(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for TicketBuilder {
    fn default() -> Self {
        Self::new(crate::ANCHO_58MM)
    }
}
