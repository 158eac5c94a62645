//! Ticket output side effects
//!
//! Two destinations: a `.bin` file next to the terminal (for reprints and
//! for drivers that spool raw files) and a network thermal printer on the
//! raw TCP port 9100.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::error::{TicketError, TicketResult};

// =============================================================================
// File Output
// =============================================================================

/// File name for a saved ticket: `ticket_` plus the first six characters of
/// the sale id.
pub fn nombre_ticket(venta_id: &str) -> String {
    let corto: String = venta_id.chars().take(6).collect();
    format!("ticket_{corto}")
}

/// Writes the ESC/POS buffer to disk.
pub async fn guardar(ruta: &Path, bytes: &[u8]) -> TicketResult<()> {
    tokio::fs::write(ruta, bytes).await?;
    info!(ruta = %ruta.display(), bytes = bytes.len(), "ticket guardado");
    Ok(())
}

// =============================================================================
// Network Printer
// =============================================================================

/// Network thermal printer (raw TCP, port 9100).
#[derive(Debug, Clone)]
pub struct ImpresoraRed {
    addr: SocketAddr,
    timeout: Duration,
}

impl ImpresoraRed {
    /// Create a printer at `host:port`. Port 9100 is the usual raw port.
    pub fn new(host: &str, puerto: u16) -> TicketResult<Self> {
        let addr_str = format!("{}:{}", host, puerto);
        let addr = addr_str
            .parse()
            .map_err(|_| TicketError::ConfigInvalida(format!("Dirección inválida: {addr_str}")))?;

        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send raw ESC/POS data to the printer.
    pub async fn imprimir(&self, bytes: &[u8]) -> TicketResult<()> {
        info!(addr = %self.addr, bytes = bytes.len(), "conectando con la impresora");

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| TicketError::Timeout(self.addr.to_string()))?
            .map_err(|e| TicketError::Conexion(format!("{}: {}", self.addr, e)))?;

        stream.write_all(bytes).await?;
        stream.flush().await?;

        info!("ticket enviado");
        Ok(())
    }

    /// Check if the printer is reachable.
    pub async fn en_linea(&self) -> bool {
        let sondeo = Duration::from_millis(500);
        match tokio::time::timeout(sondeo, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!(addr = %self.addr, error = %e, "impresora fuera de línea");
                false
            }
            Err(_) => {
                warn!(addr = %self.addr, "la impresora no respondió al sondeo");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombre_ticket() {
        assert_eq!(nombre_ticket("42"), "ticket_42");
        assert_eq!(nombre_ticket("1234567890"), "ticket_123456");
    }

    #[test]
    fn test_impresora_red_new() {
        let impresora = ImpresoraRed::new("192.168.1.100", 9100).unwrap();
        assert_eq!(impresora.addr().port(), 9100);
    }

    #[test]
    fn test_direccion_invalida() {
        assert!(matches!(
            ImpresoraRed::new("no es un host", 9100),
            Err(TicketError::ConfigInvalida(_))
        ));
    }

    #[tokio::test]
    async fn test_guardar_escribe_el_archivo() {
        let dir = std::env::temp_dir();
        let ruta = dir.join(format!("{}.bin", nombre_ticket("987654321")));
        guardar(&ruta, &[0x1B, 0x40, b'h', b'i']).await.unwrap();
        let leido = tokio::fs::read(&ruta).await.unwrap();
        assert_eq!(leido, vec![0x1B, 0x40, b'h', b'i']);
        let _ = tokio::fs::remove_file(&ruta).await;
    }
}
