//! Store header configuration
//!
//! What prints at the top and bottom of every ticket. Defaults carry the
//! real storefront; `GAMA_*` environment variables override per terminal.

/// Store identity printed on every ticket.
#[derive(Debug, Clone)]
pub struct Tienda {
    /// Store name, printed double-size at the top.
    pub nombre: String,
    /// Street address, centered under the name.
    pub direccion: String,
    /// Phone number for invoice requests, printed in the footer.
    pub telefono_factura: String,
}

impl Default for Tienda {
    fn default() -> Self {
        Self {
            nombre: "CLIMAS GAMA".to_string(),
            direccion: "Prol. Juarez #435 2, Contadero, Cuajimalpa de Morelos, C.P. 05500, CDMX"
                .to_string(),
            telefono_factura: "5569700587".to_string(),
        }
    }
}

impl Tienda {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// - `GAMA_TIENDA_NOMBRE`
    /// - `GAMA_TIENDA_DIRECCION`
    /// - `GAMA_TIENDA_TELEFONO`
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            nombre: std::env::var("GAMA_TIENDA_NOMBRE").unwrap_or(base.nombre),
            direccion: std::env::var("GAMA_TIENDA_DIRECCION").unwrap_or(base.direccion),
            telefono_factura: std::env::var("GAMA_TIENDA_TELEFONO").unwrap_or(base.telefono_factura),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lleva_el_encabezado_real() {
        let tienda = Tienda::default();
        assert_eq!(tienda.nombre, "CLIMAS GAMA");
        assert!(tienda.direccion.contains("Cuajimalpa"));
        assert_eq!(tienda.telefono_factura, "5569700587");
    }
}
