//! Session context decoded from the login token
//!
//! The terminal never validates the token's signature; that is the
//! backend's job on every request. What we need locally is the seller's
//! identity for the receipt and the expiry, so we can send the cashier back
//! to the login screen instead of letting a stale session fail mid-sale.

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Claims the backend puts in the login token.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    nombre: Option<String>,
    exp: i64,
}

#[derive(Debug, Error)]
pub enum SesionError {
    #[error("Token de sesión inválido")]
    TokenInvalido(#[from] jsonwebtoken::errors::Error),

    #[error("La sesión ha expirado")]
    Expirada,
}

/// The active seller session.
#[derive(Debug, Clone)]
pub struct Sesion {
    /// Seller id from the token claims, when present.
    pub usuario_id: Option<i64>,
    /// Display name for the receipt.
    pub nombre: String,
    /// Expiry as a unix timestamp.
    pub expira: i64,
}

impl Sesion {
    /// Decodes the login token and checks expiry.
    ///
    /// `nombre_perfil` is the name stored with the local profile; when
    /// present it wins over whatever the claim carries (the profile is what
    /// the seller chose to be called on printed tickets).
    pub fn desde_token(token: &str, nombre_perfil: Option<&str>) -> Result<Self, SesionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        // Expiry is checked below against our own clock so the error is ours
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
        let claims = data.claims;

        if claims.exp <= Utc::now().timestamp() {
            return Err(SesionError::Expirada);
        }

        let nombre = nombre_perfil
            .map(str::to_string)
            .or(claims.nombre)
            .unwrap_or_else(|| "Mostrador".to_string());

        debug!(usuario_id = ?claims.id, %nombre, "sesión activa");

        Ok(Sesion {
            usuario_id: claims.id,
            nombre,
            expira: claims.exp,
        })
    }
}
