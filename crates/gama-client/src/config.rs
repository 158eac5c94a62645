//! Client configuration

/// Configuration for connecting to the Gama backend.
#[derive(Debug, Clone)]
pub struct ClienteConfig {
    /// Backend base URL (e.g., "https://api.climasgama.mx")
    pub base_url: String,

    /// JWT bearer token from the login flow
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClienteConfig {
    /// Create a new configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Read configuration from the environment.
    ///
    /// - `GAMA_API_URL`: backend base URL
    /// - `GAMA_API_TOKEN`: bearer token
    /// - `GAMA_API_TIMEOUT`: timeout in seconds (invalid values keep the default)
    pub fn from_env() -> Self {
        let mut config = match std::env::var("GAMA_API_URL") {
            Ok(url) => Self::new(url),
            Err(_) => Self::default(),
        };
        if let Ok(token) = std::env::var("GAMA_API_TOKEN") {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("GAMA_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }
}

impl Default for ClienteConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
