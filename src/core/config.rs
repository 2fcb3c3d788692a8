use crate::auth::JwtConfig;

/// Server configuration
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | (dev key) | signing secret, >= 32 bytes |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | JWT_ISSUER | canteen-server | token issuer |
/// | JWT_AUDIENCE | canteen-clients | token audience |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// JWT validation configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
