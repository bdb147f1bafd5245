//! API configuration.

use std::time::Instant;

/// Environment variable holding the token-signing secret.
pub const JWT_SECRET_ENV: &str = "PLANNER_JWT_SECRET";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ApiConfig {
    /// Creates a new API configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16, jwt_secret: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            jwt_secret: jwt_secret.into(),
            cors_origins: vec!["*".to_string()],
            start_time: Instant::now(),
        }
    }

    /// Builds a configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> Self {
        let host = std::env::var("PLANNER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PLANNER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let jwt_secret =
            std::env::var(JWT_SECRET_ENV).unwrap_or_else(|_| "dev-secret-change-me".to_string());
        Self::new(host, port, jwt_secret)
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 5000, "dev-secret-change-me")
    }
}
