//! HTTP server configuration

/// Bind address and CORS configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Allowed CORS origins; empty means permissive (development)
    pub cors_origins: Vec<String>,
}

impl HttpServerConfig {
    /// Default port for the analysis API
    pub const DEFAULT_PORT: u16 = 5000;

    /// Configuration bound to the default host with a custom port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// The socket address string for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_socket_addr() {
        assert_eq!(HttpServerConfig::default().socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_with_port() {
        assert_eq!(HttpServerConfig::with_port(8080).socket_addr(), "0.0.0.0:8080");
    }
}
