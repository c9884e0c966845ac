//! Server Configuration

use std::net::SocketAddr;

use anyhow::Context;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const PORT_VAR: &str = "PORT";
pub const FRONTEND_ORIGINS_VAR: &str = "FRONTEND_ORIGINS";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-level settings read at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .with_context(|| format!("{} must be set in environment", DATABASE_URL_VAR))?;

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, raw))?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = lookup(FRONTEND_ORIGINS_VAR)
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            port,
            frontend_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/db")]))
                .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.addr().port(), 8080);
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_database_url_required() {
        assert!(ServerConfig::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("PORT", "4000"),
            ("FRONTEND_ORIGINS", "https://app.example.com, ,https://admin.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(
            config.frontend_origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("PORT", "eighty"),
        ]));
        assert!(result.is_err());
    }
}
