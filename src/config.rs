use crate::error::{OpusError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.openopus.org";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpusConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub transport: String, // "stdio", "http"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_url: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub allowed_keys: Vec<String>,
    pub header_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_level: "info".to_string(),
            transport: "stdio".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            user_agent: format!("OpenOpus-MCP/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_keys: vec![],
            header_name: "x-api-key".to_string(),
        }
    }
}

impl OpusConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("OPENOPUS_MCP_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| OpusError::config_error("Invalid OPENOPUS_MCP_PORT"))?;
        }

        if let Ok(log_level) = std::env::var("OPENOPUS_MCP_LOG_LEVEL") {
            config.server.log_level = log_level;
        }

        if let Ok(transport) = std::env::var("OPENOPUS_MCP_TRANSPORT") {
            config.server.transport = transport;
        }

        // Catalog service
        if let Ok(api_url) = std::env::var("OPENOPUS_API_URL") {
            if !api_url.trim().is_empty() {
                config.catalog.api_url = api_url;
            }
        }
        if let Ok(timeout) = std::env::var("OPENOPUS_TIMEOUT_SECS") {
            let secs = timeout
                .parse()
                .map_err(|_| OpusError::config_error("Invalid OPENOPUS_TIMEOUT_SECS"))?;
            config.catalog.timeout_secs = Some(secs);
        }
        if let Ok(user_agent) = std::env::var("OPENOPUS_USER_AGENT") {
            config.catalog.user_agent = user_agent;
        }

        // Auth configuration
        if let Ok(enabled) = std::env::var("OPENOPUS_MCP_AUTH_ENABLED") {
            config.auth.enabled = parse_flag(&enabled);
        }
        if let Ok(keys) = std::env::var("OPENOPUS_MCP_API_KEYS") {
            let list = split_keys(&keys);
            if !list.is_empty() {
                config.auth.allowed_keys = list;
            }
        }
        if let Ok(header_name) = std::env::var("OPENOPUS_MCP_AUTH_HEADER") {
            if !header_name.trim().is_empty() {
                config.auth.header_name = header_name;
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| OpusError::config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| OpusError::config_error(format!("Failed to parse config file: {}", e)))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_catalog() {
        let config = OpusConfig::default();
        assert_eq!(config.catalog.api_url, DEFAULT_API_URL);
        assert_eq!(config.catalog.timeout_secs, None);
        assert_eq!(config.server.transport, "stdio");
        assert!(!config.auth.enabled);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = OpusConfig::from_toml_str(
            r#"
            [catalog]
            api_url = "http://localhost:9000"
            timeout_secs = 5

            [server]
            transport = "http"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.api_url, "http://localhost:9000");
        assert_eq!(config.catalog.timeout_secs, Some(5));
        assert_eq!(config.server.transport, "http");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.header_name, "x-api-key");
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = OpusConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, OpusError::ConfigError(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = OpusConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn key_list_and_flags() {
        assert_eq!(split_keys(" a, ,b ,"), vec!["a", "b"]);
        assert!(parse_flag("ON"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("off"));
    }
}
