use crate::config::AuthConfig;
use axum::http::HeaderMap;

/// API-key gate for the HTTP transport.
#[derive(Clone, Debug)]
pub struct ApiKeyAuth {
    enabled: bool,
    header_name: String,
    allowed: Vec<String>,
}

impl ApiKeyAuth {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            header_name: cfg.header_name.trim().to_ascii_lowercase(),
            allowed: cfg.allowed_keys.clone(),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn validate(&self, presented: Option<&str>) -> bool {
        if !self.enabled {
            return true;
        }
        match presented.map(str::trim) {
            Some(key) if !key.is_empty() => self
                .allowed
                .iter()
                .any(|allowed| keys_match(allowed.as_bytes(), key.as_bytes())),
            _ => false,
        }
    }

    /// Checks the configured header of an incoming request.
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let presented = headers
            .get(self.header_name.as_str())
            .and_then(|value| value.to_str().ok());
        self.validate(presented)
    }
}

// Compares every byte regardless of where the first mismatch is.
fn keys_match(expected: &[u8], presented: &[u8]) -> bool {
    expected.len() == presented.len()
        && expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
