//! Gateway configuration, read once from the environment at startup

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    /// Reported by the health endpoint
    pub environment: String,
    pub groq_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub groq_model: Option<String>,
    pub gemini_model: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            groq_api_key: None,
            gemini_api_key: None,
            groq_model: None,
            gemini_model: None,
        }
    }
}

impl GatewayConfig {
    /// Read `PORT`, `AKSARA_ENV`, `GROQ_API_KEY`, `GEMINI_API_KEY`,
    /// `GROQ_MODEL` and `GEMINI_MODEL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] over an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            environment: var("AKSARA_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            groq_api_key: var("GROQ_API_KEY"),
            gemini_api_key: var("GEMINI_API_KEY"),
            groq_model: var("GROQ_MODEL"),
            gemini_model: var("GEMINI_MODEL"),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<GatewayConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.addr().port(), 3000);
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("AKSARA_ENV", "production"),
            ("GROQ_API_KEY", "gsk_test"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_API_KEY", "  "),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model.as_deref(), Some("gemini-2.0-flash"));
    }

    #[test]
    fn test_bad_port_rejected() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
