//! Configuration loaded from the environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Default HTTP port for the `vendorlens` server.
pub const DEFAULT_PORT: u16 = 3010;

/// Address shown to users of the (unimplemented) forwarding workflow.
pub const DEFAULT_FORWARD_ADDRESS: &str = "vendor-analysis@example.com";

/// Top-level VendorLens configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorLensConfig {
    /// HTTP server port.
    pub port: u16,
    /// Artificial delay applied before an analysis response, in milliseconds.
    /// Lets a UI show its progress indicator; 0 disables it.
    pub simulated_latency_ms: u64,
    /// Destination address advertised for forwarded threads.
    pub forward_address: String,
}

impl Default for VendorLensConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulated_latency_ms: 0,
            forward_address: DEFAULT_FORWARD_ADDRESS.to_string(),
        }
    }
}

impl VendorLensConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };
        let simulated_latency_ms = match lookup("VENDORLENS_SIMULATED_LATENCY_MS") {
            Some(raw) => parse_var("VENDORLENS_SIMULATED_LATENCY_MS", &raw)?,
            None => defaults.simulated_latency_ms,
        };
        let forward_address = lookup("VENDORLENS_FORWARD_ADDRESS")
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or(defaults.forward_address);

        Ok(Self {
            port,
            simulated_latency_ms,
            forward_address,
        })
    }

    /// Simulated latency as a `Duration`, if enabled.
    pub fn simulated_latency(&self) -> Option<Duration> {
        (self.simulated_latency_ms > 0).then(|| Duration::from_millis(self.simulated_latency_ms))
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} has invalid value {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = VendorLensConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, VendorLensConfig::default());
        assert!(config.simulated_latency().is_none());
    }

    #[test]
    fn test_overrides() {
        let env = vars(&[
            ("PORT", "8080"),
            ("VENDORLENS_SIMULATED_LATENCY_MS", "2500"),
            ("VENDORLENS_FORWARD_ADDRESS", "inbox@acme.test"),
        ]);
        let config = VendorLensConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.simulated_latency(), Some(Duration::from_millis(2500)));
        assert_eq!(config.forward_address, "inbox@acme.test");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let env = vars(&[("PORT", "not-a-port")]);
        let err = VendorLensConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_forward_address_falls_back() {
        let env = vars(&[("VENDORLENS_FORWARD_ADDRESS", "   ")]);
        let config = VendorLensConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.forward_address, DEFAULT_FORWARD_ADDRESS);
    }
}
