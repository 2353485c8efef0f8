use std::env;

use super::error::ConfigError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Address the storefront API listens on.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: Interface for the storefront listener (default: 127.0.0.1)
    /// - SERVICE_PORT: Listener port, 0-65535 (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let ip = ip
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::NotANumber {
                    name: "SERVICE_PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { ip, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_listen_on_loopback_by_default() {
        let config = ServerConfig::from_values(None, None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_bind_to_configured_interface_and_port() {
        let config =
            ServerConfig::from_values(Some("0.0.0.0".to_string()), Some(" 9090 ".to_string()))
                .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn should_reject_port_outside_range() {
        assert_eq!(
            ServerConfig::from_values(None, Some("70000".to_string())),
            Err(ConfigError::NotANumber {
                name: "SERVICE_PORT",
                value: "70000".to_string(),
            })
        );
        assert_eq!(
            ServerConfig::from_values(None, Some("http".to_string())),
            Err(ConfigError::NotANumber {
                name: "SERVICE_PORT",
                value: "http".to_string(),
            })
        );
    }
}
