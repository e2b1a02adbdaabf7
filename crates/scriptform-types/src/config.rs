//! Global configuration types for scriptform.
//!
//! `GlobalConfig` represents the top-level `config.toml` that sets the
//! default script and the web server bind address.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.scriptform/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Script used when a command is given no script argument.
    #[serde(default)]
    pub default_script: Option<PathBuf>,

    /// Web server settings for `sform serve`.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Bind address for the web form server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert!(config.default_script.is_none());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.default_script.is_none());
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
default_script = "scripts/password.rhai"

[server]
host = "0.0.0.0"
port = 8080
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.default_script,
            Some(PathBuf::from("scripts/password.rhai"))
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_server_config_partial_table() {
        let config: GlobalConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }
}
