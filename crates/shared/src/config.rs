//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Web front-end configuration.
    #[serde(default)]
    pub web: WebConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Web front-end configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// Directory with the static front-end. Not served when unset.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SAC").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Returns the `host:port` address to bind to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            ["SAC__SERVER__HOST", "SAC__SERVER__PORT", "SAC__WEB__STATIC_DIR"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 5000);
                assert!(config.web.static_dir.is_none());
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("SAC__SERVER__HOST", Some("127.0.0.1")),
                ("SAC__SERVER__PORT", Some("8081")),
                ("SAC__WEB__STATIC_DIR", Some("./web")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.host, "127.0.0.1");
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.web.static_dir.as_deref(), Some("./web"));
                assert_eq!(config.bind_address(), "127.0.0.1:8081");
            },
        );
    }

    #[test]
    fn test_default_bind_address() {
        assert_eq!(AppConfig::default().bind_address(), "0.0.0.0:5000");
    }
}
