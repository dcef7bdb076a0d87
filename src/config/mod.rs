// Configuration module entry point
// Layered configuration: optional file source, environment overrides, defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default `config.toml` (if present),
    /// `SHOWCASE_*` environment variables, and built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SHOWCASE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("site.root", "site")?
            .set_default("site.index_file", "index.html")?
            .set_default("site.manifest_file", "phones.json")?
            .set_default("site.models_dir", "models")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_config_file() {
        let config = Config::load_from("no-such-config").expect("defaults");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.site.root, "site");
        assert_eq!(config.site.index_file, "index.html");
        assert_eq!(config.site.manifest_file, "phones.json");
        assert_eq!(config.site.models_dir, "models");
        assert_eq!(config.logging.access_log_format, "combined");
        assert!(config.logging.access_log_file.is_none());
        assert!(config.performance.max_connections.is_none());
    }

    #[test]
    fn socket_addr_parses_defaults() {
        let config = Config::load_from("no-such-config").expect("defaults");
        let addr = config.socket_addr().expect("valid address");

        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 5000);
    }
}
