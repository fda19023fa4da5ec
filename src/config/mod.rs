// Configuration module entry point
// Manages application configuration and process-wide state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PathsConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; built-in defaults apply for anything it does
    /// not set. Environment variables with the `SITE_` prefix are merged
    /// in, and `PORT` overrides the listening port.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SITE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("paths.views", "views")?
            .set_default("paths.partials", "views/partials")?
            .set_default("paths.public", "public")?
            .set_default("logging.request_log_file", "server.log")?
            .set_override_option("server.port", std::env::var("PORT").ok())?
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
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config").unwrap();

        // PORT may be set in the environment; defaults apply otherwise
        let expected_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, expected_port);
        assert_eq!(cfg.paths.views, "views");
        assert_eq!(cfg.paths.partials, "views/partials");
        assert_eq!(cfg.paths.public, "public");
        assert_eq!(cfg.logging.request_log_file, "server.log");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("no-such-config").unwrap();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 3000;

        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.is_ipv4());
    }
}
