// Configuration module
// Resolution precedence for every scalar: environment variable, then the
// optional config.toml file, then the built-in default.

use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};

/// Application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub hostname: String,
    pub port: u16,
    /// Runtime environment label, informational only.
    pub environment: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_access_log")]
    pub access_log: bool,
}

fn default_access_log() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: default_access_log(),
        }
    }
}

impl Config {
    /// Load configuration from the default "config" file stem.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    /// The file is optional; environment variables win over it.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with(config_path, |name| std::env::var(name).ok())
    }

    fn load_with(
        config_path: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("hostname", "localhost")?
            .set_default("port", 3002)?
            .set_default("environment", "development")?
            .set_default("logging.access_log", true)?;

        if let Some(hostname) = env("HOSTNAME") {
            builder = builder.set_override("hostname", hostname)?;
        }
        if let Some(port) = env("PORT") {
            builder = builder.set_override("port", port)?;
        }
        if let Some(environment) = env("APP_ENV") {
            builder = builder.set_override("environment", environment)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Resolve `hostname:port` to a bindable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let addr = format!("{}:{}", self.hostname, self.port);
        addr.to_socket_addrs()
            .map_err(|e| format!("Invalid address {addr}: {e}"))?
            .next()
            .ok_or_else(|| format!("Address {addr} did not resolve"))
    }
}
