use std::path::{Path, PathBuf};

use clap::Parser;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde::Deserialize;

use crate::error::ConfigError;

/// Default POST body limit, matching axum's built-in limit.
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// paste server command line
#[derive(Parser, Clone, Debug)]
#[command(name = "paste-server", version, about = "Anonymous paste store")]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(long, default_value = "./config.yml")]
    pub config: PathBuf,

    /// Enable structured JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Output a commented YAML config template and exit
    #[arg(long)]
    pub generate_config: bool,
}

/// Settings loaded once at startup from the YAML config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen port: ":8080", "8080" or "host:port"
    pub port: String,

    /// Directory served under /static (skipped when unset or missing)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Maximum POST body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage root all pastes live under
    pub tmp_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomConfig {
    /// Length of generated identifiers
    pub string_length: usize,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Config {
    /// Load and validate the config file at `path`.
    ///
    /// A missing file is an error rather than an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Parse and validate config from a YAML string.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = Figment::new().merge(Yaml::string(raw)).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.random.string_length == 0 {
            return Err(ConfigError::Invalid(
                "random.string_length must be at least 1".to_string(),
            ));
        }
        if self.storage.tmp_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.tmp_path must not be empty".to_string(),
            ));
        }
        self.listen_addr()?;
        Ok(())
    }

    /// Bind address derived from `server.port`.
    pub fn listen_addr(&self) -> Result<String, ConfigError> {
        let port = self.server.port.trim();
        let (host, port_part) = match port.rsplit_once(':') {
            Some(("", p)) => ("0.0.0.0", p),
            Some((h, p)) => (h, p),
            None => ("0.0.0.0", port),
        };
        port_part.parse::<u16>().map_err(|_| {
            ConfigError::Invalid(format!("server.port {:?} is not a valid port", self.server.port))
        })?;
        Ok(format!("{}:{}", host, port_part))
    }
}

/// Generate a commented YAML config template
pub fn generate_config_template() -> String {
    r#"# Paste server configuration
# Place this file at ./config.yml or specify with --config <path>

server:
  # Listen port: ":8080" (all interfaces), "8080", or "host:port"
  port: ":8080"

  # Directory served under /static (optional)
  # static_dir: ./static

  # Maximum POST body size in bytes (default: 2 MiB)
  # max_body_bytes: 2097152

storage:
  # Directory pastes are stored under, one file per identifier
  tmp_path: ./data

random:
  # Length of generated paste identifiers
  string_length: 8
"#
    .to_string()
}
