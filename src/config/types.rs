use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Bounds of the placeholder confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_confidence_min")]
    pub confidence_min: f64,
    #[serde(default = "default_confidence_max")]
    pub confidence_max: f64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.classifier.validate()
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|_| Error::config(format!("Invalid server host: '{}'", self.host)))?;

        if self.port == 0 {
            return Err(Error::config("Server port must be non-zero"));
        }

        if self.max_upload_bytes == 0 {
            return Err(Error::config("max_upload_bytes must be greater than zero"));
        }

        Ok(())
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        let in_unit_range = |v: f64| (0.0..=1.0).contains(&v);

        if !in_unit_range(self.confidence_min) || !in_unit_range(self.confidence_max) {
            return Err(Error::config(format!(
                "Confidence bounds must lie within [0, 1], got [{}, {}]",
                self.confidence_min, self.confidence_max
            )));
        }

        if self.confidence_min > self.confidence_max {
            return Err(Error::config(format!(
                "confidence_min ({}) is greater than confidence_max ({})",
                self.confidence_min, self.confidence_max
            )));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_min: default_confidence_min(),
            confidence_max: default_confidence_max(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_confidence_min() -> f64 {
    0.75
}

fn default_confidence_max() -> f64 {
    0.99
}
