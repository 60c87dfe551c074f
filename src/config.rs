use std::str::FromStr;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::Level;

use crate::error::AppError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/classify";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceSettings,
    pub ui: UiSettings,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub breakdown_limit: usize,
    pub toast_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            ui: UiSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            breakdown_limit: 5,
            toast_secs: 4,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl Settings {
    /// Loads `auralens.toml` from the working directory (if present) and then
    /// applies `AURALENS__SECTION__KEY` environment overrides.
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(
            Config::builder().add_source(File::with_name("auralens").required(false)),
            environment(),
        )
    }

    fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: Environment,
    ) -> Result<Self, AppError> {
        let settings = builder
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// Falls back to INFO for unrecognised level names.
    pub fn tracing_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("AURALENS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}
