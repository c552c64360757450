//! # rca-config
//!
//! Layered configuration loading for the RCA assistant using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RCA_*` prefix, `__` as separator)
//! 2. Project-level `.rca/config.toml`
//! 3. User-level `~/.config/rca/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RCA_ASSISTANT__RESPONSE_DELAY_MS` -> `assistant.response_delay_ms`,
//! `RCA_DASHBOARD__LATENCY_THRESHOLD_MS` -> `dashboard.latency_threshold_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use rca_config::RcaConfig;
//!
//! let config = RcaConfig::load_with_dotenv().expect("config");
//! println!("reply delay: {:?}", config.assistant.response_delay());
//! ```

mod assistant;
mod dashboard;
mod error;
mod general;

pub use assistant::{AssistantConfig, DEFAULT_GREETING, MAX_RESPONSE_DELAY_MS};
pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RcaConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RcaConfig {
    /// Load and validate configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` on the nearest `.env` before building the figment. This
    /// is the entry point used by the `rca` binary.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".rca/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("RCA_").split("__"))
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assistant.validate()?;
        self.dashboard.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rca").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
