//! TOML configuration.
//!
//! Every section and field is optional; anything left out keeps its default.
//!
//! ```toml
//! [indicators]
//! ma_short = 25
//! bb_window = 20
//!
//! [scoring]
//! quality = "linear"
//! valuation = "tiered"
//!
//! [correction]
//! alpha = 0.3
//!
//! [fetch]
//! range = "1y"
//! ```

use kaidoki_fetch::FetchConfig;
use kaidoki_indicators::IndicatorConfig;
use kaidoki_signals::{
    quality::{QualityModel, SectorCorrectionConfig},
    value::ValuationModel,
};
use kaidoki_traits::{KaidokiError, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "KAIDOKI_CONFIG";

/// Which scoring models to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Q model (default: tiered)
    pub quality: QualityModel,
    /// V model (default: tiered)
    pub valuation: ValuationModel,
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KaidokiConfig {
    /// Indicator windows
    pub indicators: IndicatorConfig,
    /// Scoring models
    pub scoring: ScoringConfig,
    /// Sector correction tuning
    pub correction: SectorCorrectionConfig,
    /// Data-source settings
    pub fetch: FetchConfig,
}

impl KaidokiConfig {
    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] for malformed TOML or invalid values.
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)
            .map_err(|e| KaidokiError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] when the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            KaidokiError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Load from `explicit`, else from `$KAIDOKI_CONFIG`, else use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] when a named file cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit, std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.indicators.validate()?;
        self.correction.validate()?;
        if self.fetch.timeout_secs == 0 {
            return Err(KaidokiError::Config(
                "fetch timeout_secs must be positive".to_string(),
            ));
        }
        if self.fetch.range.trim().is_empty() || self.fetch.interval.trim().is_empty() {
            return Err(KaidokiError::Config(
                "fetch range and interval must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn resolve_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    })
}
