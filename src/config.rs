//! Decoding and model-location settings.
//!
//! The defaults reproduce the fixed configuration the pre-trained models were
//! tuned with: multitag thresholds `0.01` then `0.001`, no time limit, no chart
//! limit, parser-default beam.
//!
//! ```json
//! {
//!   "models": {
//!     "parser": "models/parser.ser",
//!     "supertagger": "models/supertagger.ser"
//!   },
//!   "decoding": { "multitag_thresholds": [0.01, 0.001], "max_parse_time_ms": 30000 }
//! }
//! ```

use crate::parser::ChartBudget;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the serialized parser.
pub const DEFAULT_PARSER_MODEL_PATH: &str = "src/main/resources/parser.ser";

/// Default location of the serialized supertagger.
pub const DEFAULT_SUPERTAGGER_MODEL_PATH: &str = "src/main/resources/supertagger.ser";

/// Default multitag thresholds, tightest first.
pub const DEFAULT_MULTITAG_THRESHOLDS: [f64; 2] = [0.01, 0.001];

/// Settings for the composite supertagging parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodingConfig {
    /// Supertagger thresholds tried in order until a parse is found.
    pub multitag_thresholds: Vec<f64>,
    /// Per-call time limit in milliseconds; `None` is unbounded.
    pub max_parse_time_ms: Option<u64>,
    /// Maximum chart size.
    pub max_chart_size: usize,
    /// Beam size; `None` leaves the parser default.
    pub beam_size: Option<usize>,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            multitag_thresholds: DEFAULT_MULTITAG_THRESHOLDS.to_vec(),
            max_parse_time_ms: None,
            max_chart_size: usize::MAX,
            beam_size: None,
        }
    }
}

impl DecodingConfig {
    /// Check the thresholds: non-empty, each in `(0, 1]`, non-increasing.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.multitag_thresholds.is_empty() {
            return Err(Error::invalid_input("multitag_thresholds must not be empty"));
        }
        for &t in &self.multitag_thresholds {
            if !(t > 0.0 && t <= 1.0) {
                return Err(Error::invalid_input(format!(
                    "multitag threshold {t} is outside (0, 1]"
                )));
            }
        }
        if self.multitag_thresholds.windows(2).any(|w| w[1] > w[0]) {
            return Err(Error::invalid_input(format!(
                "multitag thresholds must be tightest first, got {:?}",
                self.multitag_thresholds
            )));
        }
        if self.max_chart_size == 0 {
            return Err(Error::invalid_input("max_chart_size must be positive"));
        }
        Ok(())
    }

    /// Budget handed to the chart parser on every call.
    #[must_use]
    pub fn chart_budget(&self) -> ChartBudget {
        ChartBudget {
            beam_size: self.beam_size,
            max_parse_time: self.max_parse_time_ms.map(Duration::from_millis),
            max_chart_size: self.max_chart_size,
        }
    }
}

/// Where the serialized models live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPaths {
    /// Serialized mention-aware CCG parser.
    pub parser: PathBuf,
    /// Serialized supertagger.
    pub supertagger: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            parser: PathBuf::from(DEFAULT_PARSER_MODEL_PATH),
            supertagger: PathBuf::from(DEFAULT_SUPERTAGGER_MODEL_PATH),
        }
    }
}

/// Complete annotator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemparseConfig {
    /// Model locations.
    pub models: ModelPaths,
    /// Decoding settings.
    pub decoding: DecodingConfig,
}

impl SemparseConfig {
    /// Read a JSON configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::InvalidInput`] if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::invalid_input(format!("Invalid config {}: {}", path.display(), e))
        })?;
        config.decoding.validate()?;
        Ok(config)
    }
}
