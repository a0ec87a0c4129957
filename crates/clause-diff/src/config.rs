//! Engine configuration
//!
//! Every threshold has a default, so an empty TOML document (or no file at
//! all) yields the standard engine behavior.
//!
//! ```toml
//! [matching]
//! materiality_threshold = 0.98
//! acceptance_floor = 0.2
//!
//! [scoring]
//! high = 18
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.matching;
        check_unit("matching.materiality_threshold", m.materiality_threshold)?;
        check_unit("matching.acceptance_floor", m.acceptance_floor)?;
        check_unit("matching.number_match_score", m.number_match_score)?;
        check_unit("matching.title_weight", m.title_weight)?;

        if self.report.excerpt_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "report.excerpt_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Clause matching thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Matched pairs at or above this content similarity are not reported
    #[serde(default = "default_materiality_threshold")]
    pub materiality_threshold: f64,
    /// Weighted score a candidate must exceed to be accepted as a match
    #[serde(default = "default_acceptance_floor")]
    pub acceptance_floor: f64,
    /// Match score recorded for clauses paired by clause number
    #[serde(default = "default_number_match_score")]
    pub number_match_score: f64,
    /// Weight of title similarity; content gets the remainder
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            materiality_threshold: default_materiality_threshold(),
            acceptance_floor: default_acceptance_floor(),
            number_match_score: default_number_match_score(),
            title_weight: default_title_weight(),
        }
    }
}

impl MatchingConfig {
    pub fn content_weight(&self) -> f64 {
        1.0 - self.title_weight
    }
}

fn default_materiality_threshold() -> f64 {
    0.98
}

fn default_acceptance_floor() -> f64 {
    0.2
}

fn default_number_match_score() -> f64 {
    0.9
}

fn default_title_weight() -> f64 {
    0.5
}

/// Base risk points per diff severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_high_points")]
    pub high: u32,
    #[serde(default = "default_medium_points")]
    pub medium: u32,
    #[serde(default = "default_low_points")]
    pub low: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high: default_high_points(),
            medium: default_medium_points(),
            low: default_low_points(),
        }
    }
}

fn default_high_points() -> u32 {
    18
}

fn default_medium_points() -> u32 {
    10
}

fn default_low_points() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum characters of clause text kept in `oldText` / `newText`
    #[serde(default = "default_excerpt_limit")]
    pub excerpt_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            excerpt_limit: default_excerpt_limit(),
        }
    }
}

fn default_excerpt_limit() -> usize {
    800
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a value in [0, 1], found {}", value),
        })
    }
}
