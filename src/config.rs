//! Tunable parameters for assessment and ranking
//!
//! Defaults reproduce the shipped behaviour: two misread plates are still
//! treated as normal vision, and items scoring 70 or more count as best picks.
//! A JSON file may override either section; missing fields fall back to the
//! defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Incorrect answers tolerated before a deficiency is suggested
pub const NORMAL_VISION_TOLERANCE: u32 = 2;

/// Minimum recommendation score for a best pick
pub const DEFAULT_BEST_PICK_THRESHOLD: f64 = 70.0;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoreConfig {
    pub assessment: AssessmentConfig,
    pub ranking: RankingConfig,
}

/// Vision assessment parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Sessions with at most this many incorrect answers classify as normal
    pub normal_tolerance: u32,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self { normal_tolerance: NORMAL_VISION_TOLERANCE }
    }
}

/// Recommendation ranking parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingConfig {
    pub best_pick_threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { best_pick_threshold: DEFAULT_BEST_PICK_THRESHOLD }
    }
}

impl CoreConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        tracing::info!(
            normal_tolerance = config.assessment.normal_tolerance,
            best_pick_threshold = config.ranking.best_pick_threshold,
            "Loaded core configuration"
        );

        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CoreConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.ranking.best_pick_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            anyhow::bail!("best_pick_threshold {} is outside 0-100", threshold);
        }
        Ok(())
    }
}
