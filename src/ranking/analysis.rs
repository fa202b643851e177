//! Analysis service payload
//!
//! Shape of the JSON returned by the remote produce analyzer. Only `analysis`
//! feeds the ranker; the derived images are base64 blobs passed through
//! untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Item location as fractions of the frame, (x1, y1) top-left
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reject coordinates outside [0, 1] and swapped corners
    pub fn validate(&self) -> CoreResult<()> {
        for (axis, value) in [("x1", self.x1), ("y1", self.y1), ("x2", self.x2), ("y2", self.y2)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CoreError::BoundingBoxOutOfRange { axis, value });
            }
        }
        if self.x1 > self.x2 {
            return Err(CoreError::BoundingBoxInverted { axis: "x", low: self.x1, high: self.x2 });
        }
        if self.y1 > self.y2 {
            return Err(CoreError::BoundingBoxInverted { axis: "y", low: self.y1, high: self.y2 });
        }
        Ok(())
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// One detected produce item
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalyzedItem {
    pub item_name: String,
    pub bounding_box: BoundingBox,
    pub ripeness_status: String,
    pub recommendation_score: f64,
    pub justification: String,
}

impl AnalyzedItem {
    pub fn validate(&self) -> CoreResult<()> {
        let score = self.recommendation_score;
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(CoreError::ScoreOutOfRange { item: self.item_name.clone(), score });
        }
        self.bounding_box.validate()
    }
}

/// Derived images, base64 encoded
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisImages {
    pub original: String,
    pub simulated: String,
    pub corrected_for_study: String,
    pub annotated_simulated: String,
    pub annotated_corrected: String,
}

/// Full analyzer response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analysis: Vec<AnalyzedItem>,
    #[serde(default)]
    pub images: AnalysisImages,
    pub cvd_type: String,
}

impl AnalysisResponse {
    /// Parse a response body
    pub fn from_json(json: &str) -> Result<Self> {
        let response: AnalysisResponse = serde_json::from_str(json)
            .with_context(|| "Failed to parse analysis response JSON")?;
        tracing::info!(
            items = response.analysis.len(),
            cvd_type = %response.cvd_type,
            "Parsed analysis response"
        );
        Ok(response)
    }

    /// Load a saved response from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read analysis response: {:?}", path))?;
        Self::from_json(&contents).with_context(|| format!("Invalid analysis response: {:?}", path))
    }

    /// Check every item; the first violation is returned
    pub fn validate(&self) -> CoreResult<()> {
        for item in &self.analysis {
            if let Err(e) = item.validate() {
                tracing::warn!(item = %item.item_name, "Analysis item rejected: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}
