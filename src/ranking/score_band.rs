//! Score interpretation bands
//!
//! Display bands for a single recommendation score and for the scan average.

use serde::Serialize;

/// Quality band of one score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 60.0 => ScoreBand::Good,
            s if s >= 40.0 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    /// Palette color used by the result cards
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "green",
            ScoreBand::Good => "yellow",
            ScoreBand::Fair => "orange",
            ScoreBand::Poor => "red",
        }
    }
}

/// Trend arrow next to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    Rising,
    Steady,
    Falling,
}

impl ScoreTrend {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreTrend::Rising,
            s if s >= 40.0 => ScoreTrend::Steady,
            _ => ScoreTrend::Falling,
        }
    }
}

/// Overall tone of a scan, from its average score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    Favorable,
    Mixed,
    Unfavorable,
}

impl SummaryTone {
    pub fn from_average(average: u32) -> Self {
        match average {
            a if a >= 70 => SummaryTone::Favorable,
            a if a >= 50 => SummaryTone::Mixed,
            _ => SummaryTone::Unfavorable,
        }
    }
}
