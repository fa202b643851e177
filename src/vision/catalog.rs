//! Vision Type Catalog
//!
//! The color-vision types a user can pick during setup or in settings. The
//! lowercase id is what the profile service stores; the remaining fields are
//! display text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable color-vision type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionType {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
    Achromatopsia,
}

/// Display text for one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct VisionTypeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prevalence: &'static str,
    pub info: Option<&'static str>,
}

// ============================================================================
// EMBEDDED CATALOG
// ============================================================================

static CATALOG: &[VisionTypeInfo] = &[
    VisionTypeInfo {
        id: "normal",
        name: "Normal Color Vision",
        description: "No color vision deficiency",
        prevalence: "Most common",
        info: None,
    },
    VisionTypeInfo {
        id: "protanopia",
        name: "Protanopia",
        description: "Difficulty seeing red colors",
        prevalence: "1% of men",
        info: Some("Protanopia is a type of color blindness where individuals have difficulty distinguishing between red and green colors, specifically lacking the long-wavelength sensitive retinal cones."),
    },
    VisionTypeInfo {
        id: "deuteranopia",
        name: "Deuteranopia",
        description: "Difficulty seeing green colors",
        prevalence: "1% of men",
        info: Some("Deuteranopia is a condition where the medium-wavelength sensitive retinal cones are absent, making it difficult to distinguish between red and green colors."),
    },
    VisionTypeInfo {
        id: "tritanopia",
        name: "Tritanopia",
        description: "Difficulty seeing blue colors",
        prevalence: "Very rare",
        info: Some("Tritanopia is a rare form of color blindness that affects the short-wavelength cones in the retina, resulting in difficulty distinguishing between blue and yellow colors."),
    },
    VisionTypeInfo {
        id: "protanomaly",
        name: "Protanomaly",
        description: "Reduced sensitivity to red light",
        prevalence: "1% of men",
        info: Some("Protanomaly is a mild form of red-green color blindness where red cones are present but have an abnormal sensitivity to light wavelengths."),
    },
    VisionTypeInfo {
        id: "deuteranomaly",
        name: "Deuteranomaly",
        description: "Reduced sensitivity to green light",
        prevalence: "5% of men",
        info: Some("Deuteranomaly is the most common type of color blindness, characterized by a reduced sensitivity to green light due to abnormal green cone photopigments."),
    },
    VisionTypeInfo {
        id: "tritanomaly",
        name: "Tritanomaly",
        description: "Reduced sensitivity to blue light",
        prevalence: "Very rare",
        info: Some("Tritanomaly is a rare condition where the blue cone photopigments have an abnormal sensitivity, resulting in reduced discrimination between blue and green colors and between yellow and red colors."),
    },
    VisionTypeInfo {
        id: "achromatopsia",
        name: "Achromatopsia",
        description: "Complete color blindness",
        prevalence: "Extremely rare",
        info: Some("Achromatopsia is a rare condition characterized by the absence or malfunction of all cone cells in the retina, resulting in the inability to perceive any colors."),
    },
];

impl VisionType {
    pub const ALL: [VisionType; 8] = [
        VisionType::Normal,
        VisionType::Protanopia,
        VisionType::Deuteranopia,
        VisionType::Tritanopia,
        VisionType::Protanomaly,
        VisionType::Deuteranomaly,
        VisionType::Tritanomaly,
        VisionType::Achromatopsia,
    ];

    pub fn info(&self) -> &'static VisionTypeInfo {
        let idx = match self {
            VisionType::Normal => 0,
            VisionType::Protanopia => 1,
            VisionType::Deuteranopia => 2,
            VisionType::Tritanopia => 3,
            VisionType::Protanomaly => 4,
            VisionType::Deuteranomaly => 5,
            VisionType::Tritanomaly => 6,
            VisionType::Achromatopsia => 7,
        };
        &CATALOG[idx]
    }

    pub fn id(&self) -> &'static str {
        self.info().id
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Value accepted by the remote analysis service's `cvd_type` field
    ///
    /// The service simulates deficiencies only, so normal vision has none.
    pub fn analysis_cvd_type(&self) -> Option<&'static str> {
        match self {
            VisionType::Normal => None,
            other => Some(other.display_name()),
        }
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Unknown vision-type id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vision type '{0}'")]
pub struct UnknownVisionType(pub String);

impl FromStr for VisionType {
    type Err = UnknownVisionType;

    /// Accepts the stored id or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VisionType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle) || t.display_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownVisionType(s.to_string()))
    }
}
