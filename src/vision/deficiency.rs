//! Deficiency categories and assessment outcomes
//!
//! Two closed sets live here:
//! - `DeficiencyCategory`: the tag carried by each plate
//! - `VisionProfile`: the label a finished assessment produces
//!
//! They differ in one place. Plates are tagged "Normal vision" when any
//! reader should get them right, while the outcome for a low error count is
//! "Normal Color Vision".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::VisionType;

/// Deficiency a plate is designed to expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DeficiencyCategory {
    /// Red-green plate that cannot tell the two dichromacies apart
    #[serde(rename = "Deuteranopia/Protanopia")]
    RedGreen,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Protanomaly,
    Deuteranomaly,
    /// Control plate readable with any color vision
    #[serde(rename = "Normal vision")]
    Normal,
}

impl DeficiencyCategory {
    /// All categories in tally order. Earlier entries win ties.
    pub const ALL: [DeficiencyCategory; 7] = [
        DeficiencyCategory::RedGreen,
        DeficiencyCategory::Protanopia,
        DeficiencyCategory::Deuteranopia,
        DeficiencyCategory::Tritanopia,
        DeficiencyCategory::Protanomaly,
        DeficiencyCategory::Deuteranomaly,
        DeficiencyCategory::Normal,
    ];

    /// Position in [`DeficiencyCategory::ALL`]
    pub const fn index(self) -> usize {
        match self {
            DeficiencyCategory::RedGreen => 0,
            DeficiencyCategory::Protanopia => 1,
            DeficiencyCategory::Deuteranopia => 2,
            DeficiencyCategory::Tritanopia => 3,
            DeficiencyCategory::Protanomaly => 4,
            DeficiencyCategory::Deuteranomaly => 5,
            DeficiencyCategory::Normal => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeficiencyCategory::RedGreen => "Deuteranopia/Protanopia",
            DeficiencyCategory::Protanopia => "Protanopia",
            DeficiencyCategory::Deuteranopia => "Deuteranopia",
            DeficiencyCategory::Tritanopia => "Tritanopia",
            DeficiencyCategory::Protanomaly => "Protanomaly",
            DeficiencyCategory::Deuteranomaly => "Deuteranomaly",
            DeficiencyCategory::Normal => "Normal vision",
        }
    }

    /// Outcome suggested when this category collects the most errors
    pub fn suspected_profile(self) -> VisionProfile {
        match self {
            DeficiencyCategory::RedGreen => VisionProfile::RedGreenUnresolved,
            DeficiencyCategory::Protanopia => VisionProfile::Protanopia,
            DeficiencyCategory::Deuteranopia => VisionProfile::Deuteranopia,
            DeficiencyCategory::Tritanopia => VisionProfile::Tritanopia,
            DeficiencyCategory::Protanomaly => VisionProfile::Protanomaly,
            DeficiencyCategory::Deuteranomaly => VisionProfile::Deuteranomaly,
            DeficiencyCategory::Normal => VisionProfile::NormalColorVision,
        }
    }
}

impl fmt::Display for DeficiencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most probable color vision of a respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VisionProfile {
    #[serde(rename = "Normal Color Vision")]
    NormalColorVision,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Protanomaly,
    Deuteranomaly,
    /// Red-green errors without a protan/deutan majority
    #[serde(rename = "Deuteranopia/Protanopia")]
    RedGreenUnresolved,
}

impl VisionProfile {
    pub fn label(&self) -> &'static str {
        match self {
            VisionProfile::NormalColorVision => "Normal Color Vision",
            VisionProfile::Protanopia => "Protanopia",
            VisionProfile::Deuteranopia => "Deuteranopia",
            VisionProfile::Tritanopia => "Tritanopia",
            VisionProfile::Protanomaly => "Protanomaly",
            VisionProfile::Deuteranomaly => "Deuteranomaly",
            VisionProfile::RedGreenUnresolved => "Deuteranopia/Protanopia",
        }
    }

    /// Result text shown alongside the label
    pub fn description(&self) -> &'static str {
        match self {
            VisionProfile::NormalColorVision => {
                "You have normal color vision. The app will still enhance colors to make produce selection easier."
            }
            VisionProfile::Deuteranopia => {
                "You may have deuteranopia, which affects green color perception. We'll optimize the app for your vision type."
            }
            VisionProfile::Protanopia => {
                "You may have protanopia, which affects red color perception. We'll optimize the app for your vision type."
            }
            VisionProfile::Tritanopia => {
                "You may have tritanopia, which affects blue color perception. We'll optimize the app for your vision type."
            }
            VisionProfile::Deuteranomaly => {
                "You may have deuteranomaly, a mild form of green color blindness. We'll optimize the app for your vision type."
            }
            VisionProfile::Protanomaly => {
                "You may have protanomaly, a mild form of red color blindness. We'll optimize the app for your vision type."
            }
            VisionProfile::RedGreenUnresolved => {
                "Based on your responses, we'll customize the app to enhance your color perception."
            }
        }
    }

    /// Matching entry of the vision-type catalog, if there is exactly one
    pub fn vision_type(&self) -> Option<VisionType> {
        match self {
            VisionProfile::NormalColorVision => Some(VisionType::Normal),
            VisionProfile::Protanopia => Some(VisionType::Protanopia),
            VisionProfile::Deuteranopia => Some(VisionType::Deuteranopia),
            VisionProfile::Tritanopia => Some(VisionType::Tritanopia),
            VisionProfile::Protanomaly => Some(VisionType::Protanomaly),
            VisionProfile::Deuteranomaly => Some(VisionType::Deuteranomaly),
            VisionProfile::RedGreenUnresolved => None,
        }
    }
}

impl fmt::Display for VisionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
