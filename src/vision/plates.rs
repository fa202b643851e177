//! Ishihara-style test plates
//!
//! A `PlateBattery` is the ordered, validated set of plates one assessment
//! runs through. The standard battery is embedded; larger batteries can be
//! loaded from JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

use super::deficiency::DeficiencyCategory;
use crate::error::{CoreError, CoreResult};

/// Answer offered on every plate for readers who see nothing
pub const CANNOT_SEE_OPTION: &str = "I can't see a number";

const STANDARD_PROMPT: &str = "What number do you see in this image?";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=250&width=250";

/// One test question
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlate {
    pub id: u32,
    pub prompt: String,
    pub image: String,
    pub options: SmallVec<[String; 4]>,
    pub correct_answer: String,
    pub associated_deficiency: DeficiencyCategory,
}

impl TestPlate {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    fn validate(&self) -> CoreResult<()> {
        if self.options.len() < 2 {
            return Err(CoreError::InvalidPlate {
                plate_id: self.id,
                reason: format!("needs at least 2 options, found {}", self.options.len()),
            });
        }
        if !self.offers(CANNOT_SEE_OPTION) {
            return Err(CoreError::InvalidPlate {
                plate_id: self.id,
                reason: format!("options must include '{}'", CANNOT_SEE_OPTION),
            });
        }
        if !self.offers(&self.correct_answer) {
            return Err(CoreError::InvalidPlate {
                plate_id: self.id,
                reason: format!("correct answer '{}' is not among its options", self.correct_answer),
            });
        }
        Ok(())
    }
}

/// Ordered, non-empty set of valid plates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlateBattery {
    plates: Vec<TestPlate>,
}

impl PlateBattery {
    /// Validate and wrap a list of plates
    pub fn new(plates: Vec<TestPlate>) -> CoreResult<Self> {
        if plates.is_empty() {
            return Err(CoreError::EmptyBattery);
        }
        for plate in &plates {
            plate.validate()?;
        }
        Ok(Self { plates })
    }

    /// Ten-plate battery used by the in-app vision test
    pub fn standard() -> Self {
        let plates = STANDARD_PLATES.iter().map(PlateRow::to_plate).collect();
        Self { plates }
    }

    /// Parse a battery from a JSON array of plates
    pub fn from_json_str(json: &str) -> Result<Self> {
        let plates: Vec<TestPlate> = serde_json::from_str(json)
            .with_context(|| "Failed to parse plate battery JSON")?;
        Ok(Self::new(plates)?)
    }

    /// Load a battery from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plate battery: {:?}", path))?;
        let battery = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid plate battery: {:?}", path))?;
        tracing::info!("Loaded {} plates from {:?}", battery.len(), path);
        Ok(battery)
    }

    pub fn plates(&self) -> &[TestPlate] {
        &self.plates
    }

    pub fn get(&self, index: usize) -> Option<&TestPlate> {
        self.plates.get(index)
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Always false for a constructed battery
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

// ============================================================================
// STANDARD BATTERY
// ============================================================================

struct PlateRow {
    id: u32,
    options: [&'static str; 3],
    correct: &'static str,
    tag: DeficiencyCategory,
}

impl PlateRow {
    fn to_plate(&self) -> TestPlate {
        let mut options: SmallVec<[String; 4]> = self.options.iter().map(|o| o.to_string()).collect();
        options.push(CANNOT_SEE_OPTION.to_string());

        TestPlate {
            id: self.id,
            prompt: STANDARD_PROMPT.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            options,
            correct_answer: self.correct.to_string(),
            associated_deficiency: self.tag,
        }
    }
}

static STANDARD_PLATES: &[PlateRow] = &[
    PlateRow { id: 1, options: ["12", "8", "3"], correct: "12", tag: DeficiencyCategory::RedGreen },
    PlateRow { id: 2, options: ["8", "3", "6"], correct: "8", tag: DeficiencyCategory::RedGreen },
    PlateRow { id: 3, options: ["29", "70", "79"], correct: "29", tag: DeficiencyCategory::RedGreen },
    PlateRow { id: 4, options: ["5", "2", "7"], correct: "5", tag: DeficiencyCategory::Protanopia },
    PlateRow { id: 5, options: ["3", "8", "5"], correct: "3", tag: DeficiencyCategory::Deuteranopia },
    PlateRow { id: 6, options: ["15", "17", "75"], correct: "15", tag: DeficiencyCategory::Tritanopia },
    PlateRow { id: 7, options: ["74", "21", "71"], correct: "74", tag: DeficiencyCategory::Tritanopia },
    PlateRow { id: 8, options: ["42", "4", "2"], correct: "42", tag: DeficiencyCategory::Protanomaly },
    PlateRow { id: 9, options: ["6", "9", "8"], correct: "6", tag: DeficiencyCategory::Deuteranomaly },
    PlateRow { id: 10, options: ["57", "35", "75"], correct: "57", tag: DeficiencyCategory::Normal },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_battery_is_valid() {
        let battery = PlateBattery::standard();
        assert_eq!(battery.len(), 10);
        assert!(PlateBattery::new(battery.plates().to_vec()).is_ok());

        for (i, plate) in battery.plates().iter().enumerate() {
            assert_eq!(plate.id as usize, i + 1);
            assert_eq!(plate.options.len(), 4);
            assert_eq!(plate.options[3], CANNOT_SEE_OPTION);
        }
    }

    #[test]
    fn test_standard_battery_tags() {
        let battery = PlateBattery::standard();
        let red_green = battery
            .plates()
            .iter()
            .filter(|p| p.associated_deficiency == DeficiencyCategory::RedGreen)
            .count();
        assert_eq!(red_green, 3);
        assert_eq!(battery.get(9).unwrap().associated_deficiency, DeficiencyCategory::Normal);
    }

    #[test]
    fn test_empty_battery_rejected() {
        assert_eq!(PlateBattery::new(Vec::new()), Err(CoreError::EmptyBattery));
    }

    #[test]
    fn test_correct_answer_must_be_offered() {
        let mut plate = PlateBattery::standard().plates()[0].clone();
        plate.correct_answer = "99".to_string();

        let err = PlateBattery::new(vec![plate]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPlate { plate_id: 1, .. }));
    }

    #[test]
    fn test_plate_without_cannot_see_option_rejected() {
        let mut plate = PlateBattery::standard().plates()[9].clone();
        plate.options.retain(|o| o.as_str() != CANNOT_SEE_OPTION);
        assert_eq!(plate.options.len(), 3);

        let err = PlateBattery::new(vec![plate]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPlate { plate_id: 10, .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_from_json_rejects_missing_cannot_see_option() {
        let json = r#"[{
            "id": 2, "prompt": "?", "image": "", "options": ["57", "35"],
            "correctAnswer": "57", "associatedDeficiency": "Normal vision"
        }]"#;
        assert!(PlateBattery::from_json_str(json).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": 1,
                "prompt": "What number do you see in this image?",
                "image": "/plates/1.png",
                "options": ["16", "10", "I can't see a number"],
                "correctAnswer": "16",
                "associatedDeficiency": "Tritanopia"
            }
        ]"#;

        let battery = PlateBattery::from_json_str(json).unwrap();
        assert_eq!(battery.len(), 1);
        assert_eq!(battery.plates()[0].associated_deficiency, DeficiencyCategory::Tritanopia);
    }

    #[test]
    fn test_from_json_rejects_unknown_tag() {
        let json = r#"[{
            "id": 1, "prompt": "?", "image": "", "options": ["1", "2", "I can't see a number"],
            "correctAnswer": "1", "associatedDeficiency": "Monochromacy"
        }]"#;
        assert!(PlateBattery::from_json_str(json).is_err());
    }
}
