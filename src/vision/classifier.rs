//! Deficiency classification from a completed session
//!
//! Algorithm:
//! 1. Mark each plate correct when the answer equals its expected answer
//! 2. Tally incorrect answers by the plate's deficiency category
//! 3. Total incorrect <= tolerance (default 2) → Normal Color Vision
//! 4. Otherwise the non-normal category with the strictly highest tally wins,
//!    earlier categories in tally order keep ties
//! 5. A red-green winner is resolved by the dedicated Protanopia and
//!    Deuteranopia tallies; equal tallies keep the combined label

use serde::Serialize;

use super::deficiency::{DeficiencyCategory, VisionProfile};
use super::session::TestSession;
use crate::config::AssessmentConfig;
use crate::error::{CoreError, CoreResult};

/// Incorrect answers per deficiency category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IncorrectTally {
    counts: [u32; DeficiencyCategory::ALL.len()],
}

impl IncorrectTally {
    pub fn record(&mut self, category: DeficiencyCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: DeficiencyCategory) -> u32 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Non-normal category with the strictly highest count
    ///
    /// Returns `None` when no deficiency plate was missed.
    pub fn dominant(&self) -> Option<DeficiencyCategory> {
        let mut best: Option<(DeficiencyCategory, u32)> = None;
        for category in DeficiencyCategory::ALL {
            if category == DeficiencyCategory::Normal {
                continue;
            }
            let count = self.get(category);
            let current = best.map_or(0, |(_, c)| c);
            if count > current {
                best = Some((category, count));
            }
        }
        best.map(|(category, _)| category)
    }

    /// (category, count) pairs in tally order
    pub fn iter(&self) -> impl Iterator<Item = (DeficiencyCategory, u32)> + '_ {
        DeficiencyCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Outcome of a vision assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeficiencyClassification {
    pub profile: VisionProfile,
    pub description: &'static str,
    pub total_incorrect: u32,
    pub correct_answers: usize,
    pub total_plates: usize,
    #[serde(skip)]
    pub tally: IncorrectTally,
}

impl DeficiencyClassification {
    /// Opaque string stored by the profile service
    pub fn profile_key(&self) -> &'static str {
        self.profile.label()
    }

    /// "You answered N out of M questions correctly."
    pub fn summary(&self) -> String {
        format!(
            "You answered {} out of {} questions correctly.",
            self.correct_answers, self.total_plates
        )
    }
}

/// Classify a completed session with the default tolerance
pub fn classify(session: &TestSession) -> CoreResult<DeficiencyClassification> {
    classify_with(session, &AssessmentConfig::default())
}

/// Classify a completed session
pub fn classify_with(
    session: &TestSession,
    config: &AssessmentConfig,
) -> CoreResult<DeficiencyClassification> {
    if !session.is_complete() {
        return Err(CoreError::SessionIncomplete {
            answered: session.answers().len(),
            total: session.total_plates(),
        });
    }

    let mut tally = IncorrectTally::default();
    for (answer, plate) in session.answers().iter().zip(session.plates()) {
        if !plate.is_correct(answer) {
            tally.record(plate.associated_deficiency);
        }
    }

    let total_incorrect = tally.total();
    let profile = if total_incorrect <= config.normal_tolerance {
        VisionProfile::NormalColorVision
    } else {
        match tally.dominant() {
            Some(DeficiencyCategory::RedGreen) => resolve_red_green(&tally),
            Some(category) => category.suspected_profile(),
            // Every miss was on a control plate
            None => VisionProfile::NormalColorVision,
        }
    };

    tracing::debug!(
        total_incorrect,
        red_green = tally.get(DeficiencyCategory::RedGreen),
        protanopia = tally.get(DeficiencyCategory::Protanopia),
        deuteranopia = tally.get(DeficiencyCategory::Deuteranopia),
        profile = profile.label(),
        "Session classified"
    );

    Ok(DeficiencyClassification {
        profile,
        description: profile.description(),
        total_incorrect,
        correct_answers: session.correct_count(),
        total_plates: session.total_plates(),
        tally,
    })
}

fn resolve_red_green(tally: &IncorrectTally) -> VisionProfile {
    let protan = tally.get(DeficiencyCategory::Protanopia);
    let deutan = tally.get(DeficiencyCategory::Deuteranopia);

    match deutan.cmp(&protan) {
        std::cmp::Ordering::Greater => VisionProfile::Deuteranopia,
        std::cmp::Ordering::Less => VisionProfile::Protanopia,
        std::cmp::Ordering::Equal => VisionProfile::RedGreenUnresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::plates::CANNOT_SEE_OPTION;

    /// Run the standard battery, missing the plates whose ids are listed
    fn run_standard(wrong_ids: &[u32]) -> TestSession {
        let mut session = TestSession::standard();
        while let Some(plate) = session.current_plate() {
            let answer = if wrong_ids.contains(&plate.id) {
                CANNOT_SEE_OPTION.to_string()
            } else {
                plate.correct_answer.clone()
            };
            session = session.advance(&answer).unwrap();
        }
        session
    }

    #[test]
    fn test_all_correct_is_normal() {
        let result = classify(&run_standard(&[])).unwrap();
        assert_eq!(result.profile, VisionProfile::NormalColorVision);
        assert_eq!(result.total_incorrect, 0);
        assert_eq!(result.correct_answers, 10);
    }

    #[test]
    fn test_two_errors_tolerated() {
        // Both tritan plates wrong, still within tolerance
        let result = classify(&run_standard(&[6, 7])).unwrap();
        assert_eq!(result.profile, VisionProfile::NormalColorVision);
        assert_eq!(result.total_incorrect, 2);
        assert_eq!(result.tally.get(DeficiencyCategory::Tritanopia), 2);
    }

    #[test]
    fn test_red_green_without_dedicated_errors_stays_combined() {
        let result = classify(&run_standard(&[1, 2, 3])).unwrap();
        assert_eq!(result.profile, VisionProfile::RedGreenUnresolved);
        assert_eq!(result.profile_key(), "Deuteranopia/Protanopia");
        assert_eq!(
            result.description,
            "Based on your responses, we'll customize the app to enhance your color perception."
        );
    }

    #[test]
    fn test_red_green_resolved_by_dedicated_plate() {
        // 3 combined + 1 protan plate missed
        let result = classify(&run_standard(&[1, 2, 3, 4])).unwrap();
        assert_eq!(result.profile, VisionProfile::Protanopia);

        let result = classify(&run_standard(&[1, 2, 3, 5])).unwrap();
        assert_eq!(result.profile, VisionProfile::Deuteranopia);
    }

    #[test]
    fn test_highest_category_wins() {
        // Tritanopia 2, Protanomaly 1, Normal 1 → total 4
        let result = classify(&run_standard(&[6, 7, 8, 10])).unwrap();
        assert_eq!(result.profile, VisionProfile::Tritanopia);
    }

    #[test]
    fn test_earlier_category_wins_tie() {
        // Protanopia 1, Deuteranopia 1, Deuteranomaly 1 → Protanopia comes first
        let result = classify(&run_standard(&[4, 5, 9])).unwrap();
        assert_eq!(result.profile, VisionProfile::Protanopia);
    }

    #[test]
    fn test_control_plate_counts_toward_total() {
        // Normal-tagged miss pushes total past tolerance; Protanomaly dominates
        let result = classify(&run_standard(&[8, 10, 9])).unwrap();
        assert_eq!(result.total_incorrect, 3);
        assert_eq!(result.profile, VisionProfile::Protanomaly);
    }

    #[test]
    fn test_incomplete_session_rejected() {
        let session = TestSession::standard().advance("12").unwrap();
        let err = classify(&session).unwrap_err();
        assert_eq!(err, CoreError::SessionIncomplete { answered: 1, total: 10 });
    }

    #[test]
    fn test_custom_tolerance() {
        let config = AssessmentConfig { normal_tolerance: 0 };
        let result = classify_with(&run_standard(&[6]), &config).unwrap();
        assert_eq!(result.profile, VisionProfile::Tritanopia);
    }

    #[test]
    fn test_dominant_none_when_only_control_missed() {
        let mut tally = IncorrectTally::default();
        tally.record(DeficiencyCategory::Normal);
        tally.record(DeficiencyCategory::Normal);
        tally.record(DeficiencyCategory::Normal);
        assert_eq!(tally.dominant(), None);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_summary_text() {
        let result = classify(&run_standard(&[1, 2, 3])).unwrap();
        assert_eq!(result.summary(), "You answered 7 out of 10 questions correctly.");
    }
}
