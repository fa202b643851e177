// Vision assessment integration tests
//
// Purpose: Run whole sessions through the public API and check the classification
// Run with: cargo test --test vision_assessment

use robopick_core::config::AssessmentConfig;
use robopick_core::vision::{
    classify, classify_with, DeficiencyCategory, PlateBattery, SessionStage, TestPlate, TestSession,
    VisionProfile, VisionType, CANNOT_SEE_OPTION,
};
use robopick_core::{CoreError, ErrorKind};
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn plate(id: u32, tag: DeficiencyCategory) -> TestPlate {
    TestPlate {
        id,
        prompt: "What number do you see in this image?".to_string(),
        image: format!("/plates/{}.png", id),
        options: ["12", "21", CANNOT_SEE_OPTION].iter().map(|o| o.to_string()).collect(),
        correct_answer: "12".to_string(),
        associated_deficiency: tag,
    }
}

/// Battery with `count` plates for each listed tag, in order
fn battery(layout: &[(DeficiencyCategory, usize)]) -> Arc<PlateBattery> {
    let mut plates = Vec::new();
    for &(tag, count) in layout {
        for _ in 0..count {
            plates.push(plate(plates.len() as u32 + 1, tag));
        }
    }
    Arc::new(PlateBattery::new(plates).unwrap())
}

/// Answer every plate, missing those whose tag satisfies `miss`
fn run(battery: Arc<PlateBattery>, miss: impl Fn(&TestPlate) -> bool) -> TestSession {
    let mut session = TestSession::new(battery);
    while let Some(current) = session.current_plate() {
        let answer = if miss(current) {
            CANNOT_SEE_OPTION.to_string()
        } else {
            current.correct_answer.clone()
        };
        session = session.advance(&answer).unwrap();
    }
    session
}

// ============================================================================
// Classification scenarios
// ============================================================================

#[test]
fn test_three_deuteranopia_misses_on_ten_plates() {
    let battery = battery(&[
        (DeficiencyCategory::RedGreen, 2),
        (DeficiencyCategory::Deuteranopia, 3),
        (DeficiencyCategory::Protanopia, 1),
        (DeficiencyCategory::Tritanopia, 1),
        (DeficiencyCategory::Protanomaly, 1),
        (DeficiencyCategory::Deuteranomaly, 1),
        (DeficiencyCategory::Normal, 1),
    ]);
    assert_eq!(battery.len(), 10);

    let session = run(battery, |p| p.associated_deficiency == DeficiencyCategory::Deuteranopia);
    let result = classify(&session).unwrap();

    assert_eq!(result.profile, VisionProfile::Deuteranopia);
    assert_eq!(result.total_incorrect, 3);
    assert_eq!(result.correct_answers, 7);
    assert_eq!(result.summary(), "You answered 7 out of 10 questions correctly.");
    assert_eq!(result.profile.vision_type(), Some(VisionType::Deuteranopia));
}

#[test]
fn test_equal_protan_deutan_keeps_combined_label() {
    let battery = battery(&[
        (DeficiencyCategory::RedGreen, 3),
        (DeficiencyCategory::Protanopia, 3),
        (DeficiencyCategory::Deuteranopia, 3),
        (DeficiencyCategory::Normal, 1),
    ]);
    let session = run(battery, |p| p.associated_deficiency != DeficiencyCategory::Normal);
    let result = classify(&session).unwrap();

    assert_eq!(result.profile, VisionProfile::RedGreenUnresolved);
    assert_eq!(result.profile_key(), "Deuteranopia/Protanopia");
    assert_eq!(result.total_incorrect, 9);
    assert_eq!(result.profile.vision_type(), None);
}

#[test]
fn test_four_to_three_split_picks_higher() {
    let battery = battery(&[
        (DeficiencyCategory::RedGreen, 4),
        (DeficiencyCategory::Protanopia, 4),
        (DeficiencyCategory::Deuteranopia, 3),
    ]);
    let session = run(battery, |_| true);
    let result = classify(&session).unwrap();

    assert_eq!(result.profile, VisionProfile::Protanopia);
    assert_eq!(result.tally.get(DeficiencyCategory::RedGreen), 4);
    assert_eq!(result.tally.get(DeficiencyCategory::Protanopia), 4);
    assert_eq!(result.tally.get(DeficiencyCategory::Deuteranopia), 3);
}

#[test]
fn test_concentrated_misses_return_that_category() {
    for tag in [
        DeficiencyCategory::Protanopia,
        DeficiencyCategory::Deuteranopia,
        DeficiencyCategory::Tritanopia,
        DeficiencyCategory::Protanomaly,
        DeficiencyCategory::Deuteranomaly,
    ] {
        let battery = battery(&[(DeficiencyCategory::Normal, 2), (tag, 4)]);
        let session = run(battery, |p| p.associated_deficiency == tag);
        let result = classify(&session).unwrap();
        assert_eq!(result.profile, tag.suspected_profile(), "tag {}", tag);
    }
}

#[test]
fn test_two_misses_is_normal_on_standard_battery() {
    let session = run(Arc::new(PlateBattery::standard()), |p| p.id == 1 || p.id == 6);
    let result = classify(&session).unwrap();

    assert_eq!(result.profile, VisionProfile::NormalColorVision);
    assert_eq!(result.total_incorrect, 2);
    assert_eq!(result.correct_answers, 8);
}

#[test]
fn test_stricter_tolerance() {
    let session = run(Arc::new(PlateBattery::standard()), |p| p.id == 6 || p.id == 7);

    assert_eq!(classify(&session).unwrap().profile, VisionProfile::NormalColorVision);

    let strict = AssessmentConfig { normal_tolerance: 0 };
    assert_eq!(classify_with(&session, &strict).unwrap().profile, VisionProfile::Tritanopia);
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn test_session_lifecycle_and_errors() {
    let start = TestSession::standard();
    assert_eq!(start.stage(), SessionStage::NotStarted);

    let err = classify(&start).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let err = start.advance("not an option").unwrap_err();
    assert!(matches!(err, CoreError::OptionNotOffered { plate_id: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let second = start.advance("12").unwrap();
    assert_eq!(second.stage(), SessionStage::InProgress);
    // Earlier snapshot is untouched
    assert!(start.answers().is_empty());
    assert_eq!(second.answers(), ["12".to_string()]);

    let done = run(Arc::clone(start.battery()), |_| false);
    assert_eq!(done.stage(), SessionStage::Complete);
    assert_eq!(done.advance("12").unwrap_err(), CoreError::SessionComplete { total: 10 });
}

#[test]
fn test_battery_from_json() {
    let json = r#"[
        {
            "id": 1,
            "prompt": "What number do you see?",
            "image": "/plates/1.png",
            "options": ["8", "3", "I can't see a number"],
            "correctAnswer": "8",
            "associatedDeficiency": "Deuteranopia/Protanopia"
        },
        {
            "id": 2,
            "prompt": "What number do you see?",
            "image": "/plates/2.png",
            "options": ["57", "35", "I can't see a number"],
            "correctAnswer": "57",
            "associatedDeficiency": "Normal vision"
        }
    ]"#;
    let battery = PlateBattery::from_json_str(json).unwrap();
    assert_eq!(battery.len(), 2);
    assert_eq!(battery.plates()[0].associated_deficiency, DeficiencyCategory::RedGreen);

    let session = run(Arc::new(battery), |_| false);
    assert_eq!(classify(&session).unwrap().profile, VisionProfile::NormalColorVision);
}

#[test]
fn test_battery_json_rejects_bad_plate() {
    let json = r#"[
        {
            "id": 1,
            "prompt": "What number do you see?",
            "image": "/plates/1.png",
            "options": ["8", "3", "I can't see a number"],
            "correctAnswer": "5",
            "associatedDeficiency": "Protanopia"
        }
    ]"#;
    assert!(PlateBattery::from_json_str(json).is_err());
    assert!(PlateBattery::from_json_str("[]").is_err());
}

#[test]
fn test_battery_requires_cannot_see_option() {
    let mut bare = plate(1, DeficiencyCategory::Normal);
    bare.options = ["57", "35"].iter().map(|o| o.to_string()).collect();
    bare.correct_answer = "57".to_string();

    let err = PlateBattery::new(vec![bare]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPlate { plate_id: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
