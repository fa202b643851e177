//! Daily shopping tips

use rand::seq::SliceRandom;
use rand::Rng;

pub static DAILY_TIPS: &[&str] = &[
    "Natural lighting gives the best scanning results for color accuracy.",
    "Morning is the best time to shop for the freshest produce selection.",
    "Store apples in the refrigerator to keep them fresh for up to 6 weeks.",
    "Bananas continue to ripen after purchase - buy them at different stages.",
    "Root vegetables like carrots can last weeks when stored properly.",
    "Seasonal produce is often fresher, tastier, and more affordable.",
    "Look for local farmers markets for the freshest seasonal options.",
];

/// Pick one tip at random
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // DAILY_TIPS is a non-empty literal
    DAILY_TIPS.choose(rng).copied().unwrap_or(DAILY_TIPS[0])
}
