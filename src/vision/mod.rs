//! Color-vision self-assessment
//!
//! - `plates`: plate definitions and the standard battery
//! - `session`: immutable session snapshots advanced one answer at a time
//! - `classifier`: error tally and deficiency classification
//! - `deficiency`: plate tags and assessment outcomes
//! - `catalog`: user-selectable vision types

pub mod catalog;
pub mod classifier;
pub mod deficiency;
pub mod plates;
pub mod session;

pub use catalog::{UnknownVisionType, VisionType, VisionTypeInfo};
pub use classifier::{classify, classify_with, DeficiencyClassification, IncorrectTally};
pub use deficiency::{DeficiencyCategory, VisionProfile};
pub use plates::{PlateBattery, TestPlate, CANNOT_SEE_OPTION};
pub use session::{SessionStage, TestSession};
