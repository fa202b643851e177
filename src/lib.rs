//! RoboPick client-side inference core
//!
//! Pure decision logic behind the RoboPick shopping assistant:
//! - `vision/`: Ishihara-style color-vision self-assessment and classification
//! - `ranking/`: ordering and summarizing the produce analyzer's recommendations
//! - `produce/`: produce catalog, scan history, shopping list and daily tips
//! - `utils/`: relative-age labels and seasonal filtering
//!
//! Camera capture, the remote analyzer and profile storage live outside this
//! crate; it only consumes their data.

pub mod config;
pub mod error;
pub mod produce;
pub mod ranking;
pub mod utils;
pub mod vision;

// Re-export commonly used types
pub use config::{AssessmentConfig, CoreConfig, RankingConfig};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use ranking::{describe_position, AnalysisResponse, AnalyzedItem, BoundingBox, RankedView, RecommendationRanker};
pub use utils::{current_season, relative_age, Season};
pub use vision::{classify, DeficiencyCategory, DeficiencyClassification, PlateBattery, TestSession, VisionProfile};
