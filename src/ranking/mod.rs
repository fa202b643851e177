//! Produce recommendation ranking
//!
//! Consumes the item list returned by the remote analyzer and derives the
//! sorted, summarized and positional views.

pub mod analysis;
pub mod position;
pub mod ranker;
pub mod score_band;

pub use analysis::{AnalysisImages, AnalysisResponse, AnalyzedItem, BoundingBox};
pub use position::{describe_position, HorizontalBand, Placement, VerticalBand};
pub use ranker::{average_score, rank_descending, select_best_picks, RankedView, RecommendationRanker};
pub use score_band::{ScoreBand, ScoreTrend, SummaryTone};
