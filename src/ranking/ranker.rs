//! Recommendation ranking
//!
//! Turns one analysis pass into the views shown on the results screen: the
//! items ordered by score, the best picks, and the average score. Inputs are
//! borrowed and never reordered in place.

use serde::Serialize;

use super::analysis::AnalyzedItem;
use super::score_band::SummaryTone;
use crate::config::{RankingConfig, DEFAULT_BEST_PICK_THRESHOLD};

/// Items sorted by score, highest first
///
/// Stable: equal scores keep their input order.
pub fn rank_descending(items: &[AnalyzedItem]) -> Vec<&AnalyzedItem> {
    let mut ordered: Vec<&AnalyzedItem> = items.iter().collect();
    ordered.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
    ordered
}

/// Items scoring at least `threshold`, in the given order
pub fn select_best_picks<'a>(ordered: &[&'a AnalyzedItem], threshold: f64) -> Vec<&'a AnalyzedItem> {
    ordered
        .iter()
        .copied()
        .filter(|item| item.recommendation_score >= threshold)
        .collect()
}

/// Mean score rounded half-up; 0 for an empty list
pub fn average_score(items: &[AnalyzedItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let sum: f64 = items.iter().map(|item| item.recommendation_score).sum();
    let mean = sum / items.len() as f64;
    (mean + 0.5).floor().max(0.0) as u32
}

/// Ranked view of one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView<'a> {
    pub ordered: Vec<&'a AnalyzedItem>,
    pub best_picks: Vec<&'a AnalyzedItem>,
    pub average_score: u32,
    pub tone: SummaryTone,
}

impl RankedView<'_> {
    pub fn item_count(&self) -> usize {
        self.ordered.len()
    }
}

/// Ranker with a configurable best-pick threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRanker {
    best_pick_threshold: f64,
}

impl Default for RecommendationRanker {
    fn default() -> Self {
        Self { best_pick_threshold: DEFAULT_BEST_PICK_THRESHOLD }
    }
}

impl RecommendationRanker {
    pub fn new(config: &RankingConfig) -> Self {
        Self { best_pick_threshold: config.best_pick_threshold }
    }

    pub fn best_pick_threshold(&self) -> f64 {
        self.best_pick_threshold
    }

    pub fn best_picks<'a>(&self, ordered: &[&'a AnalyzedItem]) -> Vec<&'a AnalyzedItem> {
        select_best_picks(ordered, self.best_pick_threshold)
    }

    /// Build every derived view in one pass
    pub fn summarize<'a>(&self, items: &'a [AnalyzedItem]) -> RankedView<'a> {
        let ordered = rank_descending(items);
        let best_picks = self.best_picks(&ordered);
        let average_score = average_score(items);

        tracing::debug!(
            items = items.len(),
            best_picks = best_picks.len(),
            average_score,
            "Ranked analysis items"
        );

        RankedView {
            ordered,
            best_picks,
            average_score,
            tone: SummaryTone::from_average(average_score),
        }
    }
}
