//! Scan history
//!
//! Past scans as stored by the app, with the search, time-window and summary
//! statistics shown on the history screen.

use chrono::{DateTime, Duration, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::utils::relative_age::{parse_timestamp, relative_age};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Excellent => "excellent",
            Freshness::Good => "good",
            Freshness::Fair => "fair",
            Freshness::Poor => "poor",
        }
    }
}

/// One past scan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: String,
    pub user_id: String,
    pub item_name: String,
    pub category: String,
    pub freshness: Freshness,
    /// 0-100
    pub confidence: u8,
    /// RFC 3339
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ScanRecord {
    pub fn scanned_at(&self) -> CoreResult<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    /// "2 hours ago" style label for this scan
    pub fn relative_age(&self, now: DateTime<Utc>) -> CoreResult<String> {
        Ok(relative_age(self.scanned_at()?, now))
    }
}

/// Case-insensitive substring search on item names
pub fn search_scans<'a>(records: &'a [ScanRecord], query: &str) -> Vec<&'a ScanRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.item_name.to_lowercase().contains(&needle))
        .collect()
}

/// History screen time filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    All,
    /// Same UTC calendar day as `now`, or later
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
}

impl TimeWindow {
    pub fn contains(&self, scanned_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            TimeWindow::All => true,
            TimeWindow::Today => scanned_at.date_naive() == now.date_naive() || scanned_at > now,
            TimeWindow::Week => now - scanned_at <= Duration::days(7),
            TimeWindow::Month => now - scanned_at <= Duration::days(30),
        }
    }

    /// Records inside the window; any unparsable timestamp is an error
    pub fn apply<'a>(&self, records: &'a [ScanRecord], now: DateTime<Utc>) -> CoreResult<Vec<&'a ScanRecord>> {
        let mut kept = Vec::new();
        for record in records {
            if self.contains(record.scanned_at()?, now) {
                kept.push(record);
            }
        }
        Ok(kept)
    }
}

/// Summary figures for the history header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total_scans: usize,
    /// Mean confidence rounded half-up, 0 with no scans
    pub average_confidence: u32,
    pub excellent_scans: usize,
    pub freshness_counts: FxHashMap<Freshness, usize>,
}

impl HistoryStats {
    pub fn from_records(records: &[ScanRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut freshness_counts: FxHashMap<Freshness, usize> = FxHashMap::default();
        let mut confidence_sum: u32 = 0;
        for record in records {
            *freshness_counts.entry(record.freshness).or_insert(0) += 1;
            confidence_sum += u32::from(record.confidence);
        }

        let n = records.len() as u32;
        // Integer half-up rounding of sum / n
        let average_confidence = (2 * confidence_sum + n) / (2 * n);

        Self {
            total_scans: records.len(),
            average_confidence,
            excellent_scans: freshness_counts.get(&Freshness::Excellent).copied().unwrap_or(0),
            freshness_counts,
        }
    }
}
