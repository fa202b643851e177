//! Calendar seasons and seasonal filtering
//!
//! Seasons follow the northern-hemisphere meteorological split on the
//! 0-based month index: 2-4 spring, 5-7 summer, 8-10 fall, otherwise winter.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability tag carried by catalog items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonTag {
    Spring,
    Summer,
    Fall,
    Winter,
    YearRound,
}

impl SeasonTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonTag::Spring => "spring",
            SeasonTag::Summer => "summer",
            SeasonTag::Fall => "fall",
            SeasonTag::Winter => "winter",
            SeasonTag::YearRound => "year-round",
        }
    }
}

impl From<Season> for SeasonTag {
    fn from(season: Season) -> Self {
        match season {
            Season::Spring => SeasonTag::Spring,
            Season::Summer => SeasonTag::Summer,
            Season::Fall => SeasonTag::Fall,
            Season::Winter => SeasonTag::Winter,
        }
    }
}

/// Anything tagged with the seasons it is available in
pub trait Seasonal {
    fn season_tags(&self) -> &[SeasonTag];

    /// Tagged with `wanted` or with year-round
    fn has_season_tag(&self, wanted: SeasonTag) -> bool {
        self.season_tags()
            .iter()
            .any(|tag| *tag == wanted || *tag == SeasonTag::YearRound)
    }

    fn in_season(&self, season: Season) -> bool {
        self.has_season_tag(SeasonTag::from(season))
    }
}

/// Season for a 0-based month index (January = 0)
pub fn season_for_month_index(month0: u32) -> Season {
    match month0 {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Fall,
        _ => Season::Winter,
    }
}

/// Season of a date; only the month is read
pub fn current_season<D: Datelike>(date: &D) -> Season {
    season_for_month_index(date.month0())
}

/// Items available in `season`, original order kept
pub fn filter_by_season<T: Seasonal>(items: &[T], season: Season) -> Vec<&T> {
    items.iter().filter(|item| item.in_season(season)).collect()
}
