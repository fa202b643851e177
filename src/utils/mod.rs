//! Time and season utilities
//!
//! Pure functions shared by the history and produce views:
//! - Relative age: "2 hours ago" style labels
//! - Season: calendar season of a date and seasonal filtering

pub mod relative_age;
pub mod season;

pub use relative_age::{parse_timestamp, relative_age, relative_age_str};
pub use season::{current_season, filter_by_season, season_for_month_index, Season, SeasonTag, Seasonal};
