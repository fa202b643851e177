//! Produce catalog and explore filtering

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::utils::season::{current_season, filter_by_season, Season, SeasonTag, Seasonal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProduceCategory {
    Fruits,
    Vegetables,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    #[serde(rename = "vitamin")]
    pub vitamins: Vec<String>,
    pub minerals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceItem {
    pub id: String,
    pub name: String,
    pub category: ProduceCategory,
    #[serde(rename = "season")]
    pub seasons: SmallVec<[SeasonTag; 4]>,
    pub description: String,
    pub selection_tips: Vec<String>,
    pub nutritional_info: NutritionalInfo,
    pub image: String,
}

impl Seasonal for ProduceItem {
    fn season_tags(&self) -> &[SeasonTag] {
        &self.seasons
    }
}

// ============================================================================
// EMBEDDED CATALOG
// ============================================================================

struct ProduceRow {
    id: &'static str,
    name: &'static str,
    category: ProduceCategory,
    seasons: &'static [SeasonTag],
    description: &'static str,
    tips: &'static [&'static str],
    calories: u32,
    vitamins: &'static [&'static str],
    minerals: &'static [&'static str],
}

impl ProduceRow {
    fn to_item(&self) -> ProduceItem {
        ProduceItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            seasons: self.seasons.iter().copied().collect(),
            description: self.description.to_string(),
            selection_tips: owned(self.tips),
            nutritional_info: NutritionalInfo {
                calories: self.calories,
                vitamins: owned(self.vitamins),
                minerals: owned(self.minerals),
            },
            image: format!("/placeholder.svg?height=200&width=200&text={}", self.name),
        }
    }
}

fn owned(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

static PRODUCE_ROWS: &[ProduceRow] = &[
    ProduceRow {
        id: "1",
        name: "Apple",
        category: ProduceCategory::Fruits,
        seasons: &[SeasonTag::Fall, SeasonTag::Winter],
        description: "Crisp, sweet fruit rich in fiber and vitamin C",
        tips: &[
            "Look for firm, smooth skin",
            "Avoid soft spots or wrinkles",
            "Should feel heavy for its size",
            "Stem area should be fresh, not dark",
        ],
        calories: 95,
        vitamins: &["Vitamin C", "Vitamin K"],
        minerals: &["Potassium", "Manganese"],
    },
    ProduceRow {
        id: "2",
        name: "Banana",
        category: ProduceCategory::Fruits,
        seasons: &[SeasonTag::YearRound],
        description: "Potassium-rich fruit perfect for energy",
        tips: &[
            "Yellow with small brown spots for immediate eating",
            "Green tips for eating in 2-3 days",
            "Avoid completely brown bananas unless for baking",
            "Should yield slightly to pressure",
        ],
        calories: 105,
        vitamins: &["Vitamin B6", "Vitamin C"],
        minerals: &["Potassium", "Manganese"],
    },
    ProduceRow {
        id: "3",
        name: "Carrot",
        category: ProduceCategory::Vegetables,
        seasons: &[SeasonTag::Fall, SeasonTag::Winter, SeasonTag::Spring],
        description: "Orange root vegetable high in beta-carotene",
        tips: &[
            "Should be firm and bright orange",
            "Avoid carrots that are soft or bendy",
            "Green tops should look fresh if attached",
            "Smaller carrots are often sweeter",
        ],
        calories: 25,
        vitamins: &["Vitamin A", "Vitamin K"],
        minerals: &["Potassium", "Biotin"],
    },
];

/// Built-in produce catalog
pub fn produce_catalog() -> Vec<ProduceItem> {
    PRODUCE_ROWS.iter().map(ProduceRow::to_item).collect()
}

pub fn find_produce<'a>(items: &'a [ProduceItem], id: &str) -> Option<&'a ProduceItem> {
    items.iter().find(|item| item.id == id)
}

/// Produce available in the season of `date`
pub fn seasonal_produce<'a, D: Datelike>(items: &'a [ProduceItem], date: &D) -> Vec<&'a ProduceItem> {
    filter_by_season(items, current_season(date))
}

/// Explore screen filter: search text, category and season combined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreFilter {
    pub search: String,
    /// `None` matches every category
    pub category: Option<ProduceCategory>,
    /// Selected season chip; `YearRound` keeps only year-round items
    pub season: SeasonTag,
}

impl ExploreFilter {
    pub fn for_season(season: Season) -> Self {
        Self { search: String::new(), category: None, season: season.into() }
    }

    pub fn matches(&self, item: &ProduceItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = item.name.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| item.category == c);
        matches_search && matches_category && item.has_season_tag(self.season)
    }

    pub fn apply<'a>(&self, items: &'a [ProduceItem]) -> Vec<&'a ProduceItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
