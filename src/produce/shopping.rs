//! Market shopping list
//!
//! Each edit returns a new `ShoppingList`; the receiver is left untouched.
//! Edits naming an unknown id return an unchanged copy.

use serde::{Deserialize, Serialize};

const DEFAULT_UNIT: &str = "pieces";
const DEFAULT_CATEGORY: &str = "other";

/// One line on the list
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub category: String,
    pub estimated_price: f64,
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Progress card figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoppingProgress {
    pub found_items: usize,
    pub total_items: usize,
    /// Sum of per-line estimated prices
    pub total_estimated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ShoppingList {
    pub fn new(items: Vec<ShoppingItem>) -> Self {
        // New ids continue after the highest numeric id present
        let next_id = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add `quantity` change to an item, clamped at zero; items reaching zero are dropped
    pub fn update_quantity(&self, id: &str, change: i32) -> ShoppingList {
        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id {
                    let quantity = (i64::from(item.quantity) + i64::from(change)).clamp(0, i64::from(u32::MAX));
                    item.quantity = quantity as u32;
                }
                item
            })
            .filter(|item| item.quantity > 0)
            .collect();

        tracing::debug!(id, change, "Shopping quantity updated");
        self.with_items(items)
    }

    pub fn toggle_found(&self, id: &str) -> ShoppingList {
        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id {
                    item.found = !item.found;
                }
                item
            })
            .collect();
        self.with_items(items)
    }

    pub fn remove_item(&self, id: &str) -> ShoppingList {
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        self.with_items(items)
    }

    /// Append a new line: one piece, category "other", no price
    ///
    /// Blank names are ignored.
    pub fn add_item(&self, name: &str) -> ShoppingList {
        if name.trim().is_empty() {
            tracing::debug!("Ignored blank shopping item name");
            return self.clone();
        }

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(ShoppingItem {
            id: self.next_id.to_string(),
            name: name.to_string(),
            quantity: 1,
            unit: DEFAULT_UNIT.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            estimated_price: 0.0,
            found: false,
            notes: None,
        });

        tracing::debug!(id = self.next_id, name, "Shopping item added");
        ShoppingList { items, next_id: self.next_id + 1 }
    }

    pub fn found_items(&self) -> usize {
        self.items.iter().filter(|item| item.found).count()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_estimated(&self) -> f64 {
        self.items.iter().map(|item| item.estimated_price).sum()
    }

    pub fn progress(&self) -> ShoppingProgress {
        ShoppingProgress {
            found_items: self.found_items(),
            total_items: self.total_items(),
            total_estimated: self.total_estimated(),
        }
    }

    fn with_items(&self, items: Vec<ShoppingItem>) -> ShoppingList {
        ShoppingList { items, next_id: self.next_id }
    }
}
