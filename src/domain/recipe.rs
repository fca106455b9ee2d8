//! Recipe domain model.
//!
//! This module defines the core [`Recipe`] type representing one dish record from
//! the remote API, along with the [`IngredientLine`] pairs extracted from its
//! fixed ingredient slots. Recipes are read-only: they are owned by the remote
//! source and held transiently in application state between a response arriving
//! and the next request replacing it.

use serde::{Deserialize, Serialize};

/// One dish record from the remote recipe API.
///
/// Search results carry only a subset of these fields (name, category,
/// thumbnail); a lookup by id fills in instructions, source and ingredients.
/// Every field except `id` and `name` may be absent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Remote identifier, also the key stored in the Favorites Set.
    pub id: String,

    /// Display name of the dish.
    pub name: String,

    /// Category name (e.g. "Chicken", "Pasta"). Compared for equality against
    /// the active category filter; a recipe without a category never matches a
    /// non-empty filter.
    pub category: Option<String>,

    /// URL of the dish thumbnail image.
    pub thumbnail: Option<String>,

    /// Free-text cooking instructions.
    pub instructions: Option<String>,

    /// External source link. The detail view falls back to a neutral
    /// placeholder when absent.
    pub source: Option<String>,

    /// Ordered (measure, ingredient) pairs extracted from the record's fixed
    /// slots, blank slots already skipped. Empty for search-result records.
    pub ingredients: Vec<IngredientLine>,
}

/// One (measure, ingredient) pair from a recipe's ingredient slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Quantity text (e.g. "200g"). Empty when the slot carried no measure.
    pub measure: String,

    /// Ingredient name. Never blank: blank slots are dropped during parsing.
    pub name: String,
}

impl IngredientLine {
    /// Formats the pair the way the detail view lists it: `"{measure} {name}"`,
    /// without a leading space when the measure is empty.
    #[must_use]
    pub fn display(&self) -> String {
        if self.measure.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.measure, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IngredientLine;

    #[test]
    fn display_joins_measure_and_name() {
        let line = IngredientLine {
            measure: "200g".to_string(),
            name: "Chicken".to_string(),
        };
        assert_eq!(line.display(), "200g Chicken");
    }

    #[test]
    fn display_omits_empty_measure() {
        let line = IngredientLine {
            measure: String::new(),
            name: "Salt".to_string(),
        };
        assert_eq!(line.display(), "Salt");
    }
}
