//! Response envelopes and JSON decoding.
//!
//! This module decodes the remote API's JSON payloads into domain records. Every
//! endpoint answers with a single-field envelope (`meals` or `categories`) whose
//! array may be JSON `null` or absent entirely; both mean "no results" and
//! decode to an empty sequence, never an error.
//!
//! Meal records carry their ingredient list in twenty fixed, individually named
//! slot fields (`strIngredient1`..`strIngredient20` paired with
//! `strMeasure1`..`strMeasure20`). The slots are scanned in order with a bounded
//! iteration; a slot is kept only when its ingredient is non-blank after
//! trimming, and a kept slot's missing measure becomes the empty string. Records
//! with more than [`INGREDIENT_SLOTS`] upstream ingredients silently lose the
//! remainder; that truncation boundary belongs to the wire format.

use crate::domain::error::{Result, ZrecipeError};
use crate::domain::recipe::{IngredientLine, Recipe};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of fixed ingredient/measure slot pairs in a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// Envelope for `filter.php`, `random.php` and `lookup.php` responses.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    /// `null` or absent when the request matched nothing.
    #[serde(default)]
    meals: Option<Vec<MealRecord>>,
}

/// Envelope for `categories.php` responses.
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<CategoryRecord>>,
}

/// One category entry; only the name is used.
#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(rename = "strCategory")]
    name: String,
}

/// Raw meal record in the remote's field naming.
///
/// The named fields are the ones the plugin reads directly; the ingredient and
/// measure slots land in `slots` via `#[serde(flatten)]` and are scanned by
/// [`MealRecord::into_recipe`].
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,

    #[serde(rename = "strMeal")]
    name: String,

    #[serde(rename = "strCategory", default)]
    category: Option<String>,

    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,

    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,

    #[serde(rename = "strSource", default)]
    source: Option<String>,

    /// Remaining `str*` fields, including the twenty ingredient/measure slots.
    #[serde(flatten)]
    slots: BTreeMap<String, Option<String>>,
}

impl MealRecord {
    /// Converts the raw record into a domain [`Recipe`], scanning the fixed
    /// ingredient slots in order.
    fn into_recipe(self) -> Recipe {
        let mut ingredients = Vec::new();

        for slot in 1..=INGREDIENT_SLOTS {
            let ingredient = self
                .slots
                .get(&format!("strIngredient{slot}"))
                .and_then(|value| value.as_deref());

            let Some(name) = ingredient else { continue };
            if name.trim().is_empty() {
                continue;
            }

            let measure = self
                .slots
                .get(&format!("strMeasure{slot}"))
                .and_then(|value| value.clone())
                .unwrap_or_default();

            ingredients.push(IngredientLine {
                measure,
                name: name.to_string(),
            });
        }

        Recipe {
            id: self.id,
            name: self.name,
            category: self.category,
            thumbnail: self.thumbnail,
            instructions: self.instructions,
            source: self.source,
            ingredients,
        }
    }
}

/// Decodes a meal-list response body.
///
/// A `null` or absent `meals` array decodes to an empty vector.
///
/// # Errors
///
/// Returns [`ZrecipeError::Parse`] when the body is not valid JSON or does not
/// match the envelope shape.
pub fn parse_meals(body: &[u8]) -> Result<Vec<Recipe>> {
    let envelope: MealsEnvelope = serde_json::from_slice(body)
        .map_err(|e| ZrecipeError::Parse(e.to_string()))?;

    let recipes: Vec<Recipe> = envelope
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(MealRecord::into_recipe)
        .collect();

    tracing::debug!(recipe_count = recipes.len(), "decoded meal list");
    Ok(recipes)
}

/// Decodes a lookup-by-id response body into a single recipe.
///
/// # Errors
///
/// Returns [`ZrecipeError::NotFound`] when the `meals` array is `null`, absent
/// or empty, and [`ZrecipeError::Parse`] on malformed JSON.
pub fn parse_single_meal(body: &[u8]) -> Result<Recipe> {
    let mut recipes = parse_meals(body)?;
    if recipes.is_empty() {
        return Err(ZrecipeError::NotFound);
    }
    Ok(recipes.swap_remove(0))
}

/// Decodes a category-list response body into ordered category names.
///
/// # Errors
///
/// Returns [`ZrecipeError::Parse`] on malformed JSON.
pub fn parse_categories(body: &[u8]) -> Result<Vec<String>> {
    let envelope: CategoriesEnvelope = serde_json::from_slice(body)
        .map_err(|e| ZrecipeError::Parse(e.to_string()))?;

    let names: Vec<String> = envelope
        .categories
        .unwrap_or_default()
        .into_iter()
        .map(|category| category.name)
        .collect();

    tracing::debug!(category_count = names.len(), "decoded category list");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::{parse_categories, parse_meals, parse_single_meal};
    use crate::domain::ZrecipeError;

    #[test]
    fn null_and_absent_meals_decode_to_empty() {
        assert!(parse_meals(br#"{"meals": null}"#).unwrap().is_empty());
        assert!(parse_meals(br#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_meals(b"<!DOCTYPE html>").unwrap_err();
        assert!(matches!(err, ZrecipeError::Parse(_)));
    }

    #[test]
    fn search_results_keep_remote_order() {
        let body = br#"{"meals": [
            {"idMeal": "1", "strMeal": "Brown Stew Chicken", "strCategory": "Chicken", "strMealThumb": "https://img.test/1.jpg"},
            {"idMeal": "2", "strMeal": "Chicken Alfredo", "strCategory": "Pasta", "strMealThumb": "https://img.test/2.jpg"}
        ]}"#;

        let recipes = parse_meals(body).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "1");
        assert_eq!(recipes[0].category.as_deref(), Some("Chicken"));
        assert_eq!(recipes[1].name, "Chicken Alfredo");
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn ingredient_slots_are_scanned_in_order_skipping_blanks() {
        let body = br#"{"meals": [{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strInstructions": "Preheat oven to 350.",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "   ",
            "strMeasure2": "1 tbsp",
            "strIngredient3": "",
            "strIngredient4": "sesame seeds",
            "strMeasure4": null,
            "strIngredient5": "stir-fry vegetables",
            "strMeasure5": "3 cups",
            "strIngredient6": null
        }]}"#;

        let recipe = parse_single_meal(body).unwrap();
        let listed: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|line| line.display())
            .collect();

        // blank slot 2, empty slot 3 and null slot 6 are skipped; slot 4's
        // missing measure becomes the bare ingredient
        assert_eq!(
            listed,
            vec![
                "3/4 cup soy sauce",
                "sesame seeds",
                "3 cups stir-fry vegetables",
            ]
        );
    }

    #[test]
    fn slots_beyond_the_fixed_range_are_ignored() {
        let body = br#"{"meals": [{
            "idMeal": "9",
            "strMeal": "Overfull",
            "strIngredient20": "salt",
            "strIngredient21": "pepper"
        }]}"#;

        let recipe = parse_single_meal(body).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "salt");
    }

    #[test]
    fn lookup_with_no_match_is_not_found() {
        let err = parse_single_meal(br#"{"meals": null}"#).unwrap_err();
        assert!(matches!(err, ZrecipeError::NotFound));

        let err = parse_single_meal(br#"{"meals": []}"#).unwrap_err();
        assert!(matches!(err, ZrecipeError::NotFound));
    }

    #[test]
    fn categories_decode_to_ordered_names() {
        let body = br#"{"categories": [
            {"idCategory": "1", "strCategory": "Beef", "strCategoryThumb": "https://img.test/beef.png"},
            {"idCategory": "2", "strCategory": "Chicken"}
        ]}"#;

        assert_eq!(
            parse_categories(body).unwrap(),
            vec!["Beef".to_string(), "Chicken".to_string()]
        );
        assert!(parse_categories(br#"{"categories": null}"#)
            .unwrap()
            .is_empty());
    }
}
