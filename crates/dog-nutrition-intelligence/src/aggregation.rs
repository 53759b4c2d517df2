// ABOUTME: Sums ingredient contributions scaled by grams into recipe nutrient totals
// ABOUTME: Tracks per-nutrient completeness; an unresolvable ingredient fails the whole aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::lookup::IngredientLookup;
use dog_nutrition_core::constants::{energy::COMPOSITION_BASIS_GRAMS, KCAL};
use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::{Ingredient, NutrientActual, Recipe, RecipeItem};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregated nutrient totals of one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeTotals {
    actuals: BTreeMap<String, NutrientActual>,
}

impl RecipeTotals {
    /// Total for a nutrient, if it was aggregated
    #[must_use]
    pub fn get(&self, nutrient_id: &str) -> Option<&NutrientActual> {
        self.actuals.get(nutrient_id)
    }

    /// Total for a nutrient; a nutrient nobody supplied is 0 and incomplete
    #[must_use]
    pub fn actual(&self, nutrient_id: &str) -> NutrientActual {
        self.actuals
            .get(nutrient_id)
            .cloned()
            .unwrap_or_else(|| NutrientActual {
                nutrient_id: nutrient_id.to_owned(),
                amount: 0.0,
                complete: false,
            })
    }

    /// Energy total
    #[must_use]
    pub fn kcal(&self) -> NutrientActual {
        self.actual(KCAL)
    }

    /// Nutrients whose total is a lower bound only
    pub fn incomplete(&self) -> impl Iterator<Item = &str> {
        self.actuals
            .values()
            .filter(|actual| !actual.complete)
            .map(|actual| actual.nutrient_id.as_str())
    }

    /// All totals in nutrient id order
    pub fn iter(&self) -> impl Iterator<Item = &NutrientActual> {
        self.actuals.values()
    }

    /// Number of aggregated nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.actuals.len()
    }

    /// Whether nothing was aggregated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actuals.is_empty()
    }
}

/// Resolve every recipe item, failing on the first unknown or malformed ingredient
///
/// Lookups are not trusted to hold validated data: each resolved ingredient is
/// checked so a NaN or negative amount never reaches the totals.
///
/// # Errors
///
/// Returns `ResourceNotFound` naming the unresolvable ingredient id, and
/// `InvalidReferenceData` naming an ingredient whose composition is malformed
pub fn resolve_ingredients<'a, L>(
    recipe: &'a Recipe,
    ingredients: &'a L,
) -> AppResult<Vec<(&'a RecipeItem, &'a Ingredient)>>
where
    L: IngredientLookup + ?Sized,
{
    recipe
        .items
        .iter()
        .map(|item| {
            let ingredient = ingredients
                .find_ingredient(&item.ingredient_id)
                .ok_or_else(|| {
                    AppError::not_found("ingredient", item.ingredient_id.as_str())
                        .with_details(json!({ "recipe": recipe.name }))
                })?;
            ingredient.validate()?;
            Ok::<_, AppError>((item, ingredient))
        })
        .collect()
}

/// Aggregate a recipe's nutrient totals
///
/// Validates the recipe, resolves its ingredients and delegates to
/// [`aggregate_resolved`].
///
/// # Errors
///
/// Returns `InvalidInput` for an empty recipe or a non-positive weight,
/// `ResourceNotFound` for an unresolvable ingredient and `InvalidReferenceData`
/// for a malformed one; no partial totals are produced
pub fn aggregate_recipe<L, S>(
    recipe: &Recipe,
    ingredients: &L,
    required: &[S],
) -> AppResult<RecipeTotals>
where
    L: IngredientLookup + ?Sized,
    S: AsRef<str>,
{
    recipe.validate()?;
    let resolved = resolve_ingredients(recipe, ingredients)?;
    Ok(aggregate_resolved(&recipe.name, &resolved, required))
}

/// Aggregate totals from already resolved recipe items
///
/// Every nutrient any ingredient supplies is totalled, plus every id in
/// `required` (reported as 0 and incomplete when nobody supplies it). A
/// nutrient is complete only if every item has a known value for it.
/// Contributions are summed in sorted order so item order never changes the
/// result.
#[must_use]
pub fn aggregate_resolved<S>(
    recipe_name: &str,
    resolved: &[(&RecipeItem, &Ingredient)],
    required: &[S],
) -> RecipeTotals
where
    S: AsRef<str>,
{
    let mut contributions: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for required_id in required {
        contributions.entry(required_id.as_ref()).or_default();
    }
    for (item, ingredient) in resolved {
        let scale = item.grams / COMPOSITION_BASIS_GRAMS;
        for (nutrient_id, per_100g) in ingredient.known_nutrients() {
            contributions
                .entry(nutrient_id)
                .or_default()
                .push(per_100g * scale);
        }
    }

    let actuals = contributions
        .into_iter()
        .map(|(nutrient_id, mut values)| {
            let complete = resolved
                .iter()
                .all(|(_, ingredient)| ingredient.nutrient(nutrient_id).is_known());
            values.sort_by(f64::total_cmp);
            let actual = NutrientActual {
                nutrient_id: nutrient_id.to_owned(),
                amount: values.iter().sum(),
                complete,
            };
            (nutrient_id.to_owned(), actual)
        })
        .collect::<BTreeMap<_, _>>();

    let totals = RecipeTotals { actuals };
    debug!(
        recipe = %recipe_name,
        items = resolved.len(),
        nutrients = totals.len(),
        kcal = totals.kcal().amount,
        "Aggregated recipe nutrients"
    );
    totals
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use dog_nutrition_core::errors::ErrorCode;
    use std::collections::HashMap;

    fn catalog() -> HashMap<String, Ingredient> {
        [
            Ingredient::new("chicken_breast", "Chicken breast")
                .with_nutrient("kcal", 165.0)
                .with_nutrient("protein_g", 31.0),
            Ingredient::new("pumpkin", "Pumpkin")
                .with_nutrient("kcal", 26.0)
                .with_nutrient("protein_g", 0.0),
            Ingredient::new("rice", "White rice").with_nutrient("kcal", 130.0),
        ]
        .into_iter()
        .map(|i| (i.id.clone(), i))
        .collect()
    }

    #[test]
    fn test_contribution_is_per_100g_times_grams() {
        let recipe = Recipe::new("dinner")
            .with_item("chicken_breast", 120.0)
            .with_item("pumpkin", 80.0);
        let totals = aggregate_recipe(&recipe, &catalog(), &["protein_g"]).unwrap();

        assert!((totals.actual("protein_g").amount - 37.2).abs() < 1e-9);
        assert!((totals.kcal().amount - (198.0 + 20.8)).abs() < 1e-9);
        assert!(totals.kcal().complete);
    }

    #[test]
    fn test_missing_value_marks_nutrient_incomplete() {
        let recipe = Recipe::new("dinner")
            .with_item("chicken_breast", 100.0)
            .with_item("rice", 100.0);
        let totals = aggregate_recipe(&recipe, &catalog(), &["protein_g"]).unwrap();

        let protein = totals.actual("protein_g");
        assert!((protein.amount - 31.0).abs() < 1e-9);
        assert!(!protein.complete);
        assert_eq!(totals.incomplete().collect::<Vec<_>>(), ["protein_g"]);
    }

    #[test]
    fn test_required_nutrient_nobody_supplies_is_zero_and_incomplete() {
        let recipe = Recipe::new("dinner").with_item("rice", 150.0);
        let totals = aggregate_recipe(&recipe, &catalog(), &["vit_d_ug"]).unwrap();

        let vitamin_d = totals.get("vit_d_ug").unwrap();
        assert!(vitamin_d.amount.abs() < f64::EPSILON);
        assert!(!vitamin_d.complete);
    }

    #[test]
    fn test_item_order_does_not_change_totals() {
        let forward = Recipe::new("a")
            .with_item("chicken_breast", 133.3)
            .with_item("pumpkin", 71.9)
            .with_item("rice", 42.1);
        let reverse = Recipe::new("a")
            .with_item("rice", 42.1)
            .with_item("pumpkin", 71.9)
            .with_item("chicken_breast", 133.3);

        let a = aggregate_recipe(&forward, &catalog(), &["protein_g"]).unwrap();
        let b = aggregate_recipe(&reverse, &catalog(), &["protein_g"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_ingredient_is_not_found() {
        let recipe = Recipe::new("dinner")
            .with_item("chicken_breast", 120.0)
            .with_item("dragon_fruit", 50.0);
        let err = aggregate_recipe(&recipe, &catalog(), &["protein_g"]).unwrap_err();

        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.context.resource_id.as_deref(), Some("dragon_fruit"));
        assert_eq!(err.context.details["recipe"], "dinner");
    }

    #[test]
    fn test_malformed_ingredient_from_lookup_rejected() {
        let mut ingredients = catalog();
        ingredients.insert(
            "liver".into(),
            Ingredient::new("liver", "Beef liver")
                .with_nutrient("kcal", 135.0)
                .with_nutrient("protein_g", f64::NAN),
        );
        let recipe = Recipe::new("dinner")
            .with_item("chicken_breast", 120.0)
            .with_item("liver", 30.0);

        let err = aggregate_recipe(&recipe, &ingredients, &["protein_g"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReferenceData);
        assert_eq!(err.context.resource_id.as_deref(), Some("liver"));
    }

    #[test]
    fn test_resolved_items_aggregate_without_lookup() {
        let ingredients = catalog();
        let recipe = Recipe::new("dinner")
            .with_item("chicken_breast", 120.0)
            .with_item("pumpkin", 80.0);
        let resolved = resolve_ingredients(&recipe, &ingredients).unwrap();

        let totals = aggregate_resolved(&recipe.name, &resolved, &["protein_g"]);
        assert_eq!(
            totals,
            aggregate_recipe(&recipe, &ingredients, &["protein_g"]).unwrap()
        );
    }

    #[test]
    fn test_empty_recipe_rejected() {
        let err = aggregate_recipe(&Recipe::new("nothing"), &catalog(), &["kcal"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
