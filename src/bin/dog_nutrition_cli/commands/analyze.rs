// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: analyze command - gap analysis of a recipe against a dog's requirements
// ABOUTME: Loads recipe and ingredient files, prints statuses, suggestions and safety warnings

use super::{reference_table, ProfileArgs};
use dog_nutrition::data::{load_ingredient_catalog, load_recipe};
use dog_nutrition::errors::AppResult;
use dog_nutrition::NutritionAnalyzer;
use serde_json::Value;
use std::path::Path;

pub fn run(
    analyzer: &NutritionAnalyzer,
    args: &ProfileArgs,
    recipe: &Path,
    ingredients: &Path,
    reference: Option<&Path>,
    precision: u32,
) -> AppResult<Value> {
    let profile = args.to_profile()?;
    let overrides = args.factor_overrides()?;
    let reference = reference_table(reference)?;
    let recipe = load_recipe(recipe)?;
    let catalog = load_ingredient_catalog(ingredients)?;

    let result =
        analyzer.analyze_recipe(&profile, &recipe, &reference, &catalog, overrides.as_ref())?;
    Ok(serde_json::to_value(result.rounded(precision))?)
}
