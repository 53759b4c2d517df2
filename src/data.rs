// ABOUTME: JSON file adapters for reference tables, ingredient catalogs, recipes and profiles
// ABOUTME: Thin data-access layer that parses files into validated domain values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! File loaders
//!
//! The engine itself never touches storage. These helpers stand in for the
//! data-access collaborator when the engine is driven from the command line
//! or from tests.
//!
//! Formats:
//! - reference table: JSON array of rows (`nutrient_id`, `unit`, `basis`,
//!   `min`, `target`, `max`, `source`), basis is `per_day` or `per_1000kcal`
//! - ingredient catalog: JSON array of ingredients (`id`, `name`,
//!   `per_100g` map; `null` marks an unknown amount)
//! - recipe: `{ "name": ..., "items": [{ "ingredient_id": ..., "grams": ... }] }`
//! - profile: a `DogProfile` object

use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::{
    DogProfile, Ingredient, NutrientRequirementRow, Recipe, ReferenceTable,
};
use dog_nutrition_intelligence::config::intelligence::NutritionConfig;
use dog_nutrition_intelligence::IngredientCatalog;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::internal(format!("failed to read {display}: {e}"))
            .with_resource_id(display.clone())
            .with_source(e)
    })?;
    serde_json::from_str(&text).map_err(|e| AppError::from(e).with_resource_id(display))
}

/// Load and validate a reference requirement table
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError` for
/// malformed JSON and `InvalidReferenceData` for an unknown basis, bad bounds or
/// duplicate nutrients
pub fn load_reference_table(path: impl AsRef<Path>) -> AppResult<ReferenceTable> {
    let path = path.as_ref();
    let rows: Vec<NutrientRequirementRow> = read_json(path)?;
    let table = ReferenceTable::from_rows(rows)?;
    debug!(path = %path.display(), nutrients = table.len(), "Loaded reference table");
    Ok(table)
}

/// Load and validate an ingredient catalog
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError` for
/// malformed JSON and `InvalidReferenceData` for invalid compositions or duplicate ids
pub fn load_ingredient_catalog(path: impl AsRef<Path>) -> AppResult<IngredientCatalog> {
    let path = path.as_ref();
    let ingredients: Vec<Ingredient> = read_json(path)?;
    let catalog = IngredientCatalog::new(ingredients)?;
    debug!(path = %path.display(), ingredients = catalog.len(), "Loaded ingredient catalog");
    Ok(catalog)
}

/// Load and validate a recipe
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError` for
/// malformed JSON and `InvalidInput` for an empty recipe or non-positive grams
pub fn load_recipe(path: impl AsRef<Path>) -> AppResult<Recipe> {
    let recipe: Recipe = read_json(path.as_ref())?;
    recipe.validate()?;
    Ok(recipe)
}

/// Load and validate a dog profile
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError` for
/// malformed JSON or enum values and `InvalidInput` for a non-positive weight
pub fn load_profile(path: impl AsRef<Path>) -> AppResult<DogProfile> {
    let profile: DogProfile = read_json(path.as_ref())?;
    profile.validate()?;
    Ok(profile)
}

/// Load and validate an engine configuration; missing sections take their defaults
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, `SerializationError` for
/// malformed JSON and `ConfigInvalid` if validation fails
pub fn load_nutrition_config(path: impl AsRef<Path>) -> AppResult<NutritionConfig> {
    let config: NutritionConfig = read_json(path.as_ref())?;
    config.validate()?;
    Ok(config)
}
