// ABOUTME: Integration tests for the JSON file adapters
// ABOUTME: Loads reference tables, catalogs, recipes, profiles and configs from temporary files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use dog_nutrition::data::{
    load_ingredient_catalog, load_nutrition_config, load_profile, load_recipe,
    load_reference_table,
};
use dog_nutrition::errors::ErrorCode;
use dog_nutrition::models::{LifeStage, NutrientStatus, RequirementBasis};
use dog_nutrition::IngredientLookup;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn reference_rows() -> serde_json::Value {
    json!([
        { "nutrient_id": "protein_g", "unit": "g", "basis": "per_1000kcal",
          "min": 45.0, "target": 52.0, "source": "NRC 2006" },
        { "nutrient_id": "ca_mg", "unit": "mg", "basis": "per_1000kcal",
          "min": 1250.0, "target": 1500.0, "max": 6250.0, "source": "NRC 2006" },
        { "nutrient_id": "omega3_mg", "unit": "mg", "basis": "per_day",
          "target": 200.0, "source": "veterinarian" }
    ])
}

#[test]
fn test_load_reference_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "reference.json", &reference_rows());

    let table = load_reference_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.requirements()[0].nutrient_id, "protein_g");
    assert_eq!(table.get("omega3_mg").unwrap().basis, RequirementBasis::PerDay);
    assert!(table.get("protein_g").unwrap().max.is_none());
}

#[test]
fn test_unknown_basis_is_reference_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "reference.json",
        &json!([{ "nutrient_id": "protein_g", "unit": "g", "basis": "per_kg",
                  "target": 52.0, "source": "x" }]),
    );

    let err = load_reference_table(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidReferenceData);
}

#[test]
fn test_catalog_null_amount_is_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "ingredients.json",
        &json!([
            { "id": "chicken_breast", "name": "Chicken breast",
              "per_100g": { "kcal": 165.0, "protein_g": 31.0, "ca_mg": null } },
            { "id": "pumpkin", "name": "Pumpkin", "per_100g": { "kcal": 26.0 } }
        ]),
    );

    let catalog = load_ingredient_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let chicken = catalog.find_ingredient("chicken_breast").unwrap();
    assert!(!chicken.nutrient("ca_mg").is_known());
    assert!(!chicken.nutrient("fe_mg").is_known());
    assert_eq!(chicken.nutrient("protein_g").known(), Some(31.0));
}

#[test]
fn test_duplicate_ingredient_ids_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "ingredients.json",
        &json!([
            { "id": "pumpkin", "name": "Pumpkin", "per_100g": { "kcal": 26.0 } },
            { "id": "pumpkin", "name": "Pumpkin again", "per_100g": { "kcal": 30.0 } }
        ]),
    );

    let err = load_ingredient_catalog(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidReferenceData);
}

#[test]
fn test_load_recipe_and_profile_then_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = write_json(
        &dir,
        "profile.json",
        &json!({
            "age_months": 48, "weight_kg": 12.5, "sex": "female", "neutered": true,
            "activity_level": "moderate", "life_stage": "adult"
        }),
    );
    let recipe_path = write_json(
        &dir,
        "recipe.json",
        &json!({
            "name": "chicken and pumpkin",
            "items": [
                { "ingredient_id": "chicken_breast", "grams": 120.0 },
                { "ingredient_id": "pumpkin", "grams": 80.0 }
            ]
        }),
    );
    let reference_path = write_json(&dir, "reference.json", &reference_rows());

    let profile = load_profile(&profile_path).unwrap();
    assert_eq!(profile.life_stage, LifeStage::Adult);
    assert!(profile.breed.is_none());
    let recipe = load_recipe(&recipe_path).unwrap();
    let reference = load_reference_table(&reference_path).unwrap();

    let result = common::analyzer()
        .analyze_recipe(&profile, &recipe, &reference, &common::catalog(), None)
        .unwrap();
    assert_eq!(result.nutrients.len(), 3);
    assert_eq!(
        result.nutrient("omega3_mg").unwrap().status,
        NutrientStatus::Unknown
    );
}

#[test]
fn test_invalid_profile_and_recipe_files() {
    let dir = tempfile::tempdir().unwrap();
    let weightless = write_json(
        &dir,
        "profile.json",
        &json!({
            "age_months": 3, "weight_kg": 0.0, "sex": "male", "neutered": false,
            "activity_level": "high", "life_stage": "puppy"
        }),
    );
    assert_eq!(load_profile(&weightless).unwrap_err().code, ErrorCode::InvalidInput);

    let bad_stage = write_json(
        &dir,
        "stage.json",
        &json!({
            "age_months": 3, "weight_kg": 4.0, "sex": "male", "neutered": false,
            "activity_level": "high", "life_stage": "teenager"
        }),
    );
    assert_eq!(
        load_profile(&bad_stage).unwrap_err().code,
        ErrorCode::SerializationError
    );

    let empty_recipe = write_json(&dir, "recipe.json", &json!({ "name": "air", "items": [] }));
    assert_eq!(load_recipe(&empty_recipe).unwrap_err().code, ErrorCode::InvalidInput);
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let err = load_recipe(&missing).unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalError);
    assert!(err.context.resource_id.unwrap().ends_with("nope.json"));
}

#[test]
fn test_partial_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "config.json",
        &json!({ "suggestions": { "max_suggestions": 5 } }),
    );

    let config = load_nutrition_config(&path).unwrap();
    assert_eq!(config.suggestions.max_suggestions, 5);
    assert_eq!(config.suggestions.priority, ["protein_g", "ca_mg", "p_mg"]);
    assert_eq!(config.activity_factors.len(), 18);

    let invalid = write_json(
        &dir,
        "invalid.json",
        &json!({ "kcal_status": { "lower_fraction": 2.0 } }),
    );
    assert_eq!(
        load_nutrition_config(&invalid).unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}
