// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference profiles, ingredients and analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `dog_nutrition`

use dog_nutrition::models::{ActivityLevel, DogProfile, Ingredient, LifeStage, Recipe, Sex};
use dog_nutrition::{IngredientCatalog, NutritionAnalyzer, NutritionConfig};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Analyzer with default configuration, independent of the environment
pub fn analyzer() -> NutritionAnalyzer {
    init_test_logging();
    NutritionAnalyzer::with_config(NutritionConfig::default())
}

/// Reference dog: 12.5 kg neutered adult with moderate activity
pub fn adult_profile() -> DogProfile {
    DogProfile {
        age_months: 48,
        weight_kg: 12.5,
        breed: Some("Beagle".into()),
        sex: Sex::Female,
        neutered: true,
        activity_level: ActivityLevel::Moderate,
        life_stage: LifeStage::Adult,
    }
}

/// 12.5 kg puppy
pub fn puppy_profile() -> DogProfile {
    DogProfile {
        age_months: 5,
        neutered: false,
        life_stage: LifeStage::Puppy,
        ..adult_profile()
    }
}

/// Chicken breast: 165 kcal and 31 g protein per 100 g
pub fn chicken_breast() -> Ingredient {
    Ingredient::new("chicken_breast", "Chicken breast, skinless")
        .with_nutrient("kcal", 165.0)
        .with_nutrient("protein_g", 31.0)
        .with_nutrient("fat_g", 3.6)
        .with_nutrient("ca_mg", 15.0)
        .with_nutrient("p_mg", 228.0)
}

/// Pumpkin: 26 kcal per 100 g, no protein
pub fn pumpkin() -> Ingredient {
    Ingredient::new("pumpkin", "Pumpkin, boiled")
        .with_nutrient("kcal", 26.0)
        .with_nutrient("protein_g", 0.0)
        .with_nutrient("fat_g", 0.1)
        .with_nutrient("ca_mg", 21.0)
        .with_nutrient("p_mg", 44.0)
}

/// Catalog of the fixture ingredients plus a few others
pub fn catalog() -> IngredientCatalog {
    IngredientCatalog::new([
        chicken_breast(),
        pumpkin(),
        Ingredient::new("rice", "White rice, cooked")
            .with_nutrient("kcal", 130.0)
            .with_nutrient("protein_g", 2.7),
        Ingredient::new("garlic", "Garlic, raw")
            .with_nutrient("kcal", 149.0)
            .with_nutrient("protein_g", 6.4),
    ])
    .unwrap()
}

/// Chicken 120 g + pumpkin 80 g
pub fn chicken_and_pumpkin() -> Recipe {
    Recipe::new("chicken and pumpkin")
        .with_item("chicken_breast", 120.0)
        .with_item("pumpkin", 80.0)
}
