// ABOUTME: Main library entry point for the dog nutrition requirement and recipe analysis tools
// ABOUTME: Re-exports the engine and adds logging setup and JSON file adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dog Nutrition
//!
//! Computes a dog's daily energy need and per-nutrient targets, then evaluates
//! a candidate recipe against them.
//!
//! ## Architecture
//!
//! - **`dog-nutrition-core`**: errors, models and constants
//! - **`dog-nutrition-intelligence`**: the calculation engine and its configuration
//! - **this crate**: logging, file adapters and the `dog-nutrition` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dog_nutrition::{default_reference_table, NutritionAnalyzer};
//! use dog_nutrition::models::{ActivityLevel, DogProfile, LifeStage, Sex};
//! use dog_nutrition::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let profile = DogProfile {
//!         age_months: 36,
//!         weight_kg: 12.5,
//!         breed: None,
//!         sex: Sex::Female,
//!         neutered: true,
//!         activity_level: ActivityLevel::Moderate,
//!         life_stage: LifeStage::Adult,
//!     };
//!     let report = NutritionAnalyzer::new()
//!         .compute_requirements(&profile, &default_reference_table()?, None)?;
//!     println!("MER: {:.0} kcal/day", report.mer);
//!     Ok(())
//! }
//! ```

/// JSON file adapters standing in for the data-access collaborator
pub mod data;

/// Structured logging setup
pub mod logging;

pub use dog_nutrition_core::{constants, errors, models};
pub use dog_nutrition_intelligence::{
    config, default_reference_table, ActivityFactorTable, AnalysisRequest, FactorKey,
    IngredientCatalog, IngredientLookup, IntelligenceConfig, NutrientReferenceLookup,
    NutritionAnalyzer, NutritionConfig, PriorityRanker, StagedReferenceTables,
    SuggestionCandidate, SuggestionGenerator, SuggestionRanker,
};
