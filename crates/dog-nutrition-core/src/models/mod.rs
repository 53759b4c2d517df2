// ABOUTME: Core data models for the dog nutrition engine
// ABOUTME: Re-exports profile, requirement, ingredient, recipe and analysis result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data exchanged between the engine and its collaborators.
//!
//! ## Design Principles
//!
//! - **Immutable inputs**: profiles, recipes and reference tables are built by the caller
//!   and only read by the engine
//! - **Explicit absence**: a missing nutrient amount is [`NutrientValue::Unknown`], never zero
//! - **Typed invariants**: only a [`DailyRequirement`] can be compared against recipe totals
//! - **Serializable**: every model round-trips through JSON for the outer layers

mod analysis;
mod ingredient;
mod profile;
mod recipe;
mod requirement;

pub use analysis::{
    round_to, EnergyRequirement, NutrientActual, NutrientComparison, NutrientStatus,
    RecipeAnalysisResult, RequirementsReport, SafetyWarning, Suggestion, SuggestionKind,
};
pub use ingredient::{Ingredient, NutrientValue};
pub use profile::{ActivityLevel, DogProfile, LifeStage, Sex};
pub use recipe::{Recipe, RecipeItem};
pub use requirement::{
    DailyRequirement, NutrientRequirement, NutrientRequirementRow, ReferenceTable,
    RequirementBasis,
};
