// ABOUTME: Nutrition requirement and recipe analysis engine for dogs
// ABOUTME: Energy estimation, per-day targets, recipe aggregation, status classification and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dog Nutrition Intelligence
//!
//! Pure, synchronous calculations over immutable inputs. Data flows
//! profile → activity factor → RER/MER → per-day targets, and
//! recipe → aggregated totals → statuses → ranked suggestions.
//!
//! ## Modules
//!
//! - **config**: validated engine configuration with environment overrides
//! - **`activity_factors`**: profile → maintenance multiplier
//! - **`energy_calculator`**: RER and MER
//! - **requirements**: per-1000 kcal → per-day conversion and the default reference table
//! - **aggregation**: recipe totals with completeness tracking
//! - **status**: low / ok / high / unknown classification
//! - **suggestions**: ranked, capped suggestions with a pluggable ranker
//! - **safety**: toxic ingredient screening
//! - **lookup**: ingredient and reference data capabilities
//! - **analyzer**: the two public operations

/// Engine configuration
pub mod config;

/// Activity factor resolution
pub mod activity_factors;

/// Resting and maintenance energy requirements
pub mod energy_calculator;

/// Per-day nutrient target derivation
pub mod requirements;

/// Recipe nutrient aggregation
pub mod aggregation;

/// Status classification
pub mod status;

/// Suggestion generation and ranking
pub mod suggestions;

/// Ingredient safety screening
pub mod safety;

/// Data-access capabilities
pub mod lookup;

/// Requirement computation and recipe analysis
pub mod analyzer;

pub use analyzer::{AnalysisRequest, NutritionAnalyzer};
pub use config::intelligence::{
    ActivityFactorTable, ConfigError, FactorKey, IntelligenceConfig, NutritionConfig,
};
pub use lookup::{
    IngredientCatalog, IngredientLookup, NutrientReferenceLookup, StagedReferenceTables,
};
pub use requirements::default_reference_table;
pub use suggestions::{PriorityRanker, SuggestionCandidate, SuggestionGenerator, SuggestionRanker};
