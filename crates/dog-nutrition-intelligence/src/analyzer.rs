// ABOUTME: Orchestrates requirement computation and recipe analysis for a dog profile
// ABOUTME: Composes factor resolution, energy, targets, aggregation, classification and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Analyzer
//!
//! The two public operations of the engine:
//!
//! - [`NutritionAnalyzer::compute_requirements`]: RER, MER and per-day nutrient
//!   targets for a profile
//! - [`NutritionAnalyzer::analyze_recipe`]: gap analysis of a recipe against
//!   those targets, with ranked suggestions and safety warnings
//!
//! Both are pure functions of their inputs. The analyzer holds only immutable
//! configuration, so one instance can serve any number of threads.

use crate::activity_factors::resolve_activity_factor;
use crate::aggregation::{aggregate_resolved, resolve_ingredients};
use crate::config::intelligence::{ActivityFactorTable, IntelligenceConfig, NutritionConfig};
use crate::energy_calculator::calculate_energy_requirement;
use crate::lookup::{IngredientLookup, NutrientReferenceLookup};
use crate::requirements::resolve_daily_targets;
use crate::safety::screen_ingredients;
use crate::status::{classify_energy, compare_nutrient};
use crate::suggestions::{EnergyGap, PriorityRanker, SuggestionGenerator, SuggestionRanker};
use dog_nutrition_core::constants::KCAL;
use dog_nutrition_core::errors::AppResult;
use dog_nutrition_core::models::{
    DogProfile, NutrientComparison, Recipe, RecipeAnalysisResult, RequirementsReport,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::iter;
use tracing::{debug, info, warn};

/// One independent analysis in a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    /// Dog being fed
    pub profile: DogProfile,
    /// Candidate recipe
    pub recipe: Recipe,
}

/// Requirement and recipe analysis engine
#[derive(Debug, Clone)]
pub struct NutritionAnalyzer<R: SuggestionRanker = PriorityRanker> {
    config: NutritionConfig,
    suggestions: SuggestionGenerator<R>,
}

impl Default for NutritionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionAnalyzer {
    /// Analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().nutrition.clone())
    }

    /// Analyzer using an explicit configuration
    #[must_use]
    pub fn with_config(config: NutritionConfig) -> Self {
        let suggestions = SuggestionGenerator::from_config(&config.suggestions);
        Self {
            config,
            suggestions,
        }
    }
}

impl<R: SuggestionRanker> NutritionAnalyzer<R> {
    /// Analyzer with a custom suggestion ranking policy
    #[must_use]
    pub fn with_ranker(config: NutritionConfig, ranker: R) -> Self {
        let suggestions = SuggestionGenerator::with_ranker(ranker, &config.suggestions);
        Self {
            config,
            suggestions,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Compute RER, MER and per-day nutrient targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid profile, `ConfigMissing` or
    /// `ConfigInvalid` for an unusable activity factor, `ResourceNotFound` when
    /// no reference table covers the life stage and `InvalidReferenceData` for
    /// a bad reference row
    pub fn compute_requirements<F>(
        &self,
        profile: &DogProfile,
        reference: &F,
        factor_overrides: Option<&ActivityFactorTable>,
    ) -> AppResult<RequirementsReport>
    where
        F: NutrientReferenceLookup + ?Sized,
    {
        profile.validate()?;
        let factor =
            resolve_activity_factor(profile, &self.config.activity_factors, factor_overrides)?;
        let energy = calculate_energy_requirement(profile.weight_kg, factor, &self.config.energy)?;
        debug!(
            weight_kg = profile.weight_kg,
            life_stage = %profile.life_stage,
            rer = energy.rer,
            mer = energy.mer,
            "Computed energy requirement"
        );

        let table = reference.reference_table(profile.life_stage)?;
        let nutrient_requirements = resolve_daily_targets(table, energy.mer)?;

        Ok(RequirementsReport {
            rer: energy.rer,
            mer: energy.mer,
            activity_factor: energy.activity_factor,
            nutrient_requirements,
        })
    }

    /// Analyze a recipe against the profile's requirements
    ///
    /// Fails fast on the first fatal error; incomplete nutrient data is not an
    /// error and shows up as status `unknown`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::compute_requirements`] returns, plus `InvalidInput`
    /// for an empty recipe or non-positive grams, `ResourceNotFound` naming
    /// an unresolvable ingredient and `InvalidReferenceData` naming an
    /// ingredient with a malformed composition
    pub fn analyze_recipe<F, L>(
        &self,
        profile: &DogProfile,
        recipe: &Recipe,
        reference: &F,
        ingredients: &L,
        factor_overrides: Option<&ActivityFactorTable>,
    ) -> AppResult<RecipeAnalysisResult>
    where
        F: NutrientReferenceLookup + ?Sized,
        L: IngredientLookup + ?Sized,
    {
        let requirements = self.compute_requirements(profile, reference, factor_overrides)?;

        let required: Vec<&str> = iter::once(KCAL)
            .chain(
                requirements
                    .nutrient_requirements
                    .iter()
                    .map(|r| r.nutrient_id.as_str()),
            )
            .collect();
        recipe.validate()?;
        let resolved = resolve_ingredients(recipe, ingredients)?;
        let totals = aggregate_resolved(&recipe.name, &resolved, &required);

        let kcal = totals.kcal();
        let kcal_status = classify_energy(&kcal, requirements.mer, &self.config.kcal_status);

        let nutrients = requirements
            .nutrient_requirements
            .iter()
            .map(|requirement| compare_nutrient(&totals.actual(&requirement.nutrient_id), requirement))
            .collect::<AppResult<Vec<NutrientComparison>>>()?;

        let incomplete: Vec<&str> = nutrients
            .iter()
            .filter(|n| !n.complete)
            .map(|n| n.nutrient_id.as_str())
            .chain((!kcal.complete).then_some(KCAL))
            .collect();
        if !incomplete.is_empty() {
            warn!(
                recipe = %recipe.name,
                nutrients = ?incomplete,
                "Nutrient data incomplete; affected statuses are unknown"
            );
        }

        let energy_gap = EnergyGap {
            actual: kcal.amount,
            target: requirements.mer,
            status: kcal_status,
        };
        let suggestions = self.suggestions.generate(&energy_gap, &nutrients);

        let safety_warnings = screen_ingredients(
            resolved.iter().map(|&(_, ingredient)| ingredient),
            &self.config.safety,
        );

        info!(
            recipe = %recipe.name,
            total_kcal = kcal.amount,
            kcal_target = requirements.mer,
            kcal_status = %kcal_status,
            suggestions = suggestions.len(),
            safety_warnings = safety_warnings.len(),
            "Analyzed recipe"
        );

        Ok(RecipeAnalysisResult {
            recipe_name: recipe.name.clone(),
            total_kcal: kcal.amount,
            kcal_target: requirements.mer,
            kcal_gap: kcal.amount - requirements.mer,
            kcal_status,
            kcal_complete: kcal.complete,
            nutrients,
            suggestions,
            safety_warnings,
        })
    }

    /// Analyze independent requests in parallel
    ///
    /// Results keep the order of `requests`; one failing request does not
    /// affect the others.
    pub fn analyze_batch<F, L>(
        &self,
        requests: &[AnalysisRequest],
        reference: &F,
        ingredients: &L,
        factor_overrides: Option<&ActivityFactorTable>,
    ) -> Vec<AppResult<RecipeAnalysisResult>>
    where
        F: NutrientReferenceLookup + Sync + ?Sized,
        L: IngredientLookup + Sync + ?Sized,
    {
        requests
            .par_iter()
            .map(|request| {
                self.analyze_recipe(
                    &request.profile,
                    &request.recipe,
                    reference,
                    ingredients,
                    factor_overrides,
                )
            })
            .collect()
    }
}
