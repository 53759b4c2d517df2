// ABOUTME: Analysis output models: energy report, nutrient comparisons, statuses and suggestions
// ABOUTME: RequirementsReport, RecipeAnalysisResult, NutrientStatus, Suggestion and SafetyWarning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::requirement::DailyRequirement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round a value to `precision` decimal places
///
/// Used only at output boundaries; internal arithmetic stays unrounded.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(precision.min(12)).unwrap_or(12));
    (value * scale).round() / scale
}

/// Outcome of comparing an actual intake against its target range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    /// Below the lower bound
    Low,
    /// Within the accepted range (bounds inclusive)
    Ok,
    /// Above the upper bound
    High,
    /// Underlying data incomplete; cannot be evaluated
    Unknown,
}

impl NutrientStatus {
    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Ok => "ok",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated amount of one nutrient across a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientActual {
    /// Nutrient identifier
    pub nutrient_id: String,
    /// Summed amount per day; a lower bound when `complete` is false
    pub amount: f64,
    /// False if any contributing ingredient lacked data for this nutrient
    pub complete: bool,
}

/// Energy requirement of a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyRequirement {
    /// Activity/life-stage multiplier
    pub activity_factor: f64,
    /// Resting energy requirement (kcal/day)
    pub rer: f64,
    /// Maintenance energy requirement (kcal/day)
    pub mer: f64,
}

/// Result of the "calculate requirements" operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequirementsReport {
    /// Resting energy requirement (kcal/day)
    pub rer: f64,
    /// Maintenance energy requirement (kcal/day)
    pub mer: f64,
    /// Multiplier applied to RER
    pub activity_factor: f64,
    /// Per-day nutrient targets, in reference declaration order
    pub nutrient_requirements: Vec<DailyRequirement>,
}

impl RequirementsReport {
    /// Copy with energy values and targets rounded for display
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            rer: round_to(self.rer, precision),
            mer: round_to(self.mer, precision),
            activity_factor: self.activity_factor,
            nutrient_requirements: self
                .nutrient_requirements
                .iter()
                .map(|r| r.rounded(precision.max(2)))
                .collect(),
        }
    }
}

/// Comparison of one nutrient's actual intake against its per-day target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientComparison {
    /// Nutrient identifier
    pub nutrient_id: String,
    /// Unit label
    pub unit: String,
    /// Summed intake
    pub actual: f64,
    /// Per-day target
    pub target: f64,
    /// Per-day lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Per-day upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Classification
    pub status: NutrientStatus,
    /// Whether every ingredient had data for this nutrient
    pub complete: bool,
}

/// Category of a suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Scale the whole recipe up or down to meet the energy target
    ScaleRecipe,
    /// Add more of a nutrient
    IncreaseNutrient,
    /// Cut back a nutrient
    ReduceNutrient,
    /// Not enough data to evaluate a nutrient
    InsufficientData,
}

/// One ranked, actionable suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    /// Suggestion category
    pub kind: SuggestionKind,
    /// Nutrient concerned (`kcal` for energy suggestions)
    pub nutrient_id: String,
    /// Human-readable text
    pub message: String,
    /// Signed percentage change proposed (positive = increase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_percent: Option<f64>,
}

/// Ingredient flagged by the safety screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SafetyWarning {
    /// Ingredient identifier
    pub ingredient_id: String,
    /// Ingredient display name
    pub ingredient_name: String,
    /// Keyword that matched
    pub keyword: String,
}

/// Result of the "analyze recipe" operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeAnalysisResult {
    /// Recipe name
    pub recipe_name: String,
    /// Energy provided by the recipe (kcal)
    pub total_kcal: f64,
    /// Energy target (MER, kcal/day)
    pub kcal_target: f64,
    /// `total_kcal - kcal_target`
    pub kcal_gap: f64,
    /// Energy classification against the tolerance band
    pub kcal_status: NutrientStatus,
    /// Whether every ingredient had an energy value
    pub kcal_complete: bool,
    /// Per-nutrient comparisons, in reference declaration order
    pub nutrients: Vec<NutrientComparison>,
    /// Ranked and capped suggestions
    pub suggestions: Vec<Suggestion>,
    /// Ingredients matching a toxic keyword
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_warnings: Vec<SafetyWarning>,
}

impl RecipeAnalysisResult {
    /// Comparison for a nutrient
    #[must_use]
    pub fn nutrient(&self, nutrient_id: &str) -> Option<&NutrientComparison> {
        self.nutrients.iter().find(|n| n.nutrient_id == nutrient_id)
    }

    /// Copy with energy values and nutrient amounts rounded for display
    #[must_use]
    ///
    /// The gap is recomputed from the rounded total and target so the three
    /// displayed figures always agree.
    pub fn rounded(&self, precision: u32) -> Self {
        let amount_precision = precision.max(2);
        let total_kcal = round_to(self.total_kcal, precision);
        let kcal_target = round_to(self.kcal_target, precision);
        Self {
            total_kcal,
            kcal_target,
            kcal_gap: round_to(total_kcal - kcal_target, precision),
            nutrients: self
                .nutrients
                .iter()
                .map(|n| NutrientComparison {
                    actual: round_to(n.actual, amount_precision),
                    target: round_to(n.target, amount_precision),
                    min: n.min.map(|v| round_to(v, amount_precision)),
                    max: n.max.map(|v| round_to(v, amount_precision)),
                    ..n.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(total_kcal: f64, kcal_target: f64) -> RecipeAnalysisResult {
        RecipeAnalysisResult {
            recipe_name: "dinner".into(),
            total_kcal,
            kcal_target,
            kcal_gap: total_kcal - kcal_target,
            kcal_status: NutrientStatus::Low,
            kcal_complete: true,
            nutrients: Vec::new(),
            suggestions: Vec::new(),
            safety_warnings: Vec::new(),
        }
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(465.354, 0) - 465.0).abs() < f64::EPSILON);
        assert!((round_to(37.2049, 2) - 37.2).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_gap_matches_rounded_totals() {
        let whole = result(100.4, 99.6).rounded(0);
        assert!((whole.total_kcal - 100.0).abs() < f64::EPSILON);
        assert!((whole.kcal_target - 100.0).abs() < f64::EPSILON);
        assert!(whole.kcal_gap.abs() < f64::EPSILON);

        let tenths = result(218.84, 744.56).rounded(1);
        assert!((tenths.kcal_gap - (-525.8)).abs() < 1e-9);
        assert!((tenths.kcal_gap - (tenths.total_kcal - tenths.kcal_target)).abs() < 1e-9);
    }
}
