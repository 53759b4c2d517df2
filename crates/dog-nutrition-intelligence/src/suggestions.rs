// ABOUTME: Turns classified energy and nutrient gaps into ranked, capped, actionable suggestions
// ABOUTME: Rule-based wording with a pluggable ranking policy (priority list, tie-break, cap)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion generation.
//!
//! Candidates are produced for every energy or nutrient status that calls for
//! action (`low`, `high`) or for a notice (`unknown`). A [`SuggestionRanker`]
//! then orders and caps them. The default [`PriorityRanker`] puts the energy
//! suggestion first, then the configured priority nutrients, then the rest.

use crate::config::intelligence::{SuggestionConfig, TieBreak};
use dog_nutrition_core::constants::KCAL;
use dog_nutrition_core::models::{NutrientComparison, NutrientStatus, Suggestion, SuggestionKind};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Energy position of a recipe relative to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyGap {
    /// Energy supplied by the recipe (kcal)
    pub actual: f64,
    /// Energy target (kcal/day)
    pub target: f64,
    /// Classification against the tolerance band
    pub status: NutrientStatus,
}

/// An unranked suggestion with the facts a ranker orders by
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionCandidate {
    /// The suggestion itself
    pub suggestion: Suggestion,
    /// Whether this is the recipe-wide energy suggestion
    pub is_energy: bool,
    /// Position of the nutrient in the reference table
    pub declaration_index: usize,
    /// Relative size of the gap (0 for notices)
    pub severity: f64,
}

/// Ordering and capping policy for suggestions
pub trait SuggestionRanker: Send + Sync {
    /// Order candidates and keep the ones to show
    fn rank(&self, candidates: Vec<SuggestionCandidate>) -> Vec<Suggestion>;
}

/// Energy first, then a fixed nutrient priority list, then reference order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityRanker {
    priority: Vec<String>,
    tie_break: TieBreak,
    max_suggestions: usize,
}

impl PriorityRanker {
    /// Build a ranker
    #[must_use]
    pub const fn new(priority: Vec<String>, tie_break: TieBreak, max_suggestions: usize) -> Self {
        Self {
            priority,
            tie_break,
            max_suggestions,
        }
    }

    /// Build a ranker from configuration
    #[must_use]
    pub fn from_config(config: &SuggestionConfig) -> Self {
        Self::new(
            config.priority.clone(),
            config.tie_break,
            config.max_suggestions,
        )
    }

    fn priority_rank(&self, nutrient_id: &str) -> usize {
        self.priority
            .iter()
            .position(|p| p == nutrient_id)
            .unwrap_or(self.priority.len())
    }

    fn compare(&self, a: &SuggestionCandidate, b: &SuggestionCandidate) -> Ordering {
        b.is_energy
            .cmp(&a.is_energy)
            .then_with(|| {
                self.priority_rank(&a.suggestion.nutrient_id)
                    .cmp(&self.priority_rank(&b.suggestion.nutrient_id))
            })
            .then_with(|| match self.tie_break {
                TieBreak::DeclarationOrder => Ordering::Equal,
                TieBreak::DeficitMagnitude => b.severity.total_cmp(&a.severity),
            })
            .then_with(|| a.declaration_index.cmp(&b.declaration_index))
    }
}

impl SuggestionRanker for PriorityRanker {
    fn rank(&self, mut candidates: Vec<SuggestionCandidate>) -> Vec<Suggestion> {
        candidates.sort_by(|a, b| self.compare(a, b));
        candidates
            .into_iter()
            .take(self.max_suggestions)
            .map(|candidate| candidate.suggestion)
            .collect()
    }
}

/// Rule-based suggestion generator
#[derive(Debug, Clone)]
pub struct SuggestionGenerator<R: SuggestionRanker = PriorityRanker> {
    ranker: R,
    food_hints: BTreeMap<String, String>,
}

impl SuggestionGenerator {
    /// Generator with the default priority ranker
    #[must_use]
    pub fn from_config(config: &SuggestionConfig) -> Self {
        Self::with_ranker(PriorityRanker::from_config(config), config)
    }
}

impl<R: SuggestionRanker> SuggestionGenerator<R> {
    /// Generator with a custom ranking policy
    #[must_use]
    pub fn with_ranker(ranker: R, config: &SuggestionConfig) -> Self {
        Self {
            ranker,
            food_hints: config.food_hints.clone(),
        }
    }

    /// Ranked, capped suggestions for an analysis
    #[must_use]
    pub fn generate(&self, energy: &EnergyGap, nutrients: &[NutrientComparison]) -> Vec<Suggestion> {
        self.ranker.rank(self.candidates(energy, nutrients))
    }

    /// Every suggestion the rules produce, unranked and uncapped
    #[must_use]
    pub fn candidates(
        &self,
        energy: &EnergyGap,
        nutrients: &[NutrientComparison],
    ) -> Vec<SuggestionCandidate> {
        let energy_candidate = energy_suggestion(energy).map(|(suggestion, severity)| {
            SuggestionCandidate {
                suggestion,
                is_energy: true,
                declaration_index: 0,
                severity,
            }
        });

        let nutrient_candidates = nutrients.iter().enumerate().filter_map(|(index, comparison)| {
            self.nutrient_suggestion(comparison)
                .map(|(suggestion, severity)| SuggestionCandidate {
                    suggestion,
                    is_energy: false,
                    declaration_index: index,
                    severity,
                })
        });

        energy_candidate.into_iter().chain(nutrient_candidates).collect()
    }

    fn nutrient_suggestion(&self, comparison: &NutrientComparison) -> Option<(Suggestion, f64)> {
        let NutrientComparison {
            nutrient_id,
            unit,
            actual,
            target,
            ..
        } = comparison;

        match comparison.status {
            NutrientStatus::Ok => None,
            NutrientStatus::Unknown => Some((
                Suggestion {
                    kind: SuggestionKind::InsufficientData,
                    nutrient_id: nutrient_id.clone(),
                    message: format!(
                        "Data incomplete for {nutrient_id}: at least one ingredient has no value, cannot evaluate"
                    ),
                    adjustment_percent: None,
                },
                0.0,
            )),
            NutrientStatus::Low => {
                let shortfall = target - actual;
                let hint = self.food_hints.get(nutrient_id).map_or_else(
                    || format!("an ingredient rich in {nutrient_id}"),
                    Clone::clone,
                );
                let minimum = comparison.min.unwrap_or(*target);
                Some((
                    Suggestion {
                        kind: SuggestionKind::IncreaseNutrient,
                        nutrient_id: nutrient_id.clone(),
                        message: format!(
                            "Increase {nutrient_id} by about {shortfall:.1} {unit}/day to reach the {target:.1} {unit} target \
                             (currently {actual:.1}, minimum {minimum:.1}); add {hint}"
                        ),
                        adjustment_percent: (*actual > 0.0).then(|| shortfall / actual * 100.0),
                    },
                    relative_gap(shortfall, *target),
                ))
            }
            NutrientStatus::High => {
                let max = comparison.max.unwrap_or(*target);
                let excess = actual - max;
                Some((
                    Suggestion {
                        kind: SuggestionKind::ReduceNutrient,
                        nutrient_id: nutrient_id.clone(),
                        message: format!(
                            "Reduce {nutrient_id} by at least {excess:.1} {unit}/day to stay under the {max:.1} {unit} maximum \
                             (currently {actual:.1}); cut back the ingredients supplying most of it"
                        ),
                        adjustment_percent: Some(-(excess / actual * 100.0)),
                    },
                    relative_gap(excess, max),
                ))
            }
        }
    }
}

fn relative_gap(gap: f64, reference: f64) -> f64 {
    if reference > 0.0 {
        gap / reference
    } else {
        gap
    }
}

fn energy_suggestion(energy: &EnergyGap) -> Option<(Suggestion, f64)> {
    let EnergyGap {
        actual,
        target,
        status,
    } = *energy;

    let (message, adjustment_percent) = match status {
        NutrientStatus::Ok => return None,
        NutrientStatus::Unknown => (
            "Energy content incomplete: at least one ingredient has no kcal value, cannot evaluate the energy gap"
                .to_owned(),
            None,
        ),
        NutrientStatus::Low if actual <= 0.0 => (
            format!("Recipe provides no energy; add energy-dense ingredients to reach about {target:.0} kcal/day"),
            None,
        ),
        NutrientStatus::Low => {
            let percent = (target / actual - 1.0) * 100.0;
            (
                format!(
                    "Scale the whole recipe up by about {percent:.0}% to reach {target:.0} kcal/day (currently {actual:.0} kcal)"
                ),
                Some(percent),
            )
        }
        NutrientStatus::High => {
            let percent = (1.0 - target / actual) * 100.0;
            (
                format!(
                    "Scale the whole recipe down by about {percent:.0}% to reach {target:.0} kcal/day (currently {actual:.0} kcal)"
                ),
                Some(-percent),
            )
        }
    };

    let kind = if status == NutrientStatus::Unknown {
        SuggestionKind::InsufficientData
    } else {
        SuggestionKind::ScaleRecipe
    };
    Some((
        Suggestion {
            kind,
            nutrient_id: KCAL.to_owned(),
            message,
            adjustment_percent,
        },
        relative_gap((target - actual).abs(), target),
    ))
}
