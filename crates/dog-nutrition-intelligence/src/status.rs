// ABOUTME: Classifies actual nutrient and energy intake against per-day targets
// ABOUTME: Incomplete data is unknown; bounds are inclusive; kcal uses a tolerance band around the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::KcalStatusConfig;
use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::{
    DailyRequirement, NutrientActual, NutrientComparison, NutrientStatus,
};

/// Classify an amount against optional inclusive bounds
///
/// Order matters: incomplete data wins over everything, then `low`, then `high`.
#[must_use]
pub fn classify(amount: f64, complete: bool, min: Option<f64>, max: Option<f64>) -> NutrientStatus {
    if !complete {
        return NutrientStatus::Unknown;
    }
    if min.is_some_and(|min| amount < min) {
        return NutrientStatus::Low;
    }
    if max.is_some_and(|max| amount > max) {
        return NutrientStatus::High;
    }
    NutrientStatus::Ok
}

/// Classify a nutrient total against its per-day requirement
#[must_use]
pub fn classify_nutrient(actual: &NutrientActual, requirement: &DailyRequirement) -> NutrientStatus {
    classify(actual.amount, actual.complete, requirement.min, requirement.max)
}

/// Classify the energy total against the tolerance band around the kcal target
#[must_use]
pub fn classify_energy(
    actual: &NutrientActual,
    target_kcal: f64,
    band: &KcalStatusConfig,
) -> NutrientStatus {
    let (min, max) = band.band(target_kcal);
    classify(actual.amount, actual.complete, Some(min), Some(max))
}

/// Build the comparison record for one nutrient
///
/// # Errors
///
/// Returns `InternalError` if the total and the requirement describe different nutrients
pub fn compare_nutrient(
    actual: &NutrientActual,
    requirement: &DailyRequirement,
) -> AppResult<NutrientComparison> {
    if actual.nutrient_id != requirement.nutrient_id {
        return Err(AppError::internal(format!(
            "cannot compare {} against the requirement for {}",
            actual.nutrient_id, requirement.nutrient_id
        )));
    }

    Ok(NutrientComparison {
        nutrient_id: actual.nutrient_id.clone(),
        unit: requirement.unit.clone(),
        actual: actual.amount,
        target: requirement.target,
        min: requirement.min,
        max: requirement.max,
        status: classify_nutrient(actual, requirement),
        complete: actual.complete,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use dog_nutrition_core::models::{NutrientRequirement, RequirementBasis};

    fn requirement(min: Option<f64>, target: f64, max: Option<f64>) -> DailyRequirement {
        DailyRequirement::from_per_day(
            NutrientRequirement::new("ca_mg", "mg", RequirementBasis::PerDay, min, target, max, "t")
                .unwrap(),
        )
        .unwrap()
    }

    fn actual(amount: f64, complete: bool) -> NutrientActual {
        NutrientActual {
            nutrient_id: "ca_mg".into(),
            amount,
            complete,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let req = requirement(Some(900.0), 1100.0, Some(4600.0));
        assert_eq!(classify_nutrient(&actual(900.0, true), &req), NutrientStatus::Ok);
        assert_eq!(classify_nutrient(&actual(4600.0, true), &req), NutrientStatus::Ok);
        assert_eq!(classify_nutrient(&actual(899.99, true), &req), NutrientStatus::Low);
        assert_eq!(classify_nutrient(&actual(4600.01, true), &req), NutrientStatus::High);
    }

    #[test]
    fn test_incomplete_is_unknown_even_when_low() {
        let req = requirement(Some(900.0), 1100.0, None);
        assert_eq!(classify_nutrient(&actual(0.0, false), &req), NutrientStatus::Unknown);
        assert_eq!(classify_nutrient(&actual(2000.0, false), &req), NutrientStatus::Unknown);
    }

    #[test]
    fn test_missing_max_means_anything_above_min_is_ok() {
        let req = requirement(Some(900.0), 1100.0, None);
        assert_eq!(classify_nutrient(&actual(1e9, true), &req), NutrientStatus::Ok);
    }

    #[test]
    fn test_energy_band() {
        let band = KcalStatusConfig::default();
        let kcal = |amount| NutrientActual {
            nutrient_id: "kcal".into(),
            amount,
            complete: true,
        };
        assert_eq!(classify_energy(&kcal(900.0), 1000.0, &band), NutrientStatus::Ok);
        assert_eq!(classify_energy(&kcal(1100.0), 1000.0, &band), NutrientStatus::Ok);
        assert_eq!(classify_energy(&kcal(899.0), 1000.0, &band), NutrientStatus::Low);
        assert_eq!(classify_energy(&kcal(1101.0), 1000.0, &band), NutrientStatus::High);
    }

    #[test]
    fn test_compare_rejects_mismatched_nutrients() {
        let req = requirement(None, 1100.0, None);
        let protein = NutrientActual {
            nutrient_id: "protein_g".into(),
            amount: 10.0,
            complete: true,
        };
        assert!(compare_nutrient(&protein, &req).is_err());

        let comparison = compare_nutrient(&actual(1200.0, true), &req).unwrap();
        assert_eq!(comparison.status, NutrientStatus::Ok);
        assert_eq!(comparison.unit, "mg");
    }
}
