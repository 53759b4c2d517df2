// ABOUTME: Converts reference nutrient requirements into absolute per-day targets for a given MER
// ABOUTME: Also provides the default adult maintenance reference table expressed per 1000 kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dog_nutrition_core::constants::{energy::KCAL_BASIS, nutrients};
use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::{
    DailyRequirement, NutrientRequirement, ReferenceTable, RequirementBasis,
};
use tracing::debug;

/// Source label of the built-in reference table
pub const DEFAULT_REFERENCE_SOURCE: &str = "NRC 2006 adult maintenance";

/// Convert one requirement to a per-day basis
///
/// `per_1000kcal` amounts are scaled by `mer / 1000`, each bound on its own;
/// `per_day` amounts pass through unchanged.
///
/// # Errors
///
/// Returns `InvalidInput` if `mer` is not positive, and `InvalidReferenceData`
/// if the converted requirement fails validation
pub fn to_daily_requirement(
    requirement: &NutrientRequirement,
    mer: f64,
) -> AppResult<DailyRequirement> {
    if !mer.is_finite() || mer <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "MER must be greater than 0 (got {mer})"
        )));
    }

    let daily = match requirement.basis {
        RequirementBasis::PerDay => requirement.clone(),
        RequirementBasis::Per1000Kcal => {
            let scale = mer / KCAL_BASIS;
            NutrientRequirement {
                basis: RequirementBasis::PerDay,
                min: requirement.min.map(|v| v * scale),
                target: requirement.target * scale,
                max: requirement.max.map(|v| v * scale),
                ..requirement.clone()
            }
        }
    };
    DailyRequirement::try_from(daily)
}

/// Per-day targets for every row of `reference`, in declaration order
///
/// Targets depend on the MER of one profile and are computed fresh for every call.
///
/// # Errors
///
/// Propagates the first error of [`to_daily_requirement`]
pub fn resolve_daily_targets(
    reference: &ReferenceTable,
    mer: f64,
) -> AppResult<Vec<DailyRequirement>> {
    let targets = reference
        .requirements()
        .iter()
        .map(|requirement| to_daily_requirement(requirement, mer))
        .collect::<AppResult<Vec<_>>>()?;
    debug!(mer, nutrients = targets.len(), "Resolved daily nutrient targets");
    Ok(targets)
}

/// Adult maintenance reference table, per 1000 kcal (min / target / max)
///
/// # Errors
///
/// Returns `InvalidReferenceData` only if the built-in rows were edited into an invalid state
pub fn default_reference_table() -> AppResult<ReferenceTable> {
    let rows: [(&str, &str, f64, f64, Option<f64>); 16] = [
        (nutrients::PROTEIN_G, "g", 45.0, 52.0, None),
        (nutrients::FAT_G, "g", 13.8, 16.0, None),
        (nutrients::CALCIUM_MG, "mg", 1250.0, 1500.0, Some(6250.0)),
        (nutrients::PHOSPHORUS_MG, "mg", 1000.0, 1200.0, Some(4000.0)),
        (nutrients::POTASSIUM_MG, "mg", 1500.0, 1700.0, None),
        (nutrients::SODIUM_MG, "mg", 200.0, 300.0, Some(3200.0)),
        (nutrients::MAGNESIUM_MG, "mg", 150.0, 170.0, None),
        (nutrients::IRON_MG, "mg", 7.5, 10.0, Some(75.0)),
        (nutrients::ZINC_MG, "mg", 15.0, 20.0, Some(300.0)),
        (nutrients::COPPER_MG, "mg", 1.5, 1.8, Some(30.0)),
        (nutrients::MANGANESE_MG, "mg", 1.2, 1.6, Some(24.0)),
        (nutrients::SELENIUM_UG, "µg", 90.0, 100.0, Some(900.0)),
        (nutrients::IODINE_UG, "µg", 220.0, 300.0, Some(2200.0)),
        (nutrients::VITAMIN_A_UG, "µg", 379.0, 500.0, Some(18750.0)),
        (nutrients::VITAMIN_D_UG, "µg", 3.4, 5.0, Some(80.0)),
        (nutrients::VITAMIN_E_MG, "mg", 7.5, 10.0, None),
    ];

    let requirements = rows
        .into_iter()
        .map(|(nutrient_id, unit, min, target, max)| {
            NutrientRequirement::new(
                nutrient_id,
                unit,
                RequirementBasis::Per1000Kcal,
                Some(min),
                target,
                max,
                DEFAULT_REFERENCE_SOURCE,
            )
        })
        .collect::<AppResult<Vec<_>>>()?;
    ReferenceTable::new(requirements)
}
