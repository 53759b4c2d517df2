// ABOUTME: Resting and maintenance energy requirement calculations for dogs
// ABOUTME: RER = 70 x weight_kg^0.75 and MER = RER x activity factor, unrounded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculator Module
//!
//! Implements the allometric resting energy equation used in veterinary
//! nutrition and its maintenance multiple.
//!
//! # References
//!
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*.
//!   National Academies Press. Chapter 3, Energy.
//!
//! Results stay in full floating point precision; rounding happens only when a
//! report is presented.

use crate::config::intelligence::EnergyConfig;
use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::EnergyRequirement;

/// Calculate Resting Energy Requirement (kcal/day)
///
/// Formula: `RER = coefficient x weight_kg ^ exponent` (70 and 0.75 by default)
///
/// # Errors
///
/// Returns `InvalidInput` if the weight is not a positive finite number
pub fn calculate_rer(weight_kg: f64, config: &EnergyConfig) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight_kg must be greater than 0 (got {weight_kg})"
        )));
    }
    Ok(config.rer_coefficient * weight_kg.powf(config.rer_exponent))
}

/// Calculate Maintenance Energy Requirement (kcal/day)
///
/// # Errors
///
/// Returns `InvalidInput` if RER is not positive and `ConfigInvalid` if the factor is not
pub fn calculate_mer(rer: f64, activity_factor: f64) -> AppResult<f64> {
    if !rer.is_finite() || rer <= 0.0 {
        return Err(AppError::invalid_input("RER must be positive"));
    }
    if !activity_factor.is_finite() || activity_factor <= 0.0 {
        return Err(AppError::config_invalid(format!(
            "activity factor must be positive (got {activity_factor})"
        )));
    }
    Ok(rer * activity_factor)
}

/// RER and MER for a weight and an already resolved activity factor
///
/// # Errors
///
/// Propagates the errors of [`calculate_rer`] and [`calculate_mer`]
pub fn calculate_energy_requirement(
    weight_kg: f64,
    activity_factor: f64,
    config: &EnergyConfig,
) -> AppResult<EnergyRequirement> {
    let rer = calculate_rer(weight_kg, config)?;
    let mer = calculate_mer(rer, activity_factor)?;
    Ok(EnergyRequirement {
        activity_factor,
        rer,
        mer,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use dog_nutrition_core::errors::ErrorCode;

    #[test]
    fn test_rer_for_reference_weight() {
        let rer = calculate_rer(12.5, &EnergyConfig::default()).unwrap();
        // 70 x 12.5^0.75 = 465.35...
        assert!((rer - 465.35).abs() < 0.01, "RER was {rer}");
    }

    #[test]
    fn test_rer_for_unit_weight_equals_coefficient() {
        let rer = calculate_rer(1.0, &EnergyConfig::default()).unwrap();
        assert!((rer - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        for weight in [0.0, -1.0, f64::NAN] {
            let err = calculate_rer(weight, &EnergyConfig::default()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_mer_is_rer_times_factor() {
        let energy = calculate_energy_requirement(12.5, 2.0, &EnergyConfig::default()).unwrap();
        assert!((energy.mer - energy.rer * 2.0).abs() < f64::EPSILON);
        assert!((energy.mer - 930.7).abs() < 0.1, "MER was {}", energy.mer);
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        let err = calculate_mer(465.0, 0.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_energy_is_monotonic_in_weight_and_factor() {
        let config = EnergyConfig::default();
        let mut previous = 0.0;
        for weight in [1.0, 2.5, 5.0, 12.5, 30.0, 60.0] {
            let mer = calculate_energy_requirement(weight, 1.6, &config).unwrap().mer;
            assert!(mer > previous);
            previous = mer;
        }

        let low = calculate_energy_requirement(20.0, 1.4, &config).unwrap().mer;
        let high = calculate_energy_requirement(20.0, 1.8, &config).unwrap().mer;
        assert!(high > low);
    }
}
