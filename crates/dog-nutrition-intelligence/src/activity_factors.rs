// ABOUTME: Resolves a dog profile to its maintenance energy multiplier
// ABOUTME: Table-driven lookup with per-call overrides; a missing combination is a configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{ActivityFactorTable, FactorKey};
use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::DogProfile;
use tracing::debug;

/// Resolve the activity factor for a profile
///
/// `overrides` take precedence over `table` for this call only. There is no
/// fallback value: a combination absent from both is an error.
///
/// # Errors
///
/// Returns `ConfigMissing` naming the key (e.g. `senior/intact/high`) when no
/// factor is configured, and `ConfigInvalid` when the factor found is not
/// positive or an adult high-activity factor is below the floor, whether it
/// came from the table or from `overrides`
pub fn resolve_activity_factor(
    profile: &DogProfile,
    table: &ActivityFactorTable,
    overrides: Option<&ActivityFactorTable>,
) -> AppResult<f64> {
    let key = FactorKey::for_profile(profile);
    let factor = overrides
        .and_then(|o| o.get(&key))
        .or_else(|| table.get(&key))
        .ok_or_else(|| AppError::config_missing(format!("activity_factor {key}")))?;

    key.check_factor(factor)
        .map_err(|e| AppError::from(e).with_resource_id(key.to_string()))?;

    debug!(key = %key, factor, "Resolved activity factor");
    Ok(factor)
}
