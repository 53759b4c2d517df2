// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Exercises DOG_NUTRITION_* overrides, validation failures and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use dog_nutrition::config::intelligence::{env_vars, ConfigError, TieBreak};
use dog_nutrition::errors::{AppError, ErrorCode};
use dog_nutrition::models::{ActivityLevel, LifeStage};
use dog_nutrition::{FactorKey, IntelligenceConfig, NutritionConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 7] = [
    env_vars::KCAL_TOLERANCE_LOWER,
    env_vars::KCAL_TOLERANCE_UPPER,
    env_vars::MAX_SUGGESTIONS,
    env_vars::SUGGESTION_PRIORITY,
    env_vars::SUGGESTION_TIE_BREAK,
    env_vars::DISPLAY_PRECISION,
    env_vars::ACTIVITY_FACTOR_OVERRIDES,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = NutritionConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.activity_factors.len(), 18);
}

#[test]
#[serial]
fn test_load_without_environment_matches_defaults() {
    common::init_test_logging();
    clear_env();

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.nutrition, NutritionConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides_applied() {
    clear_env();
    env::set_var(env_vars::KCAL_TOLERANCE_LOWER, "0.05");
    env::set_var(env_vars::KCAL_TOLERANCE_UPPER, "0.2");
    env::set_var(env_vars::MAX_SUGGESTIONS, "5");
    env::set_var(env_vars::SUGGESTION_PRIORITY, "fat_g, protein_g");
    env::set_var(env_vars::SUGGESTION_TIE_BREAK, "deficit-magnitude");
    env::set_var(env_vars::DISPLAY_PRECISION, "2");

    let config = IntelligenceConfig::load().unwrap().nutrition;

    assert!((config.kcal_status.lower_fraction - 0.05).abs() < f64::EPSILON);
    assert!((config.kcal_status.upper_fraction - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.suggestions.max_suggestions, 5);
    assert_eq!(config.suggestions.priority, ["fat_g", "protein_g"]);
    assert_eq!(config.suggestions.tie_break, TieBreak::DeficitMagnitude);
    assert_eq!(config.energy.display_precision, 2);

    clear_env();
}

#[test]
#[serial]
fn test_activity_factor_overrides_merge_into_table() {
    clear_env();
    env::set_var(
        env_vars::ACTIVITY_FACTOR_OVERRIDES,
        "adult/neutered/moderate=1.5, senior:intact:low=1.3",
    );

    let config = IntelligenceConfig::load().unwrap().nutrition;
    let table = &config.activity_factors;

    let neutered = FactorKey::new(LifeStage::Adult, true, ActivityLevel::Moderate);
    let senior = FactorKey::new(LifeStage::Senior, false, ActivityLevel::Low);
    let untouched = FactorKey::new(LifeStage::Puppy, false, ActivityLevel::Moderate);
    assert!((table.get(&neutered).unwrap() - 1.5).abs() < f64::EPSILON);
    assert!((table.get(&senior).unwrap() - 1.3).abs() < f64::EPSILON);
    assert!((table.get(&untouched).unwrap() - 2.0).abs() < f64::EPSILON);
    assert_eq!(table.len(), 18);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var(env_vars::MAX_SUGGESTIONS, "lots");

    let err = IntelligenceConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_value_fails_validation() {
    clear_env();
    env::set_var(env_vars::KCAL_TOLERANCE_UPPER, "1.5");
    assert!(IntelligenceConfig::load().is_err());

    clear_env();
    env::set_var(env_vars::MAX_SUGGESTIONS, "0");
    assert!(IntelligenceConfig::load().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_slow_adult_high_factor_rejected() {
    clear_env();
    env::set_var(env_vars::ACTIVITY_FACTOR_OVERRIDES, "adult/intact/high=1.8");

    assert!(IntelligenceConfig::load().is_err());

    clear_env();
}

#[test]
fn test_config_errors_map_to_config_invalid() {
    let err: AppError =
        ConfigError::ValueOutOfRange("suggestions.max_suggestions must be >= 1".into()).into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}
