// ABOUTME: Engine configuration root with validated global instance and environment overrides
// ABOUTME: Loads defaults, applies DOG_NUTRITION_* variables, then validates every section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every policy value of the analysis engine (activity factor table, kcal
//! tolerance band, suggestion cap and priority, toxic keywords) lives here so
//! it can be changed without touching the calculation code. Values can be
//! overridden via environment variables with the `DOG_NUTRITION_` prefix.

mod activity_factors;
mod error;
mod nutrition;

pub use activity_factors::{
    ActivityFactorEntry, ActivityFactorTable, FactorKey, ADULT_HIGH_ACTIVITY_MIN_FACTOR,
};
pub use error::ConfigError;
pub use nutrition::{
    EnergyConfig, KcalStatusConfig, NutritionConfig, SafetyConfig, SuggestionConfig, TieBreak,
    MAX_DISPLAY_PRECISION,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Environment variable names
pub mod env_vars {
    /// Fraction below the kcal target still classified `ok`
    pub const KCAL_TOLERANCE_LOWER: &str = "DOG_NUTRITION_KCAL_TOLERANCE_LOWER";
    /// Fraction above the kcal target still classified `ok`
    pub const KCAL_TOLERANCE_UPPER: &str = "DOG_NUTRITION_KCAL_TOLERANCE_UPPER";
    /// Suggestion cap
    pub const MAX_SUGGESTIONS: &str = "DOG_NUTRITION_MAX_SUGGESTIONS";
    /// Comma-separated nutrient priority list
    pub const SUGGESTION_PRIORITY: &str = "DOG_NUTRITION_SUGGESTION_PRIORITY";
    /// `declaration_order` or `deficit_magnitude`
    pub const SUGGESTION_TIE_BREAK: &str = "DOG_NUTRITION_SUGGESTION_TIE_BREAK";
    /// Decimal places for energy values
    pub const DISPLAY_PRECISION: &str = "DOG_NUTRITION_DISPLAY_PRECISION";
    /// `stage:neuter:activity=factor,...`
    pub const ACTIVITY_FACTOR_OVERRIDES: &str = "DOG_NUTRITION_ACTIVITY_FACTOR_OVERRIDES";
}

/// Root configuration of the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Nutrition analysis configuration
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.nutrition;

        // Kcal tolerance band
        Self::apply_env_var(
            env_vars::KCAL_TOLERANCE_LOWER,
            &mut nutrition.kcal_status.lower_fraction,
        )?;
        Self::apply_env_var(
            env_vars::KCAL_TOLERANCE_UPPER,
            &mut nutrition.kcal_status.upper_fraction,
        )?;

        // Suggestion policy
        Self::apply_env_var(
            env_vars::MAX_SUGGESTIONS,
            &mut nutrition.suggestions.max_suggestions,
        )?;
        Self::apply_env_var(
            env_vars::SUGGESTION_TIE_BREAK,
            &mut nutrition.suggestions.tie_break,
        )?;
        if let Ok(val) = env::var(env_vars::SUGGESTION_PRIORITY) {
            nutrition.suggestions.priority = SuggestionConfig::parse_priority(&val);
        }

        // Display
        Self::apply_env_var(
            env_vars::DISPLAY_PRECISION,
            &mut nutrition.energy.display_precision,
        )?;

        // Activity factors
        if let Ok(val) = env::var(env_vars::ACTIVITY_FACTOR_OVERRIDES) {
            let overrides = ActivityFactorTable::parse_overrides(&val)?;
            nutrition.activity_factors = nutrition.activity_factors.merged_with(&overrides);
        }

        Ok(self)
    }
}
