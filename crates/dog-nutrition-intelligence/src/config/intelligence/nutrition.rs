// ABOUTME: Nutrition engine configuration sections: energy equation, kcal band, suggestions and safety
// ABOUTME: Documented defaults for every tunable policy value used by the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ActivityFactorTable, ConfigError};
use dog_nutrition_core::constants::{energy, nutrients};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Highest display precision accepted for energy values
pub const MAX_DISPLAY_PRECISION: u32 = 6;

/// Nutrition engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Energy equation parameters
    pub energy: EnergyConfig,
    /// Maintenance multipliers per profile combination
    pub activity_factors: ActivityFactorTable,
    /// Tolerance band around the kcal target
    pub kcal_status: KcalStatusConfig,
    /// Suggestion ranking and capping policy
    pub suggestions: SuggestionConfig,
    /// Ingredient safety screen
    pub safety: SafetyConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.activity_factors.validate()?;
        self.kcal_status.validate()?;
        self.suggestions.validate()
    }
}

/// Parameters of `RER = coefficient * weight_kg ^ exponent`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Multiplier of the allometric term
    pub rer_coefficient: f64,
    /// Allometric exponent
    pub rer_exponent: f64,
    /// Decimal places used when presenting RER/MER/kcal values
    pub display_precision: u32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            rer_coefficient: energy::RER_COEFFICIENT,
            rer_exponent: energy::RER_EXPONENT,
            display_precision: 0,
        }
    }
}

impl EnergyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.rer_coefficient.is_finite() || self.rer_coefficient <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "energy.rer_coefficient must be > 0".into(),
            ));
        }
        if !self.rer_exponent.is_finite() || self.rer_exponent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "energy.rer_exponent must be > 0".into(),
            ));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::ValueOutOfRange(format!(
                "energy.display_precision must be <= {MAX_DISPLAY_PRECISION}"
            )));
        }
        Ok(())
    }
}

/// Tolerance band around the kcal target, as fractions of the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KcalStatusConfig {
    /// `low` below `target * (1 - lower_fraction)`
    pub lower_fraction: f64,
    /// `high` above `target * (1 + upper_fraction)`
    pub upper_fraction: f64,
}

impl Default for KcalStatusConfig {
    fn default() -> Self {
        Self {
            lower_fraction: 0.10,
            upper_fraction: 0.10,
        }
    }
}

impl KcalStatusConfig {
    /// Inclusive `(min, max)` band around a kcal target
    #[must_use]
    pub fn band(&self, target_kcal: f64) -> (f64, f64) {
        (
            target_kcal * (1.0 - self.lower_fraction),
            target_kcal * (1.0 + self.upper_fraction),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for fraction in [self.lower_fraction, self.upper_fraction] {
            if !(0.0..1.0).contains(&fraction) {
                return Err(ConfigError::InvalidRange(
                    "kcal_status tolerance fractions must be in [0, 1)",
                ));
            }
        }
        Ok(())
    }
}

/// How nutrients outside the priority list are ordered among themselves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Reference table declaration order
    #[default]
    DeclarationOrder,
    /// Largest relative deficit or excess first, then declaration order
    DeficitMagnitude,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeclarationOrder => f.write_str("declaration_order"),
            Self::DeficitMagnitude => f.write_str("deficit_magnitude"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "declaration_order" | "declaration" => Ok(Self::DeclarationOrder),
            "deficit_magnitude" | "magnitude" => Ok(Self::DeficitMagnitude),
            other => Err(ConfigError::Parse(format!(
                "tie break must be declaration_order or deficit_magnitude (got '{other}')"
            ))),
        }
    }
}

/// Suggestion ranking and capping policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned
    pub max_suggestions: usize,
    /// Nutrients ranked first, in this order, after the energy suggestion
    pub priority: Vec<String>,
    /// Ordering of nutrients not in `priority`
    pub tie_break: TieBreak,
    /// Food category hint per nutrient, used in "increase" suggestions
    pub food_hints: BTreeMap<String, String>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        let food_hints = [
            (nutrients::PROTEIN_G, "lean meat, eggs or fish"),
            (nutrients::FAT_G, "fatty fish or a little vegetable oil"),
            (nutrients::CALCIUM_MG, "a calcium source such as ground eggshell or bone meal"),
            (nutrients::PHOSPHORUS_MG, "meat or organ meat"),
            (nutrients::POTASSIUM_MG, "vegetables such as pumpkin or spinach"),
            (nutrients::SODIUM_MG, "a small pinch of salt"),
            (nutrients::MAGNESIUM_MG, "leafy greens or whole grains"),
            (nutrients::IRON_MG, "liver or red meat"),
            (nutrients::ZINC_MG, "beef or shellfish"),
            (nutrients::COPPER_MG, "liver"),
            (nutrients::MANGANESE_MG, "whole grains or mussels"),
            (nutrients::SELENIUM_UG, "fish or eggs"),
            (nutrients::IODINE_UG, "kelp or iodised salt"),
            (nutrients::VITAMIN_A_UG, "liver or sweet potato"),
            (nutrients::VITAMIN_D_UG, "oily fish such as sardines"),
            (nutrients::VITAMIN_E_MG, "sunflower oil or wheat germ"),
        ]
        .into_iter()
        .map(|(nutrient, hint)| (nutrient.to_owned(), hint.to_owned()))
        .collect();

        Self {
            max_suggestions: 3,
            priority: vec![
                nutrients::PROTEIN_G.to_owned(),
                nutrients::CALCIUM_MG.to_owned(),
                nutrients::PHOSPHORUS_MG.to_owned(),
            ],
            tie_break: TieBreak::DeclarationOrder,
            food_hints,
        }
    }
}

impl SuggestionConfig {
    /// Parse a comma-separated priority list
    #[must_use]
    pub fn parse_priority(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "suggestions.max_suggestions must be >= 1".into(),
            ));
        }
        for (index, key) in self.priority.iter().enumerate() {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidRange(
                    "suggestions.priority entries must not be empty",
                ));
            }
            if self.priority[..index].contains(key) {
                return Err(ConfigError::DuplicateKey(format!("suggestions.priority {key}")));
            }
        }
        Ok(())
    }
}

/// Keywords marking ingredients that are toxic to dogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Case-insensitive substrings matched against ingredient names
    pub toxic_keywords: Vec<String>,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        let toxic_keywords = [
            "onion", "garlic", "chive", "leek", "chocolate", "cocoa", "grape", "raisin",
            "xylitol", "alcohol", "macadamia", "avocado pit", "coffee", "tea leaf", "洋葱", "大蒜",
            "韭菜", "葱", "巧克力", "可可", "葡萄", "木糖醇", "酒精", "夏威夷果", "咖啡",
        ];
        Self {
            toxic_keywords: toxic_keywords.into_iter().map(str::to_owned).collect(),
        }
    }
}
