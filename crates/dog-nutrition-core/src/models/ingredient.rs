// ABOUTME: Ingredient composition model with explicit known/unknown nutrient values
// ABOUTME: Ingredient and NutrientValue keep missing data distinct from a measured zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Amount of one nutrient per 100 g of an ingredient
///
/// Serialized as a plain number, or `null` when the amount is unknown. A key
/// missing from the composition map reads as [`NutrientValue::Unknown`] too;
/// it never reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum NutrientValue {
    /// Measured amount per 100 g
    Known(f64),
    /// No data for this nutrient
    #[default]
    Unknown,
}

impl NutrientValue {
    /// The measured amount, if known
    #[must_use]
    pub const fn known(self) -> Option<f64> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown => None,
        }
    }

    /// Whether the amount is known
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<f64>> for NutrientValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<NutrientValue> for Option<f64> {
    fn from(value: NutrientValue) -> Self {
        value.known()
    }
}

/// Food ingredient with a sparse per-100 g composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Nutrient id → amount per 100 g
    #[serde(default)]
    pub per_100g: BTreeMap<String, NutrientValue>,
}

impl Ingredient {
    /// Create an ingredient with an empty composition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            per_100g: BTreeMap::new(),
        }
    }

    /// Add a known amount per 100 g
    #[must_use]
    pub fn with_nutrient(mut self, nutrient_id: impl Into<String>, per_100g: f64) -> Self {
        self.per_100g
            .insert(nutrient_id.into(), NutrientValue::Known(per_100g));
        self
    }

    /// Mark a nutrient as explicitly unknown
    #[must_use]
    pub fn with_unknown(mut self, nutrient_id: impl Into<String>) -> Self {
        self.per_100g
            .insert(nutrient_id.into(), NutrientValue::Unknown);
        self
    }

    /// Amount of a nutrient per 100 g; absent keys are unknown
    #[must_use]
    pub fn nutrient(&self, nutrient_id: &str) -> NutrientValue {
        self.per_100g
            .get(nutrient_id)
            .copied()
            .unwrap_or(NutrientValue::Unknown)
    }

    /// Known amounts, in key order
    pub fn known_nutrients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.per_100g
            .iter()
            .filter_map(|(id, value)| value.known().map(|v| (id.as_str(), v)))
    }

    /// Check the composition holds only finite, non-negative amounts
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` naming the offending nutrient
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::reference_data("ingredient id must not be empty"));
        }
        for (nutrient_id, amount) in self.known_nutrients() {
            if !amount.is_finite() || amount < 0.0 {
                return Err(AppError::reference_data(format!(
                    "ingredient '{}': {nutrient_id} must be a non-negative number (got {amount})",
                    self.id
                ))
                .with_resource_id(self.id.clone()));
            }
        }
        Ok(())
    }
}
