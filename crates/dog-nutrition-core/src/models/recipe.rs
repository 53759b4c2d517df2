// ABOUTME: Recipe models: an ordered list of ingredient/gram pairs
// ABOUTME: Recipe and RecipeItem with validation of positive gram weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeItem {
    /// Identifier resolved against the ingredient lookup
    pub ingredient_id: String,
    /// Weight in grams, must be positive
    pub grams: f64,
}

/// Candidate recipe; item order is preserved for display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Recipe name
    pub name: String,
    /// Ingredient lines
    pub items: Vec<RecipeItem>,
}

impl Recipe {
    /// Create an empty recipe
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_item(mut self, ingredient_id: impl Into<String>, grams: f64) -> Self {
        self.items.push(RecipeItem {
            ingredient_id: ingredient_id.into(),
            grams,
        });
        self
    }

    /// Check the recipe has items and every item has a positive weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty recipe or a zero, negative or
    /// non-finite gram weight
    pub fn validate(&self) -> AppResult<()> {
        if self.items.is_empty() {
            return Err(AppError::invalid_input(format!(
                "recipe '{}' has no ingredients",
                self.name
            )));
        }
        for item in &self.items {
            if !item.grams.is_finite() || item.grams <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "grams for '{}' must be greater than 0 (got {})",
                    item.ingredient_id, item.grams
                ))
                .with_resource_id(item.ingredient_id.clone()));
            }
        }
        Ok(())
    }
}
