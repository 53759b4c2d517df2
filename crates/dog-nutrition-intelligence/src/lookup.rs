// ABOUTME: Synchronous read-only lookup capabilities for ingredients and reference requirement tables
// ABOUTME: Traits consumed by the analyzer plus in-memory catalog and per-life-stage table implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data-access seams of the engine.
//!
//! The engine never fetches data itself. Callers hand it something that
//! implements [`IngredientLookup`] and [`NutrientReferenceLookup`], already
//! populated by whatever import process owns the data.

use dog_nutrition_core::errors::{AppError, AppResult};
use dog_nutrition_core::models::{Ingredient, LifeStage, ReferenceTable};
use std::collections::{BTreeMap, HashMap};

/// Ingredient composition lookup by identifier
pub trait IngredientLookup {
    /// Ingredient for `id`, or `None` when it is unknown
    fn find_ingredient(&self, id: &str) -> Option<&Ingredient>;
}

/// Reference requirement lookup for a life stage
pub trait NutrientReferenceLookup {
    /// Requirement table to use for `life_stage`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no table covers the life stage
    fn reference_table(&self, life_stage: LifeStage) -> AppResult<&ReferenceTable>;
}

impl IngredientLookup for HashMap<String, Ingredient> {
    fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.get(id)
    }
}

impl IngredientLookup for BTreeMap<String, Ingredient> {
    fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.get(id)
    }
}

/// A single table serves every life stage
impl NutrientReferenceLookup for ReferenceTable {
    fn reference_table(&self, _life_stage: LifeStage) -> AppResult<&ReferenceTable> {
        Ok(self)
    }
}

/// In-memory ingredient catalog keyed by id
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    ingredients: HashMap<String, Ingredient>,
}

impl IngredientCatalog {
    /// Build a validated catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an invalid composition or a duplicate id
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> AppResult<Self> {
        let mut catalog = Self::default();
        for ingredient in ingredients {
            catalog.insert(ingredient)?;
        }
        Ok(catalog)
    }

    /// Add one ingredient
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an invalid composition or a duplicate id
    pub fn insert(&mut self, ingredient: Ingredient) -> AppResult<()> {
        ingredient.validate()?;
        if self.ingredients.contains_key(&ingredient.id) {
            return Err(AppError::reference_data(format!(
                "duplicate ingredient id '{}'",
                ingredient.id
            ))
            .with_resource_id(ingredient.id));
        }
        self.ingredients.insert(ingredient.id.clone(), ingredient);
        Ok(())
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl IngredientLookup for IngredientCatalog {
    fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }
}

/// Distinct requirement tables per life stage, with an optional fallback
#[derive(Debug, Clone, Default)]
pub struct StagedReferenceTables {
    tables: BTreeMap<LifeStage, ReferenceTable>,
    fallback: Option<ReferenceTable>,
}

impl StagedReferenceTables {
    /// Empty set of tables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the table for a life stage
    #[must_use]
    pub fn with_stage(mut self, life_stage: LifeStage, table: ReferenceTable) -> Self {
        self.tables.insert(life_stage, table);
        self
    }

    /// Table used for stages without their own entry
    #[must_use]
    pub fn with_fallback(mut self, table: ReferenceTable) -> Self {
        self.fallback = Some(table);
        self
    }
}

impl NutrientReferenceLookup for StagedReferenceTables {
    fn reference_table(&self, life_stage: LifeStage) -> AppResult<&ReferenceTable> {
        self.tables
            .get(&life_stage)
            .or(self.fallback.as_ref())
            .ok_or_else(|| AppError::not_found("reference table for life stage", life_stage.as_str()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use dog_nutrition_core::errors::ErrorCode;
    use dog_nutrition_core::models::{NutrientRequirement, RequirementBasis};

    fn table(target: f64) -> ReferenceTable {
        ReferenceTable::new(vec![NutrientRequirement::new(
            "protein_g",
            "g",
            RequirementBasis::Per1000Kcal,
            Some(45.0),
            target,
            None,
            "test",
        )
        .unwrap()])
        .unwrap()
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let chicken = Ingredient::new("chicken", "Chicken").with_nutrient("kcal", 165.0);
        let mut catalog = IngredientCatalog::new([chicken.clone()]).unwrap();
        let err = catalog.insert(chicken).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReferenceData);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_ingredient("chicken").is_some());
        assert!(catalog.find_ingredient("beef").is_none());
    }

    #[test]
    fn test_catalog_validates_compositions() {
        let bad = Ingredient::new("bad", "Bad").with_nutrient("kcal", -1.0);
        assert!(IngredientCatalog::new([bad]).is_err());
    }

    #[test]
    fn test_staged_tables_fall_back_then_fail() {
        let staged = StagedReferenceTables::new().with_stage(LifeStage::Puppy, table(60.0));
        let err = staged.reference_table(LifeStage::Senior).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.context.resource_id.as_deref(), Some("senior"));

        let staged = staged.with_fallback(table(52.0));
        let senior = staged.reference_table(LifeStage::Senior).unwrap();
        assert!((senior.requirements()[0].target - 52.0).abs() < f64::EPSILON);
        let puppy = staged.reference_table(LifeStage::Puppy).unwrap();
        assert!((puppy.requirements()[0].target - 60.0).abs() < f64::EPSILON);
    }
}
