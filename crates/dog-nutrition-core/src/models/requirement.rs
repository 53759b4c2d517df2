// ABOUTME: Reference nutrient requirement models and the per-day normalised requirement
// ABOUTME: NutrientRequirement, RequirementBasis, DailyRequirement and ReferenceTable validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::analysis::round_to;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Basis a requirement amount is expressed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RequirementBasis {
    /// Absolute amount per day
    #[serde(rename = "per_day")]
    PerDay,
    /// Amount per 1000 kcal of metabolizable energy intake
    #[serde(rename = "per_1000kcal")]
    Per1000Kcal,
}

impl RequirementBasis {
    /// Wire name of the basis
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerDay => "per_day",
            Self::Per1000Kcal => "per_1000kcal",
        }
    }
}

impl fmt::Display for RequirementBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementBasis {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_day" | "day" => Ok(Self::PerDay),
            "per_1000kcal" | "per_1000_kcal" | "1000kcal" => Ok(Self::Per1000Kcal),
            other => Err(AppError::reference_data(format!(
                "unrecognized requirement basis '{other}'"
            ))),
        }
    }
}

/// Raw reference row as delivered by the data-access collaborator
///
/// The basis is still free text here; [`NutrientRequirement::from_row`] is the
/// only way into the typed model and rejects anything it cannot recognise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientRequirementRow {
    /// Nutrient identifier
    pub nutrient_id: String,
    /// Unit label
    pub unit: String,
    /// Basis text (`per_day` or `per_1000kcal`)
    pub basis: String,
    /// Lower bound
    #[serde(default)]
    pub min: Option<f64>,
    /// Recommended amount
    pub target: f64,
    /// Upper bound
    #[serde(default)]
    pub max: Option<f64>,
    /// Source label
    #[serde(default)]
    pub source: String,
}

/// A single reference requirement for one nutrient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientRequirement {
    /// Nutrient identifier, unique within a requirement set
    pub nutrient_id: String,
    /// Unit label (g, mg, µg)
    pub unit: String,
    /// Basis the amounts are expressed on
    pub basis: RequirementBasis,
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Recommended amount
    pub target: f64,
    /// Upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Source label (e.g. "NRC 2006")
    pub source: String,
}

impl NutrientRequirement {
    /// Build and validate a requirement
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` if any amount is negative or not finite, or
    /// if the bounds are out of order
    pub fn new(
        nutrient_id: impl Into<String>,
        unit: impl Into<String>,
        basis: RequirementBasis,
        min: Option<f64>,
        target: f64,
        max: Option<f64>,
        source: impl Into<String>,
    ) -> AppResult<Self> {
        let requirement = Self {
            nutrient_id: nutrient_id.into(),
            unit: unit.into(),
            basis,
            min,
            target,
            max,
            source: source.into(),
        };
        requirement.validate()?;
        Ok(requirement)
    }

    /// Convert a raw reference row into a typed requirement
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an unrecognized basis or invalid amounts
    pub fn from_row(row: NutrientRequirementRow) -> AppResult<Self> {
        let basis = row
            .basis
            .parse::<RequirementBasis>()
            .map_err(|e| e.with_resource_id(row.nutrient_id.clone()))?;
        Self::new(
            row.nutrient_id,
            row.unit,
            basis,
            row.min,
            row.target,
            row.max,
            row.source,
        )
    }

    /// Check amounts are finite, non-negative and ordered `min ≤ target ≤ max`
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` describing the first violated rule
    pub fn validate(&self) -> AppResult<()> {
        let id = self.nutrient_id.as_str();
        if id.trim().is_empty() {
            return Err(AppError::reference_data("nutrient id must not be empty"));
        }
        let amounts = [
            ("min", self.min),
            ("target", Some(self.target)),
            ("max", self.max),
        ];
        for (label, value) in amounts {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(AppError::reference_data(format!(
                        "{id}: {label} must be a non-negative number (got {v})"
                    ))
                    .with_resource_id(id));
                }
            }
        }
        if let Some(min) = self.min {
            if min > self.target {
                return Err(AppError::reference_data(format!(
                    "{id}: min {min} exceeds target {}",
                    self.target
                ))
                .with_resource_id(id));
            }
        }
        if let Some(max) = self.max {
            if self.target > max {
                return Err(AppError::reference_data(format!(
                    "{id}: target {} exceeds max {max}",
                    self.target
                ))
                .with_resource_id(id));
            }
        }
        Ok(())
    }
}

/// A requirement guaranteed to be expressed per day
///
/// Only per-day requirements may be compared against recipe totals, so the
/// classifier accepts this type rather than a bare [`NutrientRequirement`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "NutrientRequirement", into = "NutrientRequirement")]
pub struct DailyRequirement(NutrientRequirement);

impl DailyRequirement {
    /// Wrap a requirement that is already on a per-day basis
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` if the requirement is not per day
    pub fn from_per_day(requirement: NutrientRequirement) -> AppResult<Self> {
        if requirement.basis != RequirementBasis::PerDay {
            return Err(AppError::reference_data(format!(
                "{}: expected a per_day requirement, found {}",
                requirement.nutrient_id, requirement.basis
            ))
            .with_resource_id(requirement.nutrient_id));
        }
        Ok(Self(requirement))
    }

    /// Unwrap into the underlying requirement
    #[must_use]
    pub fn into_inner(self) -> NutrientRequirement {
        self.0
    }

    /// Copy with every amount rounded for display
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        let mut inner = self.0.clone();
        inner.min = inner.min.map(|v| round_to(v, precision));
        inner.target = round_to(inner.target, precision);
        inner.max = inner.max.map(|v| round_to(v, precision));
        Self(inner)
    }
}

impl TryFrom<NutrientRequirement> for DailyRequirement {
    type Error = AppError;

    fn try_from(requirement: NutrientRequirement) -> Result<Self, Self::Error> {
        requirement.validate()?;
        Self::from_per_day(requirement)
    }
}

impl From<DailyRequirement> for NutrientRequirement {
    fn from(daily: DailyRequirement) -> Self {
        daily.0
    }
}

impl Deref for DailyRequirement {
    type Target = NutrientRequirement;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A validated set of reference requirements, in declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<NutrientRequirement>", into = "Vec<NutrientRequirement>")]
pub struct ReferenceTable {
    requirements: Vec<NutrientRequirement>,
}

impl ReferenceTable {
    /// Build a table, validating every row and the uniqueness of nutrient ids
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an invalid row or a duplicate id
    pub fn new(requirements: Vec<NutrientRequirement>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(requirements.len());
        for requirement in &requirements {
            requirement.validate()?;
            if !seen.insert(requirement.nutrient_id.as_str()) {
                return Err(AppError::reference_data(format!(
                    "duplicate requirement for nutrient '{}'",
                    requirement.nutrient_id
                ))
                .with_resource_id(requirement.nutrient_id.clone()));
            }
        }
        Ok(Self { requirements })
    }

    /// Build a table from raw reference rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an unrecognized basis, invalid amounts or duplicates
    pub fn from_rows(rows: Vec<NutrientRequirementRow>) -> AppResult<Self> {
        let requirements = rows
            .into_iter()
            .map(NutrientRequirement::from_row)
            .collect::<AppResult<Vec<_>>>()?;
        Self::new(requirements)
    }

    /// Requirements in declaration order
    #[must_use]
    pub fn requirements(&self) -> &[NutrientRequirement] {
        &self.requirements
    }

    /// Look up the requirement for a nutrient
    #[must_use]
    pub fn get(&self, nutrient_id: &str) -> Option<&NutrientRequirement> {
        self.requirements
            .iter()
            .find(|r| r.nutrient_id == nutrient_id)
    }

    /// Number of requirements
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the table has no requirements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl TryFrom<Vec<NutrientRequirement>> for ReferenceTable {
    type Error = AppError;

    fn try_from(requirements: Vec<NutrientRequirement>) -> Result<Self, Self::Error> {
        Self::new(requirements)
    }
}

impl From<ReferenceTable> for Vec<NutrientRequirement> {
    fn from(table: ReferenceTable) -> Self {
        table.requirements
    }
}
