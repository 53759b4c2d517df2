// ABOUTME: Activity factor table mapping (life stage, neuter status, activity level) to an MER multiplier
// ABOUTME: Injectable lookup data with documented defaults, text keys and layered overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use dog_nutrition_core::models::{ActivityLevel, DogProfile, LifeStage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lowest factor accepted for an adult at high activity
pub const ADULT_HIGH_ACTIVITY_MIN_FACTOR: f64 = 2.0;

/// Key of one activity factor entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactorKey {
    /// Life stage
    pub life_stage: LifeStage,
    /// Neuter status
    pub neutered: bool,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl FactorKey {
    /// Build a key
    #[must_use]
    pub const fn new(life_stage: LifeStage, neutered: bool, activity_level: ActivityLevel) -> Self {
        Self {
            life_stage,
            neutered,
            activity_level,
        }
    }

    /// Key describing a profile
    #[must_use]
    pub const fn for_profile(profile: &DogProfile) -> Self {
        Self::new(profile.life_stage, profile.neutered, profile.activity_level)
    }

    /// Check a factor is usable for this key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the factor is not positive, or
    /// if an adult high-activity factor is below [`ADULT_HIGH_ACTIVITY_MIN_FACTOR`]
    pub fn check_factor(self, factor: f64) -> Result<(), ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "activity factor for {self} must be a positive number (got {factor})"
            )));
        }
        if self.life_stage == LifeStage::Adult
            && self.activity_level == ActivityLevel::High
            && factor < ADULT_HIGH_ACTIVITY_MIN_FACTOR
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "activity factor for {self} must be at least {ADULT_HIGH_ACTIVITY_MIN_FACTOR} (got {factor})"
            )));
        }
        Ok(())
    }

    const fn neuter_label(self) -> &'static str {
        if self.neutered {
            "neutered"
        } else {
            "intact"
        }
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.life_stage,
            self.neuter_label(),
            self.activity_level
        )
    }
}

impl FromStr for FactorKey {
    type Err = ConfigError;

    /// Parse `stage:neuter:activity` (or `/`-separated), e.g. `adult:neutered:high`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split([':', '/']).map(str::trim).collect();
        let [stage, neuter, activity] = parts.as_slice() else {
            return Err(ConfigError::Parse(format!(
                "activity factor key '{s}' must look like stage:neuter:activity"
            )));
        };

        let life_stage = stage
            .parse::<LifeStage>()
            .map_err(|e| ConfigError::Parse(e.message))?;
        let neutered = match neuter.to_lowercase().as_str() {
            "neutered" | "spayed" | "true" => true,
            "intact" | "false" => false,
            other => {
                return Err(ConfigError::Parse(format!(
                    "neuter status must be neutered or intact (got '{other}')"
                )))
            }
        };
        let activity_level = activity
            .parse::<ActivityLevel>()
            .map_err(|e| ConfigError::Parse(e.message))?;

        Ok(Self::new(life_stage, neutered, activity_level))
    }
}

/// Serialized form of one table entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorEntry {
    /// Entry key
    #[serde(flatten)]
    pub key: FactorKey,
    /// Multiplier applied to RER
    pub factor: f64,
}

/// Table of activity factors
///
/// Serializes as a list of entries; deserialization rejects duplicate keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ActivityFactorEntry>",
    into = "Vec<ActivityFactorEntry>"
)]
pub struct ActivityFactorTable {
    factors: BTreeMap<FactorKey, f64>,
}

impl ActivityFactorTable {
    /// Empty table, typically the start of a per-call override set
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }

    /// Build from entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateKey` if a key appears more than once
    pub fn from_entries(
        entries: impl IntoIterator<Item = ActivityFactorEntry>,
    ) -> Result<Self, ConfigError> {
        let mut factors = BTreeMap::new();
        for entry in entries {
            if factors.insert(entry.key, entry.factor).is_some() {
                return Err(ConfigError::DuplicateKey(entry.key.to_string()));
            }
        }
        Ok(Self { factors })
    }

    /// Parse `stage:neuter:activity=factor` pairs separated by commas
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed pairs and
    /// `ConfigError::DuplicateKey` if a key repeats
    pub fn parse_overrides(text: &str) -> Result<Self, ConfigError> {
        let entries = text
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, factor) = pair.split_once('=').ok_or_else(|| {
                    ConfigError::Parse(format!("activity factor override '{pair}' has no '='"))
                })?;
                let factor = factor.trim().parse::<f64>().map_err(|_| {
                    ConfigError::Parse(format!("activity factor '{}' is not a number", factor.trim()))
                })?;
                Ok(ActivityFactorEntry {
                    key: key.parse()?,
                    factor,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Self::from_entries(entries)
    }

    /// Builder-style insertion, replacing any existing value
    #[must_use]
    pub fn with_factor(mut self, key: FactorKey, factor: f64) -> Self {
        self.insert(key, factor);
        self
    }

    /// Insert or replace a factor
    pub fn insert(&mut self, key: FactorKey, factor: f64) {
        self.factors.insert(key, factor);
    }

    /// Remove a factor, returning it
    pub fn remove(&mut self, key: &FactorKey) -> Option<f64> {
        self.factors.remove(key)
    }

    /// Factor for a key
    #[must_use]
    pub fn get(&self, key: &FactorKey) -> Option<f64> {
        self.factors.get(key).copied()
    }

    /// Copy of this table with `overrides` layered on top
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        merged.factors.extend(overrides.factors.iter());
        merged
    }

    /// Entries in key order
    pub fn entries(&self) -> impl Iterator<Item = ActivityFactorEntry> + '_ {
        self.factors
            .iter()
            .map(|(&key, &factor)| ActivityFactorEntry { key, factor })
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Check every factor is positive and adult high-activity factors are not below the floor
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the offending key
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.factors
            .iter()
            .try_for_each(|(key, &factor)| key.check_factor(factor))
    }
}

impl Default for ActivityFactorTable {
    /// Documented maintenance factors for every stage/neuter/activity combination
    fn default() -> Self {
        let mut factors = BTreeMap::new();
        for neutered in [true, false] {
            for activity in ActivityLevel::ALL {
                factors.insert(FactorKey::new(LifeStage::Puppy, neutered, activity), 2.0);
            }
        }

        let adult_and_senior = [
            (LifeStage::Adult, true, ActivityLevel::Low, 1.4),
            (LifeStage::Adult, true, ActivityLevel::Moderate, 1.6),
            (LifeStage::Adult, true, ActivityLevel::High, 2.0),
            (LifeStage::Adult, false, ActivityLevel::Low, 1.6),
            (LifeStage::Adult, false, ActivityLevel::Moderate, 1.8),
            (LifeStage::Adult, false, ActivityLevel::High, 2.0),
            (LifeStage::Senior, true, ActivityLevel::Low, 1.2),
            (LifeStage::Senior, true, ActivityLevel::Moderate, 1.4),
            (LifeStage::Senior, true, ActivityLevel::High, 1.6),
            (LifeStage::Senior, false, ActivityLevel::Low, 1.4),
            (LifeStage::Senior, false, ActivityLevel::Moderate, 1.4),
            (LifeStage::Senior, false, ActivityLevel::High, 1.6),
        ];
        for (stage, neutered, activity, factor) in adult_and_senior {
            factors.insert(FactorKey::new(stage, neutered, activity), factor);
        }

        Self { factors }
    }
}

impl TryFrom<Vec<ActivityFactorEntry>> for ActivityFactorTable {
    type Error = ConfigError;

    fn try_from(entries: Vec<ActivityFactorEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<ActivityFactorTable> for Vec<ActivityFactorEntry> {
    fn from(table: ActivityFactorTable) -> Self {
        table.entries().collect()
    }
}
