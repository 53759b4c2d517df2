// ABOUTME: Dog profile model used as the input of every energy and requirement calculation
// ABOUTME: DogProfile, Sex, LifeStage and ActivityLevel with parsing and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex of the dog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male dog
    Male,
    /// Female dog
    Female,
}

/// Life stage, the first axis of the activity factor table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Growing dog
    Puppy,
    /// Adult maintenance
    Adult,
    /// Senior dog
    Senior,
}

/// Daily activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Low daily activity
    Low,
    /// Typical household activity
    Moderate,
    /// High daily activity or working dog
    High,
}

impl Sex {
    /// Every variant, in declaration order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Lower-case name used in text formats
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl LifeStage {
    /// Every variant, in declaration order
    pub const ALL: [Self; 3] = [Self::Puppy, Self::Adult, Self::Senior];

    /// Lower-case name used in text formats
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Puppy => "puppy",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

impl ActivityLevel {
    /// Every variant, in declaration order
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    /// Lower-case name used in text formats
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "sex must be one of: male, female (got '{other}')"
            ))),
        }
    }
}

impl FromStr for LifeStage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "puppy" => Ok(Self::Puppy),
            "adult" => Ok(Self::Adult),
            "senior" => Ok(Self::Senior),
            other => Err(AppError::invalid_input(format!(
                "life stage must be one of: puppy, adult, senior (got '{other}')"
            ))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            // "normal" is the household wording used by older profile forms
            "moderate" | "normal" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "activity level must be one of: low, moderate, high (got '{other}')"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of a dog, constructed by the caller and consumed once per calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DogProfile {
    /// Age in months
    pub age_months: u32,
    /// Body weight in kilograms, must be positive
    pub weight_kg: f64,
    /// Breed (free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Biological sex
    pub sex: Sex,
    /// Whether the dog is neutered/spayed
    pub neutered: bool,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Life stage
    pub life_stage: LifeStage,
}

impl DogProfile {
    /// Validate domain constraints of the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the weight is not a positive finite number
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "weight_kg must be greater than 0 (got {})",
                self.weight_kg
            )));
        }
        Ok(())
    }
}
