// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for dog-nutrition plus the shared profile arguments
// ABOUTME: Builds a DogProfile and per-call factor overrides from flags or a profile file

pub mod analyze;
pub mod energy;
pub mod requirements;

use clap::Args;
use dog_nutrition::data::{load_profile, load_reference_table};
use dog_nutrition::errors::{AppError, AppResult};
use dog_nutrition::models::{ActivityLevel, DogProfile, LifeStage, ReferenceTable, Sex};
use dog_nutrition::{default_reference_table, ActivityFactorTable};
use std::path::{Path, PathBuf};

/// Dog profile given either as a file or as individual flags
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile file (JSON); replaces the individual profile flags
    #[arg(long, conflicts_with = "weight")]
    pub profile: Option<PathBuf>,

    /// Body weight in kilograms
    #[arg(long, required_unless_present = "profile", allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Life stage: puppy, adult or senior
    #[arg(long, default_value = "adult")]
    pub life_stage: LifeStage,

    /// Activity level: low, moderate or high
    #[arg(long, default_value = "moderate")]
    pub activity: ActivityLevel,

    /// The dog is neutered or spayed
    #[arg(long)]
    pub neutered: bool,

    /// Sex: male or female
    #[arg(long, default_value = "female")]
    pub sex: Sex,

    /// Age in months
    #[arg(long, default_value_t = 24)]
    pub age_months: u32,

    /// Breed
    #[arg(long)]
    pub breed: Option<String>,

    /// Activity factor overrides for this call, e.g. `adult:neutered:high=2.4,senior:intact:low=1.3`
    #[arg(long)]
    pub factor_overrides: Option<String>,
}

impl ProfileArgs {
    /// Profile from the file or the flags
    pub fn to_profile(&self) -> AppResult<DogProfile> {
        if let Some(path) = &self.profile {
            return load_profile(path);
        }

        let weight_kg = self
            .weight
            .ok_or_else(|| AppError::invalid_input("either --profile or --weight is required"))?;
        let profile = DogProfile {
            age_months: self.age_months,
            weight_kg,
            breed: self.breed.clone(),
            sex: self.sex,
            neutered: self.neutered,
            activity_level: self.activity,
            life_stage: self.life_stage,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Parsed `--factor-overrides`
    pub fn factor_overrides(&self) -> AppResult<Option<ActivityFactorTable>> {
        self.factor_overrides
            .as_deref()
            .map(|text| {
                let overrides = ActivityFactorTable::parse_overrides(text)?;
                overrides.validate()?;
                Ok::<_, AppError>(overrides)
            })
            .transpose()
    }
}

/// Reference table from a file, or the built-in one
pub fn reference_table(path: Option<&Path>) -> AppResult<ReferenceTable> {
    path.map_or_else(default_reference_table, load_reference_table)
}
