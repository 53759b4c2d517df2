// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: requirements command - energy requirement and per-day nutrient targets
// ABOUTME: Uses the built-in reference table unless a reference file is given

use super::{reference_table, ProfileArgs};
use dog_nutrition::errors::AppResult;
use dog_nutrition::NutritionAnalyzer;
use serde_json::Value;
use std::path::Path;

pub fn run(
    analyzer: &NutritionAnalyzer,
    args: &ProfileArgs,
    reference: Option<&Path>,
    precision: u32,
) -> AppResult<Value> {
    let profile = args.to_profile()?;
    let overrides = args.factor_overrides()?;
    let reference = reference_table(reference)?;

    let report = analyzer.compute_requirements(&profile, &reference, overrides.as_ref())?;
    Ok(serde_json::to_value(report.rounded(precision))?)
}
