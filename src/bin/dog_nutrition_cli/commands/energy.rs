// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: energy command - resting and maintenance energy requirement of a dog
// ABOUTME: Outputs activity factor, RER and MER as JSON

use super::ProfileArgs;
use dog_nutrition::errors::AppResult;
use dog_nutrition::models::{round_to, ReferenceTable};
use dog_nutrition::NutritionAnalyzer;
use serde_json::{json, Value};

pub fn run(analyzer: &NutritionAnalyzer, args: &ProfileArgs, precision: u32) -> AppResult<Value> {
    let profile = args.to_profile()?;
    let overrides = args.factor_overrides()?;

    // Energy only needs the profile; an empty table yields no nutrient targets
    let report =
        analyzer.compute_requirements(&profile, &ReferenceTable::default(), overrides.as_ref())?;

    Ok(json!({
        "activity_factor": report.activity_factor,
        "rer": round_to(report.rer, precision),
        "mer": round_to(report.mer, precision),
    }))
}
