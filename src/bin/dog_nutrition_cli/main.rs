// ABOUTME: dog-nutrition CLI - energy needs, daily nutrient targets and recipe analysis from the shell
// ABOUTME: Prints JSON results on stdout and a JSON error envelope on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Energy requirement of a 12.5 kg neutered adult
//! dog-nutrition energy --weight 12.5 --life-stage adult --activity moderate --neutered
//!
//! # Daily nutrient targets from the built-in reference table
//! dog-nutrition requirements --weight 12.5 --neutered
//!
//! # Daily targets from a custom reference table
//! dog-nutrition requirements --profile dog.json --reference nrc_adult.json
//!
//! # Analyze a recipe
//! dog-nutrition analyze --profile dog.json --recipe dinner.json --ingredients foods.json
//!
//! # Override an activity factor for one call
//! dog-nutrition energy --weight 30 --activity high --factor-overrides adult:intact:high=2.6
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::ProfileArgs;
use dog_nutrition::data::load_nutrition_config;
use dog_nutrition::errors::{AppResult, ErrorResponse};
use dog_nutrition::logging::LoggingConfig;
use dog_nutrition::{IntelligenceConfig, NutritionAnalyzer};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dog-nutrition",
    version,
    about = "Dog nutrition requirements and recipe analysis",
    long_about = "Computes a dog's daily energy need and nutrient targets, and checks a recipe against them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (JSON); defaults plus DOG_NUTRITION_* variables otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for energy values (defaults to the configured precision)
    #[arg(long, global = true)]
    precision: Option<u32>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Resting and maintenance energy requirement
    Energy {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Energy requirement and per-day nutrient targets
    Requirements {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Reference requirement table (JSON); built-in adult maintenance table otherwise
        #[arg(long)]
        reference: Option<PathBuf>,
    },

    /// Analyze a recipe against the dog's requirements
    Analyze {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Recipe file (JSON)
        #[arg(long)]
        recipe: PathBuf,

        /// Ingredient catalog file (JSON)
        #[arg(long)]
        ingredients: PathBuf,

        /// Reference requirement table (JSON); built-in adult maintenance table otherwise
        #[arg(long)]
        reference: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(output) => {
            println!("{output:#}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}: {}", response.error.code.description(), response.error.message),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<Value> {
    let config = match &cli.config {
        Some(path) => load_nutrition_config(path)?,
        None => IntelligenceConfig::global().nutrition.clone(),
    };
    let precision = cli.precision.unwrap_or(config.energy.display_precision);
    let analyzer = NutritionAnalyzer::with_config(config);
    debug!(precision, "Configuration ready");

    match cli.command {
        Command::Energy { profile } => commands::energy::run(&analyzer, &profile, precision),
        Command::Requirements { profile, reference } => {
            commands::requirements::run(&analyzer, &profile, reference.as_deref(), precision)
        }
        Command::Analyze {
            profile,
            recipe,
            ingredients,
            reference,
        } => commands::analyze::run(
            &analyzer,
            &profile,
            &recipe,
            &ingredients,
            reference.as_deref(),
            precision,
        ),
    }
}
