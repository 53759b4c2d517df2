// ABOUTME: Core types and constants for the dog nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrient constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dog Nutrition Core
//!
//! Foundation crate providing shared types and constants for the dog nutrition
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient keys and energy formula constants
//! - **models**: Dog profiles, reference requirements, ingredients, recipes and analysis records

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrient keys and energy formula constants
pub mod constants;

/// Core domain models (profiles, requirements, ingredients, recipes, results)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
