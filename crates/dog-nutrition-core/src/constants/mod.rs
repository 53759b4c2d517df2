// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient keys and energy equation constants for the dog nutrition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than living in a single large file.

/// Energy equation constants
pub mod energy;
/// Nutrient identifiers shared by reference tables and ingredient compositions
pub mod nutrients;

pub use nutrients::KCAL;
