// ABOUTME: Energy equation constants for resting and maintenance energy requirements
// ABOUTME: RER coefficient/exponent and the per-1000kcal normalisation base
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Coefficient of the resting energy equation `RER = 70 × weight_kg^0.75`
pub const RER_COEFFICIENT: f64 = 70.0;

/// Exponent of the resting energy equation (metabolic body weight)
pub const RER_EXPONENT: f64 = 0.75;

/// Energy base of requirements expressed per 1000 kcal
pub const KCAL_BASIS: f64 = 1000.0;

/// Ingredient compositions are expressed per this many grams
pub const COMPOSITION_BASIS_GRAMS: f64 = 100.0;
