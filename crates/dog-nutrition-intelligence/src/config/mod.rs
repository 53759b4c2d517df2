// ABOUTME: Configuration module for dog-nutrition-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (activity factors, tolerance band, suggestion policy, safety)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
