// ABOUTME: Screens recipe ingredients for foods that are toxic to dogs
// ABOUTME: Case-insensitive keyword match on display names and ids, producing safety warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::SafetyConfig;
use dog_nutrition_core::models::{Ingredient, SafetyWarning};
use std::collections::HashSet;
use tracing::warn;

/// First configured keyword contained in `text`, compared case-insensitively
#[must_use]
pub fn find_toxic_keyword<'a>(text: &str, config: &'a SafetyConfig) -> Option<&'a str> {
    let haystack = text.trim().to_lowercase();
    config
        .toxic_keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .find(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// One warning per distinct ingredient whose name or id matches a toxic keyword
pub fn screen_ingredients<'a>(
    ingredients: impl IntoIterator<Item = &'a Ingredient>,
    config: &SafetyConfig,
) -> Vec<SafetyWarning> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .filter(|ingredient| seen.insert(ingredient.id.as_str()))
        .filter_map(|ingredient| {
            let keyword = find_toxic_keyword(&ingredient.name, config)
                .or_else(|| find_toxic_keyword(&ingredient.id, config))?;
            warn!(
                ingredient_id = %ingredient.id,
                ingredient_name = %ingredient.name,
                keyword,
                "Recipe contains an ingredient that is toxic to dogs"
            );
            Some(SafetyWarning {
                ingredient_id: ingredient.id.clone(),
                ingredient_name: ingredient.name.clone(),
                keyword: keyword.to_owned(),
            })
        })
        .collect()
}
