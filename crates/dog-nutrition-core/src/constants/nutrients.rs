// ABOUTME: Nutrient identifiers used by reference tables and ingredient compositions
// ABOUTME: Keys combine the nutrient name with its unit, e.g. protein_g or ca_mg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Metabolizable energy, aggregated like any other nutrient
pub const KCAL: &str = "kcal";
/// Crude protein (g)
pub const PROTEIN_G: &str = "protein_g";
/// Crude fat (g)
pub const FAT_G: &str = "fat_g";
/// Calcium (mg)
pub const CALCIUM_MG: &str = "ca_mg";
/// Phosphorus (mg)
pub const PHOSPHORUS_MG: &str = "p_mg";
/// Potassium (mg)
pub const POTASSIUM_MG: &str = "k_mg";
/// Sodium (mg)
pub const SODIUM_MG: &str = "na_mg";
/// Magnesium (mg)
pub const MAGNESIUM_MG: &str = "mg_mg";
/// Iron (mg)
pub const IRON_MG: &str = "fe_mg";
/// Zinc (mg)
pub const ZINC_MG: &str = "zn_mg";
/// Copper (mg)
pub const COPPER_MG: &str = "cu_mg";
/// Manganese (mg)
pub const MANGANESE_MG: &str = "mn_mg";
/// Selenium (µg)
pub const SELENIUM_UG: &str = "se_ug";
/// Iodine (µg)
pub const IODINE_UG: &str = "iodine_ug";
/// Vitamin A (µg RAE)
pub const VITAMIN_A_UG: &str = "vit_a_ug";
/// Vitamin D (µg)
pub const VITAMIN_D_UG: &str = "vit_d_ug";
/// Vitamin E (mg)
pub const VITAMIN_E_MG: &str = "vit_e_mg";
