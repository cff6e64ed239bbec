//! Derived nutrition fields
//!
//! Computes caloric value and residual ash mass from macronutrient inputs,
//! all expressed in grams per 100g of product.

use serde::Serialize;

/// Atwater general factor for protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Atwater general factor for fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Atwater general factor for carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Derived nutrition values for a product draft
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derived {
    pub kcal: f64,
    pub ash_grams: f64,
}

/// Parse a user-entered macro field
///
/// Unparseable or empty input counts as zero; the caller never sees a
/// parse error.
pub fn parse_macro_field(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(0.0)
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Caloric value from macronutrient grams (Atwater general factors)
///
/// Water and ash carry no factor.
pub fn kcal_from_macros(proteins: f64, fats: f64, carbs: f64) -> f64 {
    round2(
        proteins * KCAL_PER_GRAM_PROTEIN + fats * KCAL_PER_GRAM_FAT + carbs * KCAL_PER_GRAM_CARB,
    )
}

/// Residual ash mass in 100g of product
///
/// Everything in 100g not accounted for by protein, fat, carbohydrate, or
/// water. Clamped at zero after rounding, so oversubscribed inputs never
/// produce a negative mass.
pub fn residual_ash(proteins: f64, fats: f64, carbs: f64, water: f64) -> f64 {
    round2(100.0 - (proteins + fats + carbs + water)).max(0.0)
}

/// Recompute derived fields from the four raw macro text fields
///
/// Total over all inputs: absent or unparseable text coerces to zero, and
/// out-of-range values (negative, above 100) are accepted as-is.
pub fn recompute_derived(proteins: &str, fats: &str, carbs: &str, water: &str) -> Derived {
    let p = parse_macro_field(proteins);
    let f = parse_macro_field(fats);
    let c = parse_macro_field(carbs);
    let w = parse_macro_field(water);

    Derived {
        kcal: kcal_from_macros(p, f, c),
        ash_grams: residual_ash(p, f, c, w),
    }
}
