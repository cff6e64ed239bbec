//! Nutrition derivation module
//!
//! Pure calculations deriving caloric value and residual ash mass
//! from macronutrient inputs.

pub mod derive;

pub use derive::{
    kcal_from_macros, parse_macro_field, recompute_derived, residual_ash, round2, Derived,
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
