//! Data models
//!
//! Rust structs for the catalog wire shapes and the product draft.

mod category;
mod dish;
mod draft;
mod product;

pub use category::{filter_categories, resolve_category, CategoryChoice, CategorySuggestion};
pub use dish::{match_dishes, Dish, DishNutrient, DishProduct, NutrientRef, ProductRef};
pub use draft::{DraftChange, ProductDraft};
pub use product::{Measure, Product, ProductCreate, DEFAULT_WASTE_WEIGHT_DESC};
