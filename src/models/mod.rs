//! Data models
//!
//! Plain recipe data shapes. Amounts stay free-form strings and are
//! interpreted by the scaling engine at render time; nothing here is
//! ever written back.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
