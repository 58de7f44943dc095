//! Recipe model
//!
//! The document shape consumed by rendering surfaces and the
//! scale_recipe preview utility. Scaling is a presentation-time
//! transform only; it never changes the stored amounts.

use serde::{Deserialize, Serialize};

use crate::scaling::ScaleFactor;

use super::Ingredient;

/// A recipe with its ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default = "default_servings")]
    pub servings: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

fn default_servings() -> f64 {
    1.0
}

impl Recipe {
    /// Display lines for every ingredient at the given scale
    pub fn scaled_lines(&self, factor: ScaleFactor) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.display_line(factor))
            .collect()
    }

    /// Servings produced at the given scale
    pub fn scaled_servings(&self, factor: ScaleFactor) -> f64 {
        self.servings * factor.to_f64()
    }
}
