//! Ingredient model
//!
//! An ingredient line as stored on a recipe: a free-form amount, a
//! unit, and a name.

use serde::{Deserialize, Serialize};

use crate::scaling::{abbreviate_unit, format_quantity, parse_amount, ScaleFactor};

/// One ingredient of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-form amount text, e.g. "1 1/2" or "a pinch"
    pub amount: String,
    pub unit: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Ingredient {
    /// The amount at the given scale, formatted for display
    pub fn scaled_amount(&self, factor: ScaleFactor) -> String {
        format_quantity(&parse_amount(&self.amount).scale(factor))
    }

    /// Render "<amount> <unit> <name>" at the given scale, skipping
    /// whichever parts are empty
    pub fn display_line(&self, factor: ScaleFactor) -> String {
        let amount = self.scaled_amount(factor);
        let unit = abbreviate_unit(&self.unit);

        let mut parts: Vec<&str> = Vec::new();
        for part in [amount.as_str(), unit, self.name.as_str()] {
            let part = part.trim();
            if !part.is_empty() {
                parts.push(part);
            }
        }
        parts.join(" ")
    }
}
