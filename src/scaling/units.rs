//! Unit abbreviation
//!
//! Shortens spelled-out measurement units for display. Lookup is
//! case-insensitive and exact-match only; anything unrecognized passes
//! through untouched so ingredient names containing unit-like words
//! are never mangled.

/// Abbreviate a spelled-out unit for display.
///
/// Unknown units come back exactly as given, original casing and
/// spacing included.
pub fn abbreviate_unit(unit: &str) -> &str {
    let lower = unit.trim().to_lowercase();
    match lower.as_str() {
        "teaspoon" | "teaspoons" => "tsp",
        "tablespoon" | "tablespoons" => "tbsp",
        "cup" => "cup",
        "cups" => "cups",
        "ounce" | "ounces" => "oz",
        "pound" => "lb",
        "pounds" => "lbs",
        "gram" | "grams" => "g",
        "kilogram" | "kilograms" => "kg",
        "milliliter" | "milliliters" => "ml",
        "liter" | "liters" => "L",
        "pinch" => "pinch",
        "dash" => "dash",
        _ => unit,
    }
}
