//! Ingredient quantity scaling
//!
//! Parses free-form amount strings, scales them with exact rational
//! arithmetic, and renders them back as short cook-friendly strings.
//! Every call is pure and deterministic: same input, same output, no
//! shared state, safe from any thread.

pub mod formatter;
pub mod parser;
pub mod quantity;
pub mod units;

pub use formatter::format_quantity;
pub use parser::parse_amount;
pub use quantity::{Quantity, ScaleFactor, ScaleFactorError};
pub use units::abbreviate_unit;

/// Parse, scale, and re-render a raw amount string.
///
/// This is the per-ingredient chain every rendering surface uses. An
/// invalid factor leaves the amount unscaled rather than failing the
/// whole render.
pub fn scale_amount(raw: &str, factor: f64) -> String {
    let parsed = parse_amount(raw);
    let factor = match ScaleFactor::from_f64(factor) {
        Ok(factor) => factor,
        Err(e) => {
            tracing::warn!(
                "Invalid scale factor {}: {}. Leaving '{}' unscaled.",
                factor,
                e,
                raw.trim()
            );
            ScaleFactor::ONE
        }
    };
    format_quantity(&parsed.scale(factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_amount_fraction_round_trip() {
        assert_eq!(scale_amount("1/2", 1.0), "1/2");
        assert_eq!(scale_amount("1/2", 2.0), "1");
        assert_eq!(scale_amount("1/2", 3.0), "1 1/2");
    }

    #[test]
    fn test_scale_amount_mixed_number() {
        assert_eq!(scale_amount("1 1/2", 2.0), "3");
        assert_eq!(scale_amount("1 1/2", 0.5), "3/4");
    }

    #[test]
    fn test_scale_amount_thirds_stay_exact() {
        assert_eq!(scale_amount("1/3", 3.0), "1");
        assert_eq!(scale_amount("1/3", 2.0), "2/3");
    }

    #[test]
    fn test_scale_amount_range() {
        assert_eq!(scale_amount("2-3", 2.0), "4-6");
        assert_eq!(scale_amount("1/2 to 1", 2.0), "1-2");
    }

    #[test]
    fn test_scale_amount_opaque_passes_through_at_any_factor() {
        for factor in [0.5, 1.0, 2.0, 4.0] {
            assert_eq!(scale_amount("a pinch", factor), "a pinch");
            assert_eq!(scale_amount("to taste", factor), "to taste");
            assert_eq!(scale_amount("", factor), "");
        }
    }

    #[test]
    fn test_scale_amount_invalid_factor_is_a_noop() {
        assert_eq!(scale_amount("1 1/2", 0.0), "1 1/2");
        assert_eq!(scale_amount("1/2", -1.0), "1/2");
        assert_eq!(scale_amount("2", 100.0), "2");
    }

    #[test]
    fn test_scale_amount_every_ui_step_accepted() {
        for step in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0] {
            // a whole number times a half-step is never opaque
            assert!(!scale_amount("2", step).is_empty());
        }
        assert_eq!(scale_amount("2", 2.5), "5");
        assert_eq!(scale_amount("2", 3.5), "7");
    }

    #[test]
    fn test_scale_amount_stable_at_identity() {
        for raw in ["1/2", "1 1/2", "2-3", "1.25", "3", "a pinch"] {
            let once = scale_amount(raw, 1.0);
            assert_eq!(scale_amount(&once, 1.0), once);
        }
    }

    #[test]
    fn test_equivalent_spellings_render_identically() {
        assert_eq!(scale_amount("2/4", 1.0), "1/2");
        assert_eq!(scale_amount("2/4", 1.0), scale_amount("1/2", 1.0));
        assert_eq!(scale_amount("1½", 2.0), scale_amount("1 1/2", 2.0));
    }
}
