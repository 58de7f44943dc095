//! Cook-friendly quantity rendering
//!
//! Renders quantities back to short display strings, preferring the
//! fractions found on measuring cups and spoons. Output is derived
//! from the numeric value alone, so "2/4" and "1/2" always render
//! identically no matter how the amount was originally written.

use num_rational::Rational64;
use num_traits::Signed;

use super::quantity::Quantity;

/// Fractions worth displaying as fractions
const CULINARY_FRACTIONS: &[Rational64] = &[
    Rational64::new_raw(1, 8),
    Rational64::new_raw(1, 4),
    Rational64::new_raw(1, 3),
    Rational64::new_raw(1, 2),
    Rational64::new_raw(5, 8),
    Rational64::new_raw(2, 3),
    Rational64::new_raw(3, 4),
    Rational64::new_raw(7, 8),
];

/// How far a remainder may sit from a culinary fraction and still be
/// displayed as that fraction
const FRACTION_TOLERANCE: Rational64 = Rational64::new_raw(1, 64);

/// Render a quantity for display.
///
/// Opaque text passes through untouched (the empty string included),
/// ranges render as "low-high", and exact values prefer whole numbers
/// and culinary fractions over decimals.
pub fn format_quantity(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Opaque(text) => text.clone(),
        Quantity::Range(low, high) => {
            format!("{}-{}", format_exact(*low), format_exact(*high))
        }
        Quantity::Exact(value) => format_exact(*value),
    }
}

fn format_exact(value: Rational64) -> String {
    if value.denom() == &1 {
        return value.numer().to_string();
    }

    let whole = value.floor().to_integer();
    let remainder = value - Rational64::from_integer(whole);

    if let Some(fraction) = nearest_culinary(remainder) {
        if whole == 0 {
            format!("{}/{}", fraction.numer(), fraction.denom())
        } else {
            format!("{} {}/{}", whole, fraction.numer(), fraction.denom())
        }
    } else {
        format_decimal(value)
    }
}

/// The closest culinary fraction within tolerance, if any
fn nearest_culinary(remainder: Rational64) -> Option<Rational64> {
    let mut best: Option<(Rational64, Rational64)> = None;
    for &candidate in CULINARY_FRACTIONS {
        let distance = (remainder - candidate).abs();
        if distance > FRACTION_TOLERANCE {
            continue;
        }
        match best {
            Some((best_distance, _)) if best_distance <= distance => {}
            _ => best = Some((distance, candidate)),
        }
    }
    best.map(|(_, fraction)| fraction)
}

/// Two decimal places, rounded half up, trailing zeros trimmed. A value
/// that rounds to a whole number renders without a fractional part.
fn format_decimal(value: Rational64) -> String {
    // amounts are non-negative by construction
    let numer = *value.numer() as i128;
    let denom = *value.denom() as i128;
    let hundredths = (numer * 200 + denom) / (denom * 2);

    let whole = hundredths / 100;
    let cents = hundredths % 100;
    if cents == 0 {
        whole.to_string()
    } else if cents % 10 == 0 {
        format!("{}.{}", whole, cents / 10)
    } else {
        format!("{}.{:02}", whole, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(numer: i64, denom: i64) -> Quantity {
        Quantity::Exact(Rational64::new(numer, denom))
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_quantity(&exact(3, 1)), "3");
        assert_eq!(format_quantity(&exact(0, 1)), "0");
        assert_eq!(format_quantity(&exact(4, 2)), "2");
    }

    #[test]
    fn test_format_simple_fractions() {
        assert_eq!(format_quantity(&exact(1, 2)), "1/2");
        assert_eq!(format_quantity(&exact(3, 4)), "3/4");
        assert_eq!(format_quantity(&exact(2, 3)), "2/3");
    }

    #[test]
    fn test_format_mixed_numbers() {
        assert_eq!(format_quantity(&exact(3, 2)), "1 1/2");
        assert_eq!(format_quantity(&exact(11, 4)), "2 3/4");
    }

    #[test]
    fn test_format_snaps_to_nearest_culinary_fraction() {
        // 33/64 is exactly one tolerance step from 1/2
        assert_eq!(format_quantity(&exact(33, 64)), "1/2");
        // 9/16 sits between 1/2 and 5/8, outside tolerance of both
        assert_eq!(format_quantity(&exact(9, 16)), "0.56");
    }

    #[test]
    fn test_format_decimal_fallback() {
        assert_eq!(format_quantity(&exact(2, 5)), "0.4");
        assert_eq!(format_quantity(&exact(1, 7)), "0.14");
        assert_eq!(format_quantity(&exact(1, 16)), "0.06");
    }

    #[test]
    fn test_format_decimal_never_shows_trailing_zeros() {
        // 999/1000 rounds to a whole number, not "1.00"
        assert_eq!(format_quantity(&exact(999, 1000)), "1");
        assert_eq!(format_quantity(&exact(41, 20)), "2.05");
    }

    #[test]
    fn test_format_range() {
        let q = Quantity::Range(Rational64::new(4, 1), Rational64::new(6, 1));
        assert_eq!(format_quantity(&q), "4-6");

        let q = Quantity::Range(Rational64::new(1, 2), Rational64::new(3, 2));
        assert_eq!(format_quantity(&q), "1/2-1 1/2");
    }

    #[test]
    fn test_format_opaque_pass_through() {
        assert_eq!(
            format_quantity(&Quantity::Opaque("a pinch".to_string())),
            "a pinch"
        );
        assert_eq!(format_quantity(&Quantity::Opaque(String::new())), "");
    }
}
