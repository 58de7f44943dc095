//! Free-form amount parsing
//!
//! Turns raw ingredient amounts ("1 1/2", "2-3", "a pinch") into typed
//! quantities. Parsing never fails: anything unrecognized becomes
//! opaque text that scaling leaves alone.

use num_rational::Rational64;

use super::quantity::Quantity;

/// Unicode fraction glyphs and their exact values
const FRACTION_GLYPHS: &[(char, i64, i64)] = &[
    ('¼', 1, 4),
    ('½', 1, 2),
    ('¾', 3, 4),
    ('⅐', 1, 7),
    ('⅑', 1, 9),
    ('⅒', 1, 10),
    ('⅓', 1, 3),
    ('⅔', 2, 3),
    ('⅕', 1, 5),
    ('⅖', 2, 5),
    ('⅗', 3, 5),
    ('⅘', 4, 5),
    ('⅙', 1, 6),
    ('⅚', 5, 6),
    ('⅛', 1, 8),
    ('⅜', 3, 8),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
];

/// Longest digit run accepted in a single token. Bounds every parsed
/// numerator and denominator so downstream exact arithmetic stays well
/// inside i64 range.
const MAX_DIGITS: usize = 9;

/// Parse a raw amount string into a quantity.
///
/// Recognized forms, first full match wins: mixed number ("1 1/2"),
/// vulgar fraction ("3/4"), unicode fraction glyph ("1½"), exact
/// decimal ("1.25"), plain integer, and ranges of any of those joined
/// by "-", an en/em dash, or " to ". Everything else, including the
/// empty string, is preserved as trimmed opaque text.
pub fn parse_amount(raw: &str) -> Quantity {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some(value) = parse_single(&normalized) {
        return Quantity::Exact(value);
    }
    if let Some((low, high)) = parse_range(&normalized) {
        return Quantity::Range(low, high);
    }
    Quantity::Opaque(raw.trim().to_string())
}

/// Parse one amount with no range separator.
fn parse_single(text: &str) -> Option<Rational64> {
    // Mixed number: whole part, space, fractional part ("1 1/2", "1 ½")
    if let Some((whole, frac)) = text.split_once(' ') {
        let whole = parse_integer(whole)?;
        let frac = parse_fraction_token(frac)?;
        return Some(Rational64::from_integer(whole) + frac);
    }

    if text.contains('/') {
        return parse_vulgar(text);
    }
    if let Some(value) = parse_glyph_form(text) {
        return Some(value);
    }
    if text.contains('.') {
        return parse_decimal(text);
    }
    parse_integer(text).map(Rational64::from_integer)
}

/// A fractional token on its own: "1/2" or a single glyph
fn parse_fraction_token(text: &str) -> Option<Rational64> {
    if text.contains('/') {
        return parse_vulgar(text);
    }
    let mut chars = text.chars();
    let glyph = glyph_value(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(glyph)
}

/// "num/den"; a zero denominator is not a number
fn parse_vulgar(text: &str) -> Option<Rational64> {
    let (numer, denom) = text.split_once('/')?;
    let numer = parse_integer(numer)?;
    let denom = parse_integer(denom)?;
    if denom == 0 {
        return None;
    }
    Some(Rational64::new(numer, denom))
}

/// A glyph optionally preceded by an integer, with no space: "½", "1½"
fn parse_glyph_form(text: &str) -> Option<Rational64> {
    let glyph_char = text.chars().last()?;
    let glyph = glyph_value(glyph_char)?;
    let prefix = &text[..text.len() - glyph_char.len_utf8()];
    if prefix.is_empty() {
        return Some(glyph);
    }
    let whole = parse_integer(prefix)?;
    Some(Rational64::from_integer(whole) + glyph)
}

fn glyph_value(c: char) -> Option<Rational64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _, _)| *glyph == c)
        .map(|&(_, numer, denom)| Rational64::new_raw(numer, denom))
}

/// "digits.digits", converted by multiplying out the decimal places so
/// the value is exact ("1.25" -> 5/4), never routed through a float
fn parse_decimal(text: &str) -> Option<Rational64> {
    let (whole, places) = text.split_once('.')?;
    let whole = parse_integer(whole)?;
    if places.is_empty()
        || places.len() > MAX_DIGITS
        || !places.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let denom = 10_i64.pow(places.len() as u32);
    let fractional = places.parse::<i64>().ok()?;
    let numer = whole.checked_mul(denom)?.checked_add(fractional)?;
    Some(Rational64::new(numer, denom))
}

/// An unsigned digit run of at most MAX_DIGITS
fn parse_integer(text: &str) -> Option<i64> {
    if text.is_empty() || text.len() > MAX_DIGITS || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// A range: one amount on each side of the separator, swapped if the
/// bounds arrive backwards
fn parse_range(text: &str) -> Option<(Rational64, Rational64)> {
    let (left, right) = split_range(text)?;
    let low = parse_single(left.trim())?;
    let high = parse_single(right.trim())?;
    if low <= high {
        Some((low, high))
    } else {
        Some((high, low))
    }
}

fn split_range(text: &str) -> Option<(&str, &str)> {
    if let Some(split) = text.split_once(" to ") {
        return Some(split);
    }
    let idx = text.find(|c| matches!(c, '-' | '–' | '—'))?;
    let sep_len = text[idx..].chars().next()?.len_utf8();
    Some((&text[..idx], &text[idx + sep_len..]))
}
