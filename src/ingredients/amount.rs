use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Amount;

static MIXED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)$").unwrap());
static FRACTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:[.,]\d+)?$").unwrap());

fn ratio(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn parse_number(raw: &str) -> Option<f64> {
    if DECIMAL.is_match(raw) {
        return raw.replace(',', ".").parse().ok();
    }
    if let Some(caps) = FRACTION.captures(raw) {
        return ratio(&caps[1], &caps[2]);
    }
    if let Some(caps) = MIXED.captures(raw) {
        let whole: f64 = caps[1].parse().ok()?;
        return ratio(&caps[2], &caps[3]).map(|fraction| whole + fraction);
    }
    None
}

/// Turn an amount substring into an [`Amount`].
///
/// Integers, decimals (`1.5`, `1,5`), fractions and mixed numbers become
/// numbers. Anything else, ranges included, is kept verbatim.
pub fn coerce_amount(raw: &str) -> Option<Amount> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    Some(match parse_number(raw) {
        Some(number) => Amount::Number(number),
        None => Amount::Text(raw.to_string()),
    })
}
