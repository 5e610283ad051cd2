//! Text cleanup shared by every site table.

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static GLUED_TIME_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)(minutes?|mins?|hours?|hrs?|days?)\b").unwrap()
});

const DECORATIONS: &[char] = &['▢', '□', '✓', '✔', '▪', '▫', '●', '○', '■'];

const FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
];

pub fn decode_html_symbols(text: &str) -> String {
    // embedded metadata is frequently escaped twice
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Decode entities, drop decorative glyphs and soft hyphens, collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_symbols(text);
    let stripped: String = decoded
        .chars()
        .filter(|c| *c != '\u{ad}' && !DECORATIONS.contains(c))
        .collect();
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// `clean_text`, returning `None` when nothing is left.
pub fn non_empty(text: &str) -> Option<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Replace vulgar-fraction glyphs with `n/d`; `1½` becomes `1 1/2`.
pub fn normalize_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if c == '⁄' {
            out.push('/');
        } else if let Some((_, replacement)) = FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            if prev.is_some_and(|p| p.is_ascii_digit()) {
                out.push(' ');
            }
            out.push_str(replacement);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// `30minutes` -> `30 minutes`
pub fn normalize_time_text(text: &str) -> String {
    let spaced = GLUED_TIME_UNIT.replace_all(text, "$1 $2");
    clean_text(&spaced)
}

pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}
