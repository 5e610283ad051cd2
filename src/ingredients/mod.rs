//! Ingredient lines to `{name, amount, unit}`.
//!
//! Every site describes its ingredient language with an [`IngredientGrammar`]
//! table; [`IngredientParser`] is the one engine that reads any of them.

mod amount;

pub use amount::coerce_amount;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;
use crate::model::{Amount, Ingredient};
use crate::text::{clean_text, normalize_fractions};

/// Integer, decimal, fraction, mixed number or range, in that priority.
const AMOUNT_PATTERN: &str = r"\d+\s+\d+\s*/\s*\d+|\d+\s*/\s*\d+|\d+(?:[.,]\d+)?\s*[-–—~]\s*\d+(?:[.,]\d+)?|\d+(?:[.,]\d+)?";

const NAME_SEPARATORS: &str = r"[\s:—–-]*";

static LEADING_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?:{AMOUNT_PATTERN})")).unwrap());

static PARENTHESES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)|（[^）]*）").unwrap());

static LEADING_PARENTHESIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\([^)]*\)\s*").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static TO_TASTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*,?\s+to taste\b").unwrap());

static TRAILING_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\d⁄/]+)\s*$").unwrap());

static AND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());

/// Metric and US kitchen units, usable as a starting vocabulary.
pub const ENGLISH_UNITS: &[&str] = &[
    "cups", "cup", "tablespoons", "tablespoon", "tbsp", "teaspoons", "teaspoon", "tsp",
    "pounds", "pound", "lbs", "lb", "ounces", "ounce", "oz", "grams", "gram", "g",
    "kilograms", "kilogram", "kg", "milliliters", "milliliter", "ml", "liters", "liter",
    "l", "pinch", "pinches", "cloves", "clove", "cans", "can", "slices", "slice",
];

/// Where the quantity sits relative to the ingredient name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    /// `500 g flour`
    #[default]
    AmountFirst,
    /// `砂糖 大さじ1`, `우유 200ml`; falls back to amount-first lines.
    NameFirst,
}

/// Fills in a unit for countable names that carry none.
///
/// A rule with an `amount` only fires when the line had neither amount nor
/// unit; a rule without one fires whenever the unit is missing.
#[derive(Debug, Clone, Copy)]
pub struct ImpliedUnit {
    pub name: &'static str,
    pub unit: &'static str,
    pub amount: Option<f64>,
    /// Match the whole name rather than its beginning.
    pub whole_word: bool,
}

/// The ingredient vocabulary of one site.
#[derive(Debug, Clone, Copy)]
pub struct IngredientGrammar {
    pub order: WordOrder,
    pub units: &'static [&'static str],
    /// Raw unit (matched case-insensitively) to canonical unit.
    pub unit_aliases: &'static [(&'static str, &'static str)],
    /// Words standing in for a number, kept as a textual amount.
    pub amount_words: &'static [&'static str],
    /// Markers such as `適量` that become the unit with no amount.
    pub vague_quantities: &'static [&'static str],
    /// Dropped between the unit and the name (`of`, `de`, `d'`).
    pub connectors: &'static [&'static str],
    pub boilerplate: &'static [&'static str],
    pub strip_parentheses: bool,
    /// A unit may open the line without an amount (`pinch salt`).
    pub bare_units: bool,
    pub implied_units: &'static [ImpliedUnit],
    /// Unit for an amount that has none.
    pub default_unit: Option<&'static str>,
    /// Lines dropped when they equal one of these (case-insensitive).
    pub skip_lines: &'static [&'static str],
    pub skip_containing: &'static [&'static str],
    pub skip_prefixes: &'static [&'static str],
    /// Lines opening with one of these are dropped; a number or fraction at
    /// their end becomes the amount of the following line.
    pub carry_prefixes: &'static [&'static str],
    /// Split `salt and pepper to taste` into two entries.
    pub split_seasoning_pairs: bool,
    pub min_name_chars: usize,
}

impl IngredientGrammar {
    pub const BASIC: IngredientGrammar = IngredientGrammar {
        order: WordOrder::AmountFirst,
        units: ENGLISH_UNITS,
        unit_aliases: &[],
        amount_words: &[],
        vague_quantities: &[],
        connectors: &["of"],
        boilerplate: &["to taste", "as needed", "optional"],
        strip_parentheses: false,
        bare_units: false,
        implied_units: &[],
        default_unit: None,
        skip_lines: &[],
        skip_containing: &[],
        skip_prefixes: &[],
        carry_prefixes: &[],
        split_seasoning_pairs: false,
        min_name_chars: 1,
    };
}

impl Default for IngredientGrammar {
    fn default() -> Self {
        Self::BASIC
    }
}

struct Parts<'a> {
    amount: Option<&'a str>,
    unit: Option<&'a str>,
    name: &'a str,
}

/// Compiled form of an [`IngredientGrammar`].
#[derive(Debug)]
pub struct IngredientParser {
    grammar: &'static IngredientGrammar,
    units: Vec<&'static str>,
    amount_words: Vec<&'static str>,
    vague: Option<Regex>,
    name_first: Option<(Regex, Regex)>,
    boilerplate: Option<Regex>,
}

fn longest_first(words: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = words.to_vec();
    sorted.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    sorted
}

fn alternation(words: &[&'static str]) -> String {
    longest_first(words)
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

/// Case-insensitive `strip_prefix`.
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = chars.next().map_or(text.len(), |(index, _)| index);
    Some(&text[end..])
}

/// First word of `words` that opens `text` and ends on a word boundary.
fn leading_word<'a>(text: &'a str, words: &[&'static str]) -> Option<(&'a str, &'a str)> {
    words.iter().find_map(|word| {
        let rest = strip_prefix_ci(text, word)?;
        if rest.starts_with(char::is_alphanumeric) {
            return None;
        }
        Some((&text[..text.len() - rest.len()], rest.trim_start()))
    })
}

impl IngredientParser {
    pub fn new(grammar: &'static IngredientGrammar) -> Result<Self, ExtractError> {
        let vague = if grammar.vague_quantities.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"(?i)^(?P<name>.+?){NAME_SEPARATORS}(?P<vague>{})$",
                alternation(grammar.vague_quantities)
            ))?)
        };

        let name_first = match grammar.order {
            WordOrder::AmountFirst => None,
            WordOrder::NameFirst => {
                let units = alternation(grammar.units);
                let amount_then_unit = Regex::new(&format!(
                    r"(?i)^(?P<name>.+?){NAME_SEPARATORS}(?P<amount>{AMOUNT_PATTERN})\s*(?P<unit>{units})?\.?$"
                ))?;
                let unit_then_amount = Regex::new(&format!(
                    r"(?i)^(?P<name>.+?){NAME_SEPARATORS}(?P<unit>{units})\s*(?P<amount>{AMOUNT_PATTERN})$"
                ))?;
                Some((unit_then_amount, amount_then_unit))
            }
        };

        let boilerplate = if grammar.boilerplate.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"(?i)(?:^|[\s,;(]+)(?:{})(?:[\s,;.)]+|$)",
                alternation(grammar.boilerplate)
            ))?)
        };

        Ok(IngredientParser {
            grammar,
            units: longest_first(grammar.units),
            amount_words: longest_first(grammar.amount_words),
            vague,
            name_first,
            boilerplate,
        })
    }

    pub fn grammar(&self) -> &'static IngredientGrammar {
        self.grammar
    }

    /// Parse one ingredient line.
    ///
    /// A line without a recognizable quantity becomes a bare name. `None`
    /// means nothing meaningful was left (empty line, pure boilerplate).
    pub fn parse(&self, raw: &str) -> Option<Ingredient> {
        let line = normalize_fractions(&clean_text(raw));
        let line = line.trim_start_matches(['-', '•', '*', '·']).trim();
        if line.is_empty() {
            return None;
        }

        let parts = self
            .split_vague(line)
            .or_else(|| self.split_name_first(line))
            .or_else(|| self.split_amount_first(line))
            .unwrap_or(Parts {
                amount: None,
                unit: None,
                name: line,
            });

        self.finish(parts)
    }

    /// Parse a list of raw lines, applying the grammar's skip and split rules.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Ingredient>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ingredients = Vec::new();
        let mut carried: Option<String> = None;

        for raw in lines {
            let mut line = clean_text(raw.as_ref());
            if line.is_empty() {
                continue;
            }
            if let Some(amount) = carried.take() {
                line = format!("{amount} {line}");
            } else if self.should_skip(&line) {
                debug!("Skipping ingredient line: {line}");
                continue;
            } else if self.opens_with(self.grammar.carry_prefixes, &line) {
                carried = TRAILING_AMOUNT.captures(&line).map(|caps| caps[1].to_string());
                debug!("Dropping ingredient fragment: {line}");
                continue;
            }

            if let Some(pair) = self.seasoning_pair(&line) {
                ingredients.extend(pair.iter().filter_map(|part| self.parse(part)));
                continue;
            }

            if let Some(ingredient) = self.parse(&line) {
                ingredients.push(ingredient);
            }
        }

        ingredients
    }

    fn should_skip(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.grammar
            .skip_lines
            .iter()
            .any(|skip| lower == skip.to_lowercase())
            || self
                .grammar
                .skip_containing
                .iter()
                .any(|skip| lower.contains(&skip.to_lowercase()))
            || self.opens_with(self.grammar.skip_prefixes, line)
    }

    fn opens_with(&self, prefixes: &[&str], line: &str) -> bool {
        let lower = line.to_lowercase();
        prefixes
            .iter()
            .any(|prefix| lower.starts_with(&prefix.to_lowercase()))
    }

    fn seasoning_pair(&self, line: &str) -> Option<Vec<String>> {
        if !self.grammar.split_seasoning_pairs || !TO_TASTE.is_match(line) || !AND.is_match(line) {
            return None;
        }

        let without = TO_TASTE.replace_all(line, "");
        Some(
            AND.split(&without)
                .map(|part| part.trim().to_lowercase())
                .filter(|part| !part.is_empty())
                .collect(),
        )
    }

    fn split_vague<'a>(&self, line: &'a str) -> Option<Parts<'a>> {
        let caps = self.vague.as_ref()?.captures(line)?;
        Some(Parts {
            amount: None,
            unit: caps.name("vague").map(|m| m.as_str()),
            name: caps.name("name")?.as_str(),
        })
    }

    fn split_name_first<'a>(&self, line: &'a str) -> Option<Parts<'a>> {
        // "설탕 큰술 2" would otherwise read as name "설탕 큰술"
        let (unit_then_amount, amount_then_unit) = self.name_first.as_ref()?;
        let caps = unit_then_amount
            .captures(line)
            .or_else(|| amount_then_unit.captures(line))?;

        Some(Parts {
            amount: caps.name("amount").map(|m| m.as_str()),
            unit: caps.name("unit").map(|m| m.as_str()),
            name: caps.name("name")?.as_str(),
        })
    }

    fn split_amount_first<'a>(&self, line: &'a str) -> Option<Parts<'a>> {
        let (amount, mut rest) = match self.leading_amount(line) {
            Some((amount, rest)) => (Some(amount), rest),
            None => (None, line),
        };

        if amount.is_some() && self.grammar.strip_parentheses {
            // "1 (14 oz) can tomatoes"
            if let Some(m) = LEADING_PARENTHESIS.find(rest) {
                rest = &rest[m.end()..];
            }
        }

        let mut unit = None;
        if amount.is_some() || self.grammar.bare_units {
            if let Some((found, after)) = leading_word(rest, &self.units) {
                // "3 cloves": the unit word is all there is, so it is the name
                if !after.is_empty() {
                    unit = Some(found);
                    rest = after;
                }
            }
        }

        if amount.is_none() && unit.is_none() {
            return None;
        }

        // "1 cup 2 percent milk": a name opening with another amount would
        // lose it on the next parse, so the whole line stays the name
        if self.leading_amount(rest).is_some() {
            return None;
        }

        Some(Parts {
            amount,
            unit,
            name: rest,
        })
    }

    fn leading_amount<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        if let Some(m) = LEADING_AMOUNT.find(line) {
            let rest = &line[m.end()..];
            // "2% milk" and "7-up" are names, "100g" is an amount with a unit
            if rest.is_empty()
                || rest.starts_with(char::is_whitespace)
                || leading_word(rest, &self.units).is_some()
            {
                return Some((m.as_str(), rest.trim_start()));
            }
            return None;
        }

        leading_word(line, &self.amount_words)
    }

    fn finish(&self, parts: Parts) -> Option<Ingredient> {
        let name = self.clean_name(parts.name);
        if name.chars().count() < self.grammar.min_name_chars.max(1) {
            return None;
        }

        let mut amount = parts.amount.and_then(|raw| {
            if self.is_amount_word(raw) {
                Some(Amount::Text(raw.to_lowercase()))
            } else {
                coerce_amount(raw)
            }
        });
        let mut unit = parts.unit.map(|unit| self.canonical_unit(unit));

        if unit.is_none() {
            let lower = name.to_lowercase();
            let rule = self.grammar.implied_units.iter().find(|rule| {
                let matches = if rule.whole_word {
                    lower == rule.name
                } else {
                    lower.starts_with(rule.name)
                };
                matches && (rule.amount.is_none() || amount.is_none())
            });
            if let Some(rule) = rule {
                unit = Some(rule.unit.to_string());
                if let Some(implied) = rule.amount {
                    amount = Some(implied.into());
                }
            }
        }

        if unit.is_none() && amount.is_some() {
            unit = self.grammar.default_unit.map(str::to_string);
        }

        Some(Ingredient { name, amount, unit })
    }

    fn is_amount_word(&self, raw: &str) -> bool {
        let lower = raw.trim().to_lowercase();
        self.amount_words.iter().any(|word| word.to_lowercase() == lower)
    }

    fn canonical_unit(&self, raw: &str) -> String {
        let raw = raw.trim();
        let lower = raw.to_lowercase();
        self.grammar
            .unit_aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == lower)
            .map_or_else(|| raw.to_string(), |(_, canonical)| canonical.to_string())
    }

    fn clean_name(&self, name: &str) -> String {
        let mut name = name.trim().to_string();

        for connector in self.grammar.connectors {
            if let Some(rest) = strip_prefix_ci(&name, connector) {
                let elided = connector.ends_with(['\'', '’']);
                if elided || rest.starts_with(char::is_whitespace) {
                    name = rest.trim_start().to_string();
                    break;
                }
            }
        }

        if self.grammar.strip_parentheses {
            name = PARENTHESES.replace_all(&name, " ").into_owned();
        }

        if let Some(boilerplate) = &self.boilerplate {
            // adjacent phrases share separators, so repeat until stable
            loop {
                let replaced = boilerplate.replace_all(&name, " ").into_owned();
                if replaced == name {
                    break;
                }
                name = replaced;
            }
        }

        WHITESPACE
            .replace_all(&name, " ")
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-' | '–' | '—'))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;

    static ENGLISH: IngredientGrammar = IngredientGrammar {
        strip_parentheses: true,
        bare_units: true,
        implied_units: &[
            ImpliedUnit { name: "egg", unit: "unit", amount: None, whole_word: true },
            ImpliedUnit { name: "eggs", unit: "unit", amount: None, whole_word: true },
        ],
        skip_lines: &["chopped"],
        skip_containing: &["cut into thin strips"],
        skip_prefixes: &["("],
        carry_prefixes: &["cut into"],
        split_seasoning_pairs: true,
        ..IngredientGrammar::BASIC
    };

    static KOREAN: IngredientGrammar = IngredientGrammar {
        order: WordOrder::NameFirst,
        units: &["개", "ml", "g", "큰술", "작은술", "컵"],
        vague_quantities: &["약간", "적당량"],
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    };

    static FRENCH: IngredientGrammar = IngredientGrammar {
        units: &["g", "cl", "cuillères à soupe", "cuillère à soupe", "pincée"],
        connectors: &["de", "d'"],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    };

    static ARABIC: IngredientGrammar = IngredientGrammar {
        units: &["كوب", "ملعقة كبيرة"],
        default_unit: Some("عدد"),
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    };

    static LITHUANIAN: IngredientGrammar = IngredientGrammar {
        units: &["g", "šaukšto"],
        amount_words: &["žiupsnelio", "saujos"],
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    };

    fn english() -> IngredientParser {
        IngredientParser::new(&ENGLISH).unwrap()
    }

    fn ingredient(name: &str, amount: Option<Amount>, unit: Option<&str>) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount,
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn test_amount_unit_name() {
        let parser = english();
        assert_eq!(
            parser.parse("1 cup all-purpose flour"),
            Some(ingredient("all-purpose flour", Some(1.0.into()), Some("cup")))
        );
        assert_eq!(
            parser.parse("1½ tablespoons olive oil"),
            Some(ingredient("olive oil", Some(1.5.into()), Some("tablespoons")))
        );
        assert_eq!(
            parser.parse("250g butter"),
            Some(ingredient("butter", Some(250.0.into()), Some("g")))
        );
    }

    #[test]
    fn test_unit_needs_word_boundary() {
        let parser = english();
        assert_eq!(
            parser.parse("2 garlic bulbs"),
            Some(ingredient("garlic bulbs", Some(2.0.into()), None))
        );
    }

    #[test]
    fn test_ranges_kept_verbatim() {
        let parser = english();
        assert_eq!(
            parser.parse("10-12 cherry tomatoes"),
            Some(ingredient("cherry tomatoes", Some("10-12".into()), None))
        );
    }

    #[test]
    fn test_name_cleanup() {
        let parser = english();
        assert_eq!(
            parser.parse("1 (14 oz) can diced tomatoes"),
            Some(ingredient("diced tomatoes", Some(1.0.into()), Some("can")))
        );
        assert_eq!(
            parser.parse("Salt, to taste"),
            Some(ingredient("Salt", None, None))
        );
        assert_eq!(
            parser.parse("pinch of salt"),
            Some(ingredient("salt", None, Some("pinch")))
        );
        assert_eq!(parser.parse("optional, to taste"), None);
        assert_eq!(parser.parse("   "), None);
    }

    #[test]
    fn test_unrecognized_line_is_a_name() {
        let parser = english();
        assert_eq!(
            parser.parse("Fresh basil leaves"),
            Some(ingredient("Fresh basil leaves", None, None))
        );
        assert_eq!(
            parser.parse("2% milk"),
            Some(ingredient("2% milk", None, None))
        );
    }

    #[test]
    fn test_unit_alone_is_the_name() {
        let parser = english();
        assert_eq!(
            parser.parse("3 cloves"),
            Some(ingredient("cloves", Some(3.0.into()), None))
        );
    }

    #[test]
    fn test_implied_unit() {
        let parser = english();
        assert_eq!(
            parser.parse("2 eggs"),
            Some(ingredient("eggs", Some(2.0.into()), Some("unit")))
        );
    }

    #[test]
    fn test_parse_lines_rules() {
        let parser = english();
        let lines = [
            "1 cup rice",
            "chopped",
            "1/2 red pepper, cut into thin strips",
            "(10 oz.) bag spinach",
            "salt and pepper to taste",
        ];

        assert_eq!(
            parser.parse_lines(lines),
            vec![
                ingredient("rice", Some(1.0.into()), Some("cup")),
                ingredient("salt", None, None),
                ingredient("pepper", None, None),
            ]
        );
    }

    #[test]
    fn test_fragment_amount_moves_to_next_line() {
        let parser = english();
        let lines = [
            "1 lb beef",
            "cut into 1-inch cubes 1/4",
            "cup soy sauce",
            "cut into wedges",
            "1 lime",
        ];

        assert_eq!(
            parser.parse_lines(lines),
            vec![
                ingredient("beef", Some(1.0.into()), Some("lb")),
                ingredient("soy sauce", Some(0.25.into()), Some("cup")),
                ingredient("lime", Some(1.0.into()), None),
            ]
        );
    }

    #[test]
    fn test_amount_words_are_lowercased() {
        let parser = IngredientParser::new(&LITHUANIAN).unwrap();
        assert_eq!(
            parser.parse("Žiupsnelio druskos"),
            Some(ingredient("druskos", Some("žiupsnelio".into()), None))
        );
        assert_eq!(
            parser.parse("saujos krapų"),
            Some(ingredient("krapų", Some("saujos".into()), None))
        );
        assert_eq!(
            parser.parse("2 šaukšto aliejaus"),
            Some(ingredient("aliejaus", Some(2.0.into()), Some("šaukšto")))
        );
    }

    #[test]
    fn test_name_first_order() {
        let parser = IngredientParser::new(&KOREAN).unwrap();
        assert_eq!(
            parser.parse("우유 200ml"),
            Some(ingredient("우유", Some(200.0.into()), Some("ml")))
        );
        assert_eq!(
            parser.parse("달걀 5~6개"),
            Some(ingredient("달걀", Some("5~6".into()), Some("개")))
        );
        assert_eq!(
            parser.parse("설탕 큰술 2"),
            Some(ingredient("설탕", Some(2.0.into()), Some("큰술")))
        );
        assert_eq!(
            parser.parse("소금 약간"),
            Some(ingredient("소금", None, Some("약간")))
        );
        // amount-first lines still parse
        assert_eq!(
            parser.parse("2개 양파"),
            Some(ingredient("양파", Some(2.0.into()), Some("개")))
        );
    }

    #[test]
    fn test_connectors() {
        let parser = IngredientParser::new(&FRENCH).unwrap();
        assert_eq!(
            parser.parse("200 g de farine"),
            Some(ingredient("farine", Some(200.0.into()), Some("g")))
        );
        assert_eq!(
            parser.parse("2 cuillères à soupe d'huile"),
            Some(ingredient("huile", Some(2.0.into()), Some("cuillères à soupe")))
        );
        // "de" only goes when it is a separate word
        assert_eq!(
            parser.parse("1 dessert"),
            Some(ingredient("dessert", Some(1.0.into()), None))
        );
    }

    #[test]
    fn test_default_unit() {
        let parser = IngredientParser::new(&ARABIC).unwrap();
        assert_eq!(
            parser.parse("2 بيض"),
            Some(ingredient("بيض", Some(2.0.into()), Some("عدد")))
        );
        assert_eq!(
            parser.parse("1 كوب حليب"),
            Some(ingredient("حليب", Some(1.0.into()), Some("كوب")))
        );
    }

    #[test]
    fn test_reparsing_a_name_is_stable() {
        let parser = english();
        for line in [
            "1 cup all-purpose flour",
            "2 eggs",
            "1 (14 oz) can diced tomatoes",
            "10-12 cherry tomatoes",
            "2% milk",
            "3 cloves",
            "1 cup 2 percent milk",
        ] {
            let first = parser.parse(line).unwrap();
            let second = parser.parse(&first.name).unwrap();
            assert_eq!(second.name, first.name, "{line}");
            assert_eq!(second.amount, None, "{line}");
        }
    }
}
