//! 10dakot.co.il: Hebrew recipes, JSON-LD with an HTML fallback.

use super::SiteProfile;
use crate::duration::DurationStyle;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::{ImpliedUnit, IngredientGrammar};

const fn one(name: &'static str) -> ImpliedUnit {
    ImpliedUnit {
        name,
        unit: "unit",
        amount: Some(1.0),
        whole_word: false,
    }
}

pub static PROFILE: SiteProfile = SiteProfile {
    key: "10dakot_co_il",
    language: "he",
    dish_name: FieldSpec::first(&[
        Source::JsonLd("name"),
        Source::Meta("og:title"),
        Source::Css("h1"),
    ])
    .rewritten(&[Rewrite {
        // "מתכון ל..." ("recipe for ...")
        pattern: r"^מתכון\s+ל\s*",
        replacement: "",
    }]),
    description: FieldSpec::first(&[
        Source::JsonLd("description"),
        Source::Meta("description"),
        Source::Meta("og:description"),
    ]),
    ingredients: FieldSpec::first(&[
        Source::JsonLd("recipeIngredient"),
        Source::Css("[class*='ingredients'][class*='content'] li"),
    ])
    .rewritten(&[Rewrite {
        // section headings inside the list
        pattern: r"^.*:$",
        replacement: "",
    }]),
    instructions: FieldSpec::first(&[
        Source::JsonLd("recipeInstructions"),
        Source::Css("ol[class*='instruction'] li"),
        Source::Css("div[class*='instruction'] li"),
        Source::Css("div[class*='instruction'] p"),
    ]),
    category: FieldSpec::first(&[Source::JsonLd("recipeCategory"), Source::Meta("article:section")])
        .rewritten(&[
            Rewrite {
                pattern: r"^.*מרק.*$",
                replacement: "Soup",
            },
            Rewrite {
                pattern: r",.*$",
                replacement: "",
            },
        ]),
    notes: FieldSpec::first(&[
        Source::Pattern {
            inner: &Source::Css("p"),
            pattern: r"(?s)^\s*\d+\.\s*בחירת\s+\S+\s+(.{20,})$",
            template: "$1",
        },
        Source::Pattern {
            inner: &Source::Css("p"),
            pattern: r"(?s)^\s*(.{0,240}(?:השתמשו ב|טיפ|שימו לב).{0,240})\s*$",
            template: "$1",
        },
    ]),
    tags: FieldSpec::first(&[Source::Meta("article:tag"), Source::Meta("keywords")]),
    image_urls: FieldSpec::all(&[
        Source::Meta("og:image"),
        Source::JsonLd("image"),
        Source::CssAttr {
            selector: "img[class*='wp-image']",
            attr: "src",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "כוסות", "כוס", "כפות", "כף", "כפיות", "כפית", "יחידות", "יחידה", "שיניים", "שן",
            "גרמים", "גרם", "ק\"ג", "מ\"ל", "ליטר", "cups", "cup", "tablespoons", "tablespoon",
            "teaspoons", "teaspoon", "tbsp", "tsp", "pounds", "pound", "ounces", "ounce", "lbs",
            "lb", "oz", "grams", "gram", "g", "kilograms", "kilogram", "kg", "milliliters",
            "milliliter", "ml", "liters", "liter", "l", "unit", "cloves", "clove",
        ],
        unit_aliases: &[
            ("כוס", "cup"),
            ("כוסות", "cups"),
            ("כף", "tablespoon"),
            ("כפות", "tablespoons"),
            ("כפית", "teaspoon"),
            ("כפיות", "teaspoons"),
            ("יחידה", "unit"),
            ("יחידות", "unit"),
            ("שיניים", "cloves"),
            ("שן", "clove"),
            ("גרם", "gram"),
            ("גרמים", "grams"),
            ("ק\"ג", "kg"),
            ("מ\"ל", "ml"),
            ("ליטר", "liter"),
        ],
        connectors: &[],
        boilerplate: &[],
        strip_parentheses: true,
        bare_units: true,
        // countable vegetables listed without a quantity mean one of them
        implied_units: &[
            one("בצל"),
            one("גזר"),
            one("תפוח"),
            one("גמבה"),
            one("קישוא"),
            one("תפו\"א"),
            one("עגבני"),
            one("גבעול"),
            one("פלפל"),
            one("בטטה"),
            one("דלעת"),
        ],
        min_name_chars: 2,
        ..IngredientGrammar::BASIC
    },
    duration: DurationStyle::TotalMinutes,
    ..SiteProfile::GENERIC
};
