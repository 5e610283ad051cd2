//! kwestiasmaku.com: Drupal field blocks, Polish ingredient lines.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

static BODY: Source = Source::Css("body");

static METHOD: Source = Source::Css("div[class*='field-przygotowanie']");

pub static PROFILE: SiteProfile = SiteProfile {
    key: "kwestiasmaku_com",
    language: "pl",
    dish_name: FieldSpec::first(&[Source::Css("h1"), Source::Meta("og:title"), Source::Title])
        .rewritten(&[Rewrite {
            pattern: r"(?i)\s*\|\s*Kwestia\s+Smaku\s*$",
            replacement: "",
        }]),
    description: FieldSpec::first(&[Source::Meta("description"), Source::Meta("og:description")]),
    ingredients: FieldSpec::first(&[
        Source::Css("div[class*='field-name-field-skladniki'] li"),
        Source::JsonLd("recipeIngredient"),
    ]),
    instructions: FieldSpec::first(&[
        Source::Css("div[class*='field-name-field-przygotowanie'] li"),
        Source::JsonLd("recipeInstructions"),
    ]),
    category: FieldSpec::first(&[Source::Meta("article:section"), Source::JsonLd("recipeCategory")]),
    prep_time: FieldSpec::first(&[
        Source::Pattern {
            inner: &BODY,
            pattern: r"(?i)przygotowani[ea][:\s]+(\d+)\s*godzin",
            template: "$1 hours",
        },
        Source::Pattern {
            inner: &BODY,
            pattern: r"(?i)przygotowani[ea][:\s]+(\d+)\s*minut",
            template: "$1 minutes",
        },
    ]),
    cook_time: FieldSpec::first(&[
        Source::Pattern {
            inner: &METHOD,
            pattern: r"(?i)(\d+)\s*godzin",
            template: "$1 hours",
        },
        Source::Pattern {
            inner: &METHOD,
            pattern: r"(?i)(\d+)\s*minut",
            template: "$1 minutes",
        },
    ]),
    total_time: FieldSpec::NONE,
    notes: FieldSpec::first(&[Source::Css("div[class*='field-name-field-wskazowki'] li")]),
    tags: FieldSpec::all(&[
        Source::Meta("keywords"),
        Source::Css("nav[class*='breadcrumb'] a"),
    ])
    .rewritten(&[Rewrite {
        pattern: r"(?i)^(?:home|start|strona główna|główna)$",
        replacement: "",
    }]),
    image_urls: FieldSpec::all(&[
        Source::Meta("og:image"),
        Source::CssAttr {
            selector: "div[class*='view-zdjecia'] img",
            attr: "src",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "kg", "g", "ml", "l", "łyżka", "łyżki", "łyżek", "łyżeczka", "łyżeczki",
            "łyżeczek", "szklanka", "szklanki", "szklanek", "kawałków", "kawałki", "kawałek",
            "porcja", "porcje", "porcji", "szczypta", "ząbki", "ząbek",
        ],
        unit_aliases: &[
            ("łyżka", "łyżki"),
            ("łyżek", "łyżki"),
            ("łyżeczka", "łyżeczki"),
            ("łyżeczek", "łyżeczki"),
            ("szklanka", "szklanki"),
            ("szklanek", "szklanki"),
            ("kawałki", "kawałków"),
            ("kawałek", "kawałków"),
            ("porcja", "porcje"),
            ("porcji", "porcje"),
        ],
        connectors: &[],
        boilerplate: &["do smaku", "opcjonalnie"],
        strip_parentheses: true,
        ..IngredientGrammar::BASIC
    },
    total_from_parts: true,
    ..SiteProfile::GENERIC
};
