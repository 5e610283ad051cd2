//! misya.info: ingredient rows carry their parts as `data-ingredient-*`
//! attributes.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "misya_info",
    language: "it",
    dish_name: FieldSpec::first(&[
        Source::JsonLd("name"),
        Source::Css("h1"),
        Source::Meta("og:title"),
        Source::Title,
    ])
    .rewritten(&[Rewrite {
        pattern: r"(?i)\s+[-–]\s+(?:Ricetta|Misya).*$",
        replacement: "",
    }]),
    ingredients: FieldSpec::first(&[
        Source::Attrs {
            selector: "li[data-ingredient-name]",
            attrs: &[
                "data-ingredient-amount",
                "data-ingredient-unit",
                "data-ingredient-name",
            ],
        },
        Source::JsonLd("recipeIngredient"),
        Source::Css("ul[class*='ingredient'] li"),
    ]),
    notes: FieldSpec::first(&[
        Source::Css("[class*='note'] p"),
        Source::Prose {
            container: "h2, h3, h4",
            marker: "note",
            split: "",
        },
    ]),
    tags: FieldSpec::first(&[
        Source::JsonLd("keywords"),
        Source::Css("[class*='recipe-tags'] .tag"),
        Source::Meta("keywords"),
    ]),
    image_urls: FieldSpec::all(&[
        Source::JsonLd("image"),
        Source::Meta("og:image"),
        Source::Meta("twitter:image"),
    ]),
    nutrition_info: FieldSpec::first(&[
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.calories"),
            pattern: r"(\d+)",
            template: "$1 kcal",
        },
        Source::Pattern {
            inner: &Source::Css("[class*='nutrition']"),
            pattern: r"(?i)(\d+)\s*kcal(?:\s*;\s*(\d+)/(\d+)/(\d+))?",
            template: "$0",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "g", "kg", "ml", "l", "cucchiai", "cucchiaio", "cucchiaini", "cucchiaino",
            "bustine", "bustina", "pizzichi", "pizzico", "q.b.", "litri", "litro", "etti",
            "etto", "grammi", "grammo", "spicchi", "spicchio",
        ],
        unit_aliases: &[("grammi", "g"), ("grammo", "g"), ("litri", "l"), ("litro", "l")],
        // "sale q.b."
        vague_quantities: &["q.b.", "qb"],
        connectors: &["di"],
        boilerplate: &["quanto basta", "a piacere", "facoltativo", "opzionale"],
        strip_parentheses: true,
        bare_units: true,
        min_name_chars: 2,
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
