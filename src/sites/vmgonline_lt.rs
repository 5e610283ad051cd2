//! vmgonline.lt: JSON-LD recipes with Lithuanian ingredient lines.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "vmgonline_lt",
    language: "lt",
    dish_name: FieldSpec::first(&[Source::JsonLd("name"), Source::Css("h1"), Source::Title])
        .rewritten(&[
            // "#123. " numbering from the site's listings
            Rewrite {
                pattern: r"^#[^\s.]+\.\s*",
                replacement: "",
            },
            Rewrite {
                pattern: r"(?i)\s*\(Receptas\).*$",
                replacement: "",
            },
            Rewrite {
                pattern: r"(?i)\s*VMGonline\s*$",
                replacement: "",
            },
        ]),
    description: FieldSpec::first(&[
        Source::JsonLd("description"),
        // meta descriptions run on; keep the first two sentences
        Source::Pattern {
            inner: &Source::Meta("description"),
            pattern: r"(?s)^((?:[^.]*\.){2}|.*)",
            template: "$1",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "g", "ml", "l", "kg", "tbsp", "tsp", "pcs", "vnt.", "vnt", "šaukštų", "šaukšto",
            "šaukštelių", "šaukštelio", "valgomųjų", "arbatinių", "puodelių", "puodelio",
        ],
        amount_words: &["žiupsnelio", "šlakelio", "saujos"],
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
