//! eatthis.com: JSON-LD recipes plus the wp-parsely article metadata, which
//! carries the tips, keywords and nutrition sentence.

use super::SiteProfile;
use crate::duration::DurationStyle;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::{ImpliedUnit, IngredientGrammar};

const PARSELY: &str = "script.wp-parsely-metadata";

static ARTICLE_BODY: Source = Source::JsonLdScript {
    selector: PARSELY,
    path: "articleBody",
};

pub static PROFILE: SiteProfile = SiteProfile {
    key: "eatthis_com",
    language: "en",
    dish_name: FieldSpec::first(&[Source::JsonLd("name")]).rewritten(&[
        Rewrite {
            pattern: r"(?i)\s+(?:Recipe|Eat This Not That).*$",
            replacement: "",
        },
        Rewrite {
            pattern: r"(?i)^(?:A\s+)?\d+(?:-|\s+)?Minute\s+",
            replacement: "",
        },
        Rewrite {
            pattern: r"(?i)^Healthy\s+",
            replacement: "",
        },
    ]),
    description: FieldSpec::first(&[Source::Meta("description"), Source::JsonLd("description")])
        .rewritten(&[Rewrite {
            pattern: r"\.\.\.$",
            replacement: "",
        }]),
    ingredients: FieldSpec::first(&[Source::JsonLd("recipeIngredient")]),
    instructions: FieldSpec::first(&[Source::JsonLd("recipeInstructions")]),
    category: FieldSpec::first(&[Source::JsonLd("recipeCategory")]),
    prep_time: FieldSpec::first(&[Source::JsonLd("prepTime")]),
    cook_time: FieldSpec::first(&[Source::JsonLd("cookTime")]),
    total_time: FieldSpec::first(&[Source::JsonLd("totalTime")]),
    notes: FieldSpec::first(&[Source::Pattern {
        inner: &ARTICLE_BODY,
        pattern: r"(?is)Eat This Tip\s+(.+?)(?:\n\s*\n|\z)",
        template: "$1",
    }])
    .rewritten(&[
        Rewrite {
            pattern: r"(?i)\s*(?:Invent at will|Here are|Try these|For example).*$",
            replacement: "",
        },
        Rewrite {
            pattern: r"(?i),?\s*but take these ideas.*$",
            replacement: "",
        },
        Rewrite {
            pattern: r"(?i)\s*\(or just use.*$",
            replacement: "",
        },
        Rewrite {
            pattern: r"[.:,]+$",
            replacement: "",
        },
    ]),
    tags: FieldSpec::first(&[
        Source::JsonLdScript {
            selector: PARSELY,
            path: "keywords",
        },
        Source::JsonLd("keywords"),
    ]),
    image_urls: FieldSpec::all(&[Source::Meta("og:image"), Source::JsonLd("image")]),
    nutrition_info: FieldSpec::first(&[
        Source::Pattern {
            inner: &ARTICLE_BODY,
            pattern: r"(?i)(\d+)\s*calories[,\s]+(\d+\.?\d*)\s*g\s*fat\s*\(([^)]+)\)[,\s]+(\d+)\s*mg\s*sodium",
            template: "$1 calories, $2 g fat ($3), $4 mg sodium",
        },
        Source::Pattern {
            inner: &ARTICLE_BODY,
            pattern: r"(?i)(\d+)\s*calories[,\s]+(\d+\.?\d*)\s*g\s*fat\s*\(([^)]+)\)[,\s]+(\d+\.?\d*)\s*g\s*sugar",
            template: "$1 calories, $2 g fat ($3), $4 g sugar",
        },
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.calories"),
            pattern: r"(\d+)",
            template: "$1 calories",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "tablespoons", "tablespoon", "teaspoons", "teaspoon", "tbsp", "tsp", "cups", "cup",
            "pounds", "pound", "ounces", "ounce", "lbs", "lb", "oz", "grams", "gram", "g",
            "kilograms", "kilogram", "kg", "milliliters", "milliliter", "ml", "liters",
            "liter", "l", "pinches", "pinch", "dashes", "dash", "packages", "package", "pkg",
            "cans", "can", "jars", "jar", "bottles", "bottle", "inches", "inch", "slices",
            "slice", "cloves", "clove", "bunches", "bunch", "sprigs", "sprig", "whole",
            "halves", "half", "quarters", "quarter", "pieces", "piece", "heads", "head",
            "bags", "bag", "units", "unit",
        ],
        boilerplate: &[
            "to taste",
            "as needed",
            "or more",
            "if needed",
            "optional",
            "for garnish",
        ],
        strip_parentheses: true,
        bare_units: true,
        implied_units: &[
            ImpliedUnit {
                name: "egg",
                unit: "unit",
                amount: None,
                whole_word: true,
            },
            ImpliedUnit {
                name: "eggs",
                unit: "unit",
                amount: None,
                whole_word: true,
            },
        ],
        skip_lines: &[
            "chopped", "sliced", "diced", "minced", "thawed", "beaten", "peeled", "halved",
            "quartered", "grated", "shredded", "crushed",
        ],
        skip_containing: &[
            "split and lightly toasted",
            "cut into thin strips",
            "lightly toasted",
        ],
        // fragments split off the neighbouring line: "(10 oz.)"
        skip_prefixes: &["("],
        // "cut into 1-inch pieces 1/2" followed by "cup broth"
        carry_prefixes: &["cut into"],
        split_seasoning_pairs: true,
        min_name_chars: 2,
        ..IngredientGrammar::BASIC
    },
    duration: DurationStyle::TotalMinutes,
    total_from_parts: true,
    ..SiteProfile::GENERIC
};
