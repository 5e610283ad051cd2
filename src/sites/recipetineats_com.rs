//! recipetineats.com: a WP Recipe Maker card.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

// WPRM renders "10" and "minutes" in separate spans
const BARE_MINUTES: &[Rewrite] = &[Rewrite {
    pattern: r"^(\d+)$",
    replacement: "$1 minutes",
}];

pub static PROFILE: SiteProfile = SiteProfile {
    key: "recipetineats_com",
    language: "en",
    dish_name: FieldSpec::first(&[Source::Css("h2.wprm-recipe-name"), Source::Meta("og:title")])
        .rewritten(&[Rewrite {
            pattern: r"(?i)\s*[-–—]\s*RecipeTin Eats.*$",
            replacement: "",
        }]),
    description: FieldSpec::first(&[
        Source::Css("div.wprm-recipe-summary"),
        Source::Meta("og:description"),
    ]),
    ingredients: FieldSpec::first(&[
        Source::Rows {
            item: "li.wprm-recipe-ingredient",
            name: ".wprm-recipe-ingredient-name",
            amount: ".wprm-recipe-ingredient-amount, .wprm-recipe-ingredient-unit",
        },
        Source::Css(".wprm-recipe-ingredients li.wprm-recipe-ingredient"),
        Source::JsonLd("recipeIngredient"),
    ]),
    instructions: FieldSpec::first(&[
        Source::Css(".wprm-recipe-instruction .wprm-recipe-instruction-text"),
        Source::JsonLd("recipeInstructions"),
    ]),
    category: FieldSpec::first(&[
        Source::Css("span.wprm-recipe-course"),
        Source::Meta("article:section"),
    ]),
    prep_time: FieldSpec::first(&[Source::Css("span.wprm-recipe-prep_time")])
        .rewritten(BARE_MINUTES),
    cook_time: FieldSpec::first(&[Source::Css("span.wprm-recipe-cook_time")])
        .rewritten(BARE_MINUTES),
    total_time: FieldSpec::first(&[Source::Css("span.wprm-recipe-total_time")])
        .rewritten(BARE_MINUTES),
    notes: FieldSpec::first(&[Source::Css("div.wprm-recipe-notes p, div.wprm-recipe-notes li")]),
    nutrition_info: FieldSpec::first(&[Source::Css(
        ".wprm-nutrition-label-container .wprm-nutrition-label-text-nutrition-container",
    )]),
    grammar: IngredientGrammar {
        strip_parentheses: true,
        ..IngredientGrammar::BASIC
    },
    numbered_steps: true,
    ..SiteProfile::GENERIC
};
