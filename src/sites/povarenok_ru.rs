//! povarenok.ru: microdata ingredient rows and a "blog code" footer that
//! lists the category and tags.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

static BLOG_CODE: Source = Source::Css("div#blog_code");

pub static PROFILE: SiteProfile = SiteProfile {
    key: "povarenok_ru",
    language: "ru",
    dish_name: FieldSpec::first(&[Source::Css("h1"), Source::Meta("og:title")]),
    description: FieldSpec::first(&[Source::Meta("description")]).rewritten(&[
        Rewrite {
            pattern: r"(?i)Рецепт[ыт]?:",
            replacement: "",
        },
        Rewrite {
            pattern: r"Читать рецепт.*$",
            replacement: "",
        },
    ]),
    ingredients: FieldSpec::first(&[
        Source::Rows {
            item: "li[itemprop=recipeIngredient], div.ingredients-bl li",
            name: "span[itemprop=name], a span",
            amount: "span[itemprop=amount]",
        },
        Source::Microdata("recipeIngredient"),
    ]),
    instructions: FieldSpec::first(&[
        Source::Microdata("recipeInstructions"),
        Source::Css("div[itemprop=recipeInstructions] p"),
        Source::Css("div.cooking-bl p"),
    ]),
    category: FieldSpec::first(&[Source::Pattern {
        inner: &BLOG_CODE,
        pattern: r"Рецепты:\s*(?:[^\n]*->\s*)?([^\n]+)",
        template: "$1",
    }]),
    total_time: FieldSpec::first(&[
        Source::Microdata("totalTime"),
        Source::Pattern {
            inner: &Source::Css("body"),
            pattern: r"(?i)(\d+)\s*час(?:а|ов)?\s*(\d+)\s*минут",
            template: "$1 hours $2 minutes",
        },
        Source::Pattern {
            inner: &Source::Css("body"),
            pattern: r"(?i)(\d+)\s*минут",
            template: "$1 minutes",
        },
    ]),
    notes: FieldSpec::NONE,
    tags: FieldSpec::all(&[
        Source::Pattern {
            inner: &BLOG_CODE,
            pattern: r"(?i)Тэги:\s*([^\n]+)",
            template: "$1",
        },
        Source::Meta("keywords"),
    ]),
    nutrition_info: FieldSpec::first(&[Source::Css("div#nae-value-bl td strong")]),
    grammar: IngredientGrammar {
        units: &[
            "г", "кг", "мл", "л", "ст. л.", "ч. л.", "ст.л.", "ч.л.", "стакан", "стакана",
            "шт.", "шт", "зубчик", "зубчика", "пучок", "щепотка", "банка",
        ],
        unit_aliases: &[("ст.л.", "ст. л."), ("ч.л.", "ч. л."), ("шт", "шт.")],
        connectors: &[],
        boilerplate: &["по вкусу"],
        strip_parentheses: true,
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
