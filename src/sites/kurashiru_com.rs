//! kurashiru.com: Japanese recipes, `name quantity` ingredient lines.

use super::SiteProfile;
use crate::duration::DurationStyle;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::{IngredientGrammar, WordOrder};

const TITLE_SUFFIX: &[Rewrite] = &[Rewrite {
    pattern: r"\s+(?:作り方・レシピ|レシピ).*$",
    replacement: "",
}];

pub static PROFILE: SiteProfile = SiteProfile {
    key: "kurashiru_com",
    language: "ja",
    dish_name: FieldSpec::first(&[Source::Meta("og:title"), Source::Title]).rewritten(TITLE_SUFFIX),
    description: FieldSpec::first(&[Source::Meta("description"), Source::Meta("og:description")]),
    ingredients: FieldSpec::first(&[
        Source::JsonLd("recipeIngredient"),
        Source::Rows {
            item: "ul[class*='App-ingredients'] li[class*='App-ingredient']",
            name: "div[class*='App-ingredientTitle']",
            amount: "div[class*='App-ingredientQuantityAmount']",
        },
    ]),
    instructions: FieldSpec::first(&[
        Source::JsonLd("recipeInstructions"),
        Source::Css("div[class*='App-instructionBody']"),
    ]),
    category: FieldSpec::first(&[Source::JsonLd("recipeCategory")]).rewritten(&[Rewrite {
        pattern: r",.*$",
        replacement: "",
    }]),
    notes: FieldSpec::first(&[
        Source::Css("div[class*='App-memo']"),
        Source::Css("section[class*='memo'] p[class*='content']"),
    ]),
    tags: FieldSpec::first(&[Source::JsonLd("recipeCategory")]),
    image_urls: FieldSpec::all(&[
        Source::Meta("og:image"),
        Source::Meta("thumbnail"),
        Source::JsonLd("image"),
        Source::JsonLd("video.thumbnail"),
        Source::JsonLd("video.thumbnailUrl"),
    ]),
    grammar: IngredientGrammar {
        order: WordOrder::NameFirst,
        units: &[
            "大さじ", "小さじ", "カップ", "個", "本", "枚", "片", "かけ", "束", "袋", "缶", "g", "kg",
            "ml", "cc", "l",
        ],
        vague_quantities: &["適量", "少々", "ひとつまみ", "お好みで"],
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    },
    duration: DurationStyle::TotalMinutes,
    instruction_separator: "\n",
    numbered_steps: true,
    ..SiteProfile::GENERIC
};
