//! coop.se: JSON-LD recipes behind a React front end.

use super::SiteProfile;
use crate::duration::DurationStyle;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "coop_se",
    language: "sv",
    dish_name: FieldSpec::first(&[Source::JsonLd("name"), Source::Css("h1"), Source::Title])
        .rewritten(&[Rewrite {
            pattern: r"\s*\|\s*Recept.*$",
            replacement: "",
        }]),
    ingredients: FieldSpec::first(&[
        Source::JsonLd("recipeIngredient"),
        Source::Css("ul[class*='List--section'] li"),
    ]),
    instructions: FieldSpec::first(&[
        Source::JsonLd("recipeInstructions"),
        Source::Css("ol[class*='List--orderedRecipe'] li"),
    ]),
    tags: FieldSpec::first(&[Source::JsonLd("keywords"), Source::Meta("keywords")]),
    // protocol-relative CDN links
    image_urls: FieldSpec::all(&[Source::JsonLd("image"), Source::Meta("og:image")]).rewritten(
        &[Rewrite {
            pattern: r"^//",
            replacement: "https://",
        }],
    ),
    grammar: IngredientGrammar {
        units: &[
            "g", "kg", "ml", "cl", "dl", "l", "msk", "matskedar", "matsked", "tsk", "teskedar",
            "tesked", "krm", "st", "förp", "burk", "paket", "knippe", "klyftor", "klyfta",
        ],
        unit_aliases: &[
            ("matsked", "msk"),
            ("matskedar", "msk"),
            ("tesked", "tsk"),
            ("teskedar", "tsk"),
        ],
        connectors: &[],
        boilerplate: &["efter smak", "valfritt"],
        min_name_chars: 2,
        ..IngredientGrammar::BASIC
    },
    duration: DurationStyle::TotalMinutes,
    ..SiteProfile::GENERIC
};
