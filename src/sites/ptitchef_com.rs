//! ptitchef.com: French JSON-LD recipes whose titles and summaries open with
//! "Recette de".

use super::SiteProfile;
use crate::duration::DurationStyle;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "ptitchef_com",
    language: "fr",
    dish_name: FieldSpec::first(&[
        Source::JsonLd("name"),
        Source::Css("h1"),
        Source::Meta("og:title"),
    ])
    .rewritten(&[
        Rewrite {
            pattern: r"(?i)^Recette\s+de\s+",
            replacement: "",
        },
        Rewrite {
            pattern: r"\.$",
            replacement: "",
        },
    ]),
    description: FieldSpec::first(&[Source::JsonLd("description"), Source::Meta("description")])
        .rewritten(&[
            Rewrite {
                pattern: r"(?i)^Recette\s+\w+\s+recette\s+de\s+",
                replacement: "",
            },
            Rewrite {
                pattern: r"(?i)^Recette\s+de\s+",
                replacement: "",
            },
        ]),
    // steps are glued together as "Mélanger.Ajouter"
    instructions: FieldSpec::first(&[Source::JsonLd("recipeInstructions")]).rewritten(&[
        Rewrite {
            pattern: r"\.(\p{Lu})",
            replacement: ". $1",
        },
        Rewrite {
            pattern: r",(\p{Lu})",
            replacement: ", $1",
        },
    ]),
    tags: FieldSpec::first(&[Source::JsonLd("keywords"), Source::Meta("keywords")]).rewritten(&[
        Rewrite {
            pattern: r"(?i)(?:^|,)\s*recettes?\b[^,]*",
            replacement: "",
        },
        Rewrite {
            pattern: r"(?i)(?:^|,)[^,]*\b(?:kitchenaid|scrapcooking)\b[^,]*",
            replacement: "",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "cuillères à soupe", "cuillère à soupe", "cuillères à café", "cuillère à café",
            "sachets", "sachet", "bouchons", "bouchon", "pincées", "pincée", "verres", "verre",
            "tranches", "tranche", "gousses", "gousse", "g", "kg", "cl", "ml", "dl", "l",
        ],
        connectors: &["de", "d'", "d’"],
        boilerplate: &["selon votre goût", "facultatif"],
        ..IngredientGrammar::BASIC
    },
    duration: DurationStyle::TotalMinutes,
    ..SiteProfile::GENERIC
};
