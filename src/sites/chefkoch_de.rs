//! chefkoch.de: JSON-LD recipes with German ingredient lines.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "chefkoch_de",
    language: "de",
    dish_name: FieldSpec::first(&[Source::JsonLd("name"), Source::Meta("og:title")]).rewritten(
        &[Rewrite {
            pattern: r"\s+von\s+\w+$",
            replacement: "",
        }],
    ),
    category: FieldSpec::first(&[Source::JsonLd("recipeCategory"), Source::JsonLd("keywords")])
        .rewritten(&[Rewrite {
            pattern: r",.*$",
            replacement: "",
        }]),
    nutrition_info: FieldSpec::all(&[
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.calories"),
            pattern: r"(\d+)",
            template: "$1 kcal pro Portion",
        },
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.proteinContent"),
            pattern: r"(\d+(?:[.,]\d+)?)",
            template: "$1 g Eiweiß",
        },
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.fatContent"),
            pattern: r"(\d+(?:[.,]\d+)?)",
            template: "$1 g Fett",
        },
        Source::Pattern {
            inner: &Source::JsonLd("nutrition.carbohydrateContent"),
            pattern: r"(\d+(?:[.,]\d+)?)",
            template: "$1 g Kohlenhydrate",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "g", "kg", "ml", "l", "EL", "TL", "Prise", "Prisen", "Stück", "Becher", "Pck.",
            "Päckchen", "Dose", "Dosen", "Bund", "Zehe", "Zehen", "Scheibe", "Scheiben", "Tasse",
            "Tassen", "Msp.", "Schuss", "etwas",
        ],
        unit_aliases: &[("Prisen", "Prise"), ("Päckchen", "Pck."), ("Dosen", "Dose")],
        connectors: &[],
        boilerplate: &["nach Belieben", "n. B."],
        bare_units: true,
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
