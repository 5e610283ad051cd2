//! apetit.bg: JSON-LD recipes, Bulgarian ingredient lines, tips under a
//! "Съвети" heading.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Source};
use crate::ingredients::IngredientGrammar;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "apetit_bg",
    language: "bg",
    dish_name: FieldSpec::first(&[Source::JsonLd("name"), Source::Css("h1")]),
    description: FieldSpec::first(&[Source::Pattern {
        inner: &Source::JsonLd("description"),
        pattern: r"^\s*([^.]+)",
        template: "$1.",
    }]),
    notes: FieldSpec::first(&[
        Source::Prose {
            container: "h2, h3, h4, h5",
            marker: "съвет",
            split: r"\n\s*\n",
        },
        Source::Prose {
            container: "h2, h3, h4, h5",
            marker: "забележк",
            split: r"\n\s*\n",
        },
    ]),
    grammar: IngredientGrammar {
        units: &[
            "супени лъжици",
            "чайни лъжици",
            "лъжица",
            "лъжици",
            "с.л.",
            "ч.л.",
            "чаши",
            "чаша",
            "броя",
            "бр.",
            "бр",
            "кг",
            "мл",
            "г",
            "л",
            "ч.",
            "с.",
        ],
        connectors: &[],
        bare_units: true,
        boilerplate: &["на вкус", "по вкус", "по желание", "ако желаете", "по избор"],
        skip_lines: &[
            "нарязано на малки парчета",
            "нарязано на парчета",
            "при сервиране",
            "за сервиране",
            "нарязани на",
            "нарязано",
            "нарезано",
        ],
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
