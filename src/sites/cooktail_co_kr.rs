//! cooktail.co.kr: Korean blog posts. The recipe is a bullet list whose
//! items are labelled "준비물:" (ingredients), "만드는 법:" (method) and
//! "꿀팁:" (tip).

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::{IngredientGrammar, WordOrder};

static LIST_ITEMS: Source = Source::Css(".entry-content li");

pub static PROFILE: SiteProfile = SiteProfile {
    key: "cooktail_co_kr",
    language: "ko",
    dish_name: FieldSpec::first(&[Source::Css("h1.entry-title"), Source::Meta("og:title")])
        .rewritten(&[
            Rewrite {
                pattern: r":.*$",
                replacement: "",
            },
            Rewrite {
                pattern: r"^(?:알토란|만개의레시피|백종원)\s+",
                replacement: "",
            },
            Rewrite {
                pattern: r"만들기$",
                replacement: "",
            },
            Rewrite {
                pattern: r"\s+(?:레시피|비법|총정리|황금레시피|공개).*$",
                replacement: "",
            },
            Rewrite {
                pattern: r",.*$",
                replacement: "",
            },
        ]),
    description: FieldSpec::first(&[Source::Meta("description"), Source::Meta("og:description")]),
    ingredients: FieldSpec::first(&[Source::Split {
        inner: &Source::Pattern {
            inner: &LIST_ITEMS,
            pattern: r"(?s)준비물:\s*(.+)$",
            template: "$1",
        },
        pattern: r"\s*,\s*",
    }]),
    instructions: FieldSpec::first(&[Source::Pattern {
        inner: &LIST_ITEMS,
        pattern: r"(?s)^\s*만드는 법:\s*(.+)$",
        template: "$1",
    }]),
    category: FieldSpec::first(&[Source::Meta("article:section")]),
    notes: FieldSpec::first(&[Source::Pattern {
        inner: &LIST_ITEMS,
        pattern: r"(?s)^\s*꿀팁:\s*(.+)$",
        template: "$1",
    }]),
    tags: FieldSpec::first(&[Source::Meta("article:tag"), Source::Meta("keywords")]),
    image_urls: FieldSpec::first(&[Source::Meta("og:image")]),
    grammar: IngredientGrammar {
        order: WordOrder::NameFirst,
        units: &[
            "큰술", "작은술", "스쿱", "컵", "개", "ml", "g", "kg", "티스푼", "테이블스푼", "장", "쪽",
        ],
        vague_quantities: &["약간", "적당량", "조금"],
        connectors: &[],
        boilerplate: &[],
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
