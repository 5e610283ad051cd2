//! afkarjadida.com: Arabic articles with no recipe markup. Ingredients sit
//! in a prose paragraph after an "المكونات" heading and times are phrases
//! in the body text.

use super::SiteProfile;
use crate::extractors::{FieldSpec, Rewrite, Source};
use crate::ingredients::IngredientGrammar;

static BODY: Source = Source::Css(".entry-content, article");

pub static PROFILE: SiteProfile = SiteProfile {
    key: "afkarjadida_com",
    language: "ar",
    dish_name: FieldSpec::first(&[Source::Title, Source::Meta("og:title")]).rewritten(&[
        Rewrite {
            pattern: r"\s*-\s*أفكار جديدة\s*$",
            replacement: "",
        },
        Rewrite {
            pattern: r"\s+(?:تمنحك|يمنحك|لك)\s+\w+\s*$",
            replacement: "",
        },
    ]),
    // the full page title reads as a one-line summary
    description: FieldSpec::first(&[Source::Pattern {
        inner: &Source::Title,
        pattern: r"^\s*(.+?)(?:\s*-\s*أفكار جديدة)?\s*$",
        template: "$1.",
    }]),
    ingredients: FieldSpec::first(&[
        Source::Prose {
            container: ".entry-content h2, .entry-content h3, .entry-content h4, article h2, article h3",
            marker: "المكونات",
            split: r"\s+و\s+|،\s*",
        },
        Source::Prose {
            container: ".entry-content h2, .entry-content h3, .entry-content h4, article h2, article h3",
            marker: "المكوّنات",
            split: r"\s+و\s+|،\s*",
        },
        Source::Split {
            inner: &Source::Pattern {
                inner: &Source::Css(".entry-content p"),
                pattern: r"(?s)وتتضمن.*?المك(?:و|وّ)نات\s*:?\s*(.+)$",
                template: "$1",
            },
            pattern: r"\s+و\s+|،\s*",
        },
    ]),
    instructions: FieldSpec::first(&[Source::Pattern {
        inner: &Source::Css(".entry-content p, article p"),
        pattern: r"(?s)^.*(?:يبدأ\s+التحضير|تسخ[نّ]|تضاف|يضاف|يلي\s+ذلك|بعد\s+(?:ذلك|النضج)|في\s+الخطوة|خطوات\s+التحضير|طريقة\s+التحضير|التحضير.*كالتالي).*$",
        template: "$0",
    }]),
    prep_time: FieldSpec::first(&[Source::Pattern {
        inner: &BODY,
        pattern: r"(?:وقت\s+التحضير|مدة\s+التحضير|منقوع\s+لمدة)\s*[:：]?\s*(\d+)\s*(?:دقيقة|دقائق)",
        template: "$1 minutes",
    }]),
    cook_time: FieldSpec::first(&[
        Source::Pattern {
            inner: &BODY,
            pattern: r"(?:وقت\s+الطهي|مدة\s+الطهي|يطهى?\s+لمدة)\s*[:：]?\s*(\d+)\s*(?:دقيقة|دقائق)",
            template: "$1 minutes",
        },
        // any "N دقيقة" mention; the upper bound of "6-8 دقيقة"
        Source::Pattern {
            inner: &BODY,
            pattern: r"(?:\d+\s*[-–]\s*)?(\d+)\s*دقيقة",
            template: "$1 minutes",
        },
    ]),
    total_time: FieldSpec::first(&[Source::Pattern {
        inner: &BODY,
        pattern: r"(?:الوقت\s+الإجمالي|المدة\s+الكاملة)\s*[:：]?\s*(\d+)\s*(?:دقيقة|دقائق)",
        template: "$1 minutes",
    }]),
    tags: FieldSpec::first(&[Source::Meta("keywords")]),
    image_urls: FieldSpec::all(&[Source::Meta("og:image"), Source::JsonLd("image")]),
    grammar: IngredientGrammar {
        units: &[
            "ملعقة كبيرة",
            "ملعقة صغيرة",
            "ملاعق",
            "كوب",
            "أكواب",
            "كيلو",
            "جم",
            "غرام",
            "غم",
            "فص",
            "فصوص",
            "قطعة",
            "قطع",
            "عدد",
            "حبة",
            "حبات",
            "ملليلتر",
            "لتر",
            "رشة",
        ],
        connectors: &[],
        boilerplate: &[],
        default_unit: Some("عدد"),
        skip_lines: &["و", "أو", "مع"],
        min_name_chars: 2,
        ..IngredientGrammar::BASIC
    },
    ..SiteProfile::GENERIC
};
