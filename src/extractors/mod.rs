use once_cell::unsync::OnceCell;
use scraper::{ElementRef, Html};
use serde_json::Value;

use crate::model::{Ingredient, RecipeRecord};

pub mod html_class;
pub mod json_ld;
pub mod microdata;
mod site;

pub use html_class::CardField;
pub use site::SiteExtractor;

/// One parsed HTML document and what has been located in it so far.
pub struct ParsingContext {
    /// Where the document came from, for log messages.
    pub source: String,
    pub document: Html,
    recipe_json_ld: OnceCell<Option<Value>>,
}

impl ParsingContext {
    pub fn new(source: impl Into<String>, html: &str) -> Self {
        ParsingContext {
            source: source.into(),
            document: Html::parse_document(html),
            recipe_json_ld: OnceCell::new(),
        }
    }

    /// The embedded JSON-LD Recipe node, located once per document.
    pub fn recipe_json_ld(&self) -> Option<&Value> {
        self.recipe_json_ld
            .get_or_init(|| json_ld::find_recipe(&self.document))
            .as_ref()
    }
}

/// A strategy for locating raw values of one field.
///
/// Strategies never fail; a strategy that finds nothing yields no values and
/// the next one in the [`FieldSpec`] is tried.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Dotted path into the JSON-LD Recipe node, e.g. `nutrition.calories`.
    JsonLd(&'static str),
    /// Dotted path into other JSON-LD blocks matched by a selector.
    JsonLdScript {
        selector: &'static str,
        path: &'static str,
    },
    /// schema.org microdata property inside the Recipe item.
    Microdata(&'static str),
    /// Common WordPress recipe-card classes.
    RecipeCard(CardField),
    /// Text of every element matching the selector.
    Css(&'static str),
    CssAttr {
        selector: &'static str,
        attr: &'static str,
    },
    /// Several attributes of each matching element, joined with spaces.
    Attrs {
        selector: &'static str,
        attrs: &'static [&'static str],
    },
    /// `<meta name=...>` or `<meta property=...>` content.
    Meta(&'static str),
    Title,
    /// The block following a heading containing `marker` (ignoring case), split into
    /// fragments when it is prose rather than a list.
    Prose {
        container: &'static str,
        marker: &'static str,
        split: &'static str,
    },
    /// Ingredient rows whose quantity and name sit in separate elements;
    /// yields `"<amount> <name>"`, or `"<name> <amount>"` for name-first
    /// grammars.
    Rows {
        item: &'static str,
        name: &'static str,
        amount: &'static str,
    },
    /// Regex over the values of another source, expanded with `$n` captures.
    Pattern {
        inner: &'static Source,
        pattern: &'static str,
        template: &'static str,
    },
    /// Values of another source, each split on a regex.
    Split {
        inner: &'static Source,
        pattern: &'static str,
    },
}

/// Regex substitution applied to every value of a field.
#[derive(Debug, Clone, Copy)]
pub struct Rewrite {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// The first source with any value wins.
    First,
    /// Values of all sources, in source order.
    All,
}

/// How one record field is located.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub sources: &'static [Source],
    pub rewrites: &'static [Rewrite],
    pub merge: Merge,
}

impl FieldSpec {
    pub const NONE: FieldSpec = FieldSpec::first(&[]);

    pub const fn first(sources: &'static [Source]) -> Self {
        FieldSpec {
            sources,
            rewrites: &[],
            merge: Merge::First,
        }
    }

    pub const fn all(sources: &'static [Source]) -> Self {
        FieldSpec {
            sources,
            rewrites: &[],
            merge: Merge::All,
        }
    }

    pub const fn rewritten(self, rewrites: &'static [Rewrite]) -> Self {
        FieldSpec { rewrites, ..self }
    }
}

/// Locates every field of the canonical record in one document.
///
/// Field methods return `None` for anything they cannot find; they never fail.
pub trait RecipeFieldExtractor {
    fn dish_name(&self, context: &ParsingContext) -> Option<String>;
    fn description(&self, context: &ParsingContext) -> Option<String>;
    fn ingredients(&self, context: &ParsingContext) -> Option<Vec<Ingredient>>;
    fn instructions(&self, context: &ParsingContext) -> Option<String>;
    fn category(&self, context: &ParsingContext) -> Option<String>;
    fn prep_time(&self, context: &ParsingContext) -> Option<String>;
    fn cook_time(&self, context: &ParsingContext) -> Option<String>;
    fn total_time(&self, context: &ParsingContext) -> Option<String>;
    fn notes(&self, context: &ParsingContext) -> Option<String>;
    fn tags(&self, context: &ParsingContext) -> Option<String>;
    fn image_urls(&self, context: &ParsingContext) -> Option<String>;
    fn nutrition_info(&self, context: &ParsingContext) -> Option<String>;

    fn extract_all(&self, context: &ParsingContext) -> RecipeRecord {
        RecipeRecord {
            dish_name: self.dish_name(context),
            description: self.description(context),
            ingredients: self.ingredients(context),
            instructions: self.instructions(context),
            category: self.category(context),
            prep_time: self.prep_time(context),
            cook_time: self.cook_time(context),
            total_time: self.total_time(context),
            notes: self.notes(context),
            tags: self.tags(context),
            image_urls: self.image_urls(context),
            nutrition_info: self.nutrition_info(context),
        }
    }
}

pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
