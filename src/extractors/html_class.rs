//! Recipe-card plugins (WPRM, Tasty Recipes, Mediavine Create, ...) mark
//! their fields with well-known CSS classes.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::element_text;

/// A recipe-card field with known class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Title,
    Description,
    Ingredients,
    Instructions,
    Category,
    PrepTime,
    CookTime,
    TotalTime,
    Notes,
    Nutrition,
}

impl CardField {
    fn is_list(self) -> bool {
        matches!(self, CardField::Ingredients | CardField::Instructions)
    }
}

struct ClassMatchers {
    exact: HashMap<CardField, Vec<&'static str>>,
    fuzzy: HashMap<CardField, Vec<&'static str>>,
}

static MATCHERS: Lazy<ClassMatchers> = Lazy::new(ClassMatchers::new);

static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());

static BLOCK_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("p, div, span").unwrap());

impl ClassMatchers {
    fn new() -> Self {
        let mut exact = HashMap::new();
        let mut fuzzy = HashMap::new();

        exact.insert(
            CardField::Title,
            vec![
                "wprm-recipe-name",
                "tasty-recipes-title",
                "mv-create-title",
                "recipe-card-title",
                "wpzoom-recipe-card-title",
                "recipe-title",
                "recipe-name",
            ],
        );

        exact.insert(
            CardField::Description,
            vec![
                "wprm-recipe-summary",
                "tasty-recipes-description",
                "mv-create-description",
                "recipe-card-summary",
                "wpzoom-recipe-summary",
                "recipe-summary",
                "recipe-description",
            ],
        );

        exact.insert(
            CardField::Ingredients,
            vec![
                "wprm-recipe-ingredients-container",
                "tasty-recipes-ingredients",
                "mv-create-ingredients",
                "recipe-card-ingredients",
                "wpzoom-recipe-ingredients",
                "recipe-ingredients",
                "structured-ingredients",
            ],
        );

        exact.insert(
            CardField::Instructions,
            vec![
                "wprm-recipe-instructions-container",
                "tasty-recipes-instructions",
                "mv-create-instructions",
                "recipe-card-instructions",
                "wpzoom-recipe-instructions",
                "recipe-instructions",
                "recipe-directions",
                "structured-instructions",
            ],
        );

        exact.insert(
            CardField::Category,
            vec![
                "wprm-recipe-course",
                "tasty-recipes-category",
                "mv-create-category",
                "recipe-category",
            ],
        );

        exact.insert(
            CardField::PrepTime,
            vec![
                "wprm-recipe-prep_time",
                "tasty-recipes-prep-time",
                "mv-create-time-prep",
                "recipe-prep-time",
                "prep-time",
            ],
        );

        exact.insert(
            CardField::CookTime,
            vec![
                "wprm-recipe-cook_time",
                "tasty-recipes-cook-time",
                "mv-create-time-active",
                "recipe-cook-time",
                "cook-time",
            ],
        );

        exact.insert(
            CardField::TotalTime,
            vec![
                "wprm-recipe-total_time",
                "tasty-recipes-total-time",
                "mv-create-time-total",
                "recipe-total-time",
                "total-time",
            ],
        );

        exact.insert(
            CardField::Notes,
            vec![
                "wprm-recipe-notes",
                "tasty-recipes-notes",
                "mv-create-notes",
                "recipe-card-notes",
                "recipe-notes",
                "recipe-tips",
            ],
        );

        exact.insert(
            CardField::Nutrition,
            vec![
                "wprm-nutrition-label-container",
                "tasty-recipes-nutrition",
                "mv-create-nutrition",
                "recipe-nutrition",
            ],
        );

        // Fuzzy matchers only for lists; a loose title or description
        // match grabs navigation and widgets
        fuzzy.insert(CardField::Ingredients, vec!["ingredient"]);
        fuzzy.insert(CardField::Instructions, vec!["instruction", "direction"]);

        ClassMatchers { exact, fuzzy }
    }

    fn exact_elements<'a>(
        &'a self,
        document: &'a Html,
        field: CardField,
    ) -> impl Iterator<Item = (&'static str, Vec<ElementRef<'a>>)> + 'a {
        self.exact
            .get(&field)
            .into_iter()
            .flatten()
            .filter_map(move |class_name| {
                let selector = Selector::parse(&format!(".{class_name}")).ok()?;
                let elements: Vec<_> = document.select(&selector).collect();
                (!elements.is_empty()).then_some((*class_name, elements))
            })
    }

    fn find_by_class(&self, document: &Html, field: CardField) -> Option<String> {
        for (class_name, elements) in self.exact_elements(document, field) {
            if let Some(text) = elements
                .into_iter()
                .map(element_text)
                .find(|text| !text.is_empty())
            {
                debug!("Found {field:?} using exact class: {class_name}");
                return Some(text);
            }
        }
        None
    }

    fn extract_list_items(&self, document: &Html, field: CardField) -> Vec<String> {
        for (class_name, containers) in self.exact_elements(document, field) {
            let items = list_items(&containers);
            if !items.is_empty() {
                debug!("Found {} {field:?} using class: {class_name}", items.len());
                return items;
            }
        }

        for pattern in self.fuzzy.get(&field).into_iter().flatten() {
            let Ok(selector) = Selector::parse(&format!("[class*='{pattern}']")) else {
                continue;
            };
            let containers: Vec<_> = document.select(&selector).collect();
            let items = list_items(&containers);
            if !items.is_empty() {
                debug!("Found {} {field:?} using fuzzy class pattern: {pattern}", items.len());
                return items;
            }
        }

        Vec::new()
    }
}

fn list_items(containers: &[ElementRef]) -> Vec<String> {
    let mut items: Vec<String> = containers
        .iter()
        .flat_map(|container| container.select(&LIST_ITEM))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();

    // no list markup: take block children of a plausible size
    if items.is_empty() {
        items = containers
            .iter()
            .flat_map(|container| container.select(&BLOCK_ITEM))
            .map(element_text)
            .filter(|text| text.len() > 5 && text.len() < 500)
            .collect();
    }

    items.dedup();
    items
}

/// Values of a recipe-card field: one entry per list item for ingredients
/// and instructions, the first non-empty match otherwise.
pub fn values(document: &Html, field: CardField) -> Vec<String> {
    if field.is_list() {
        MATCHERS.extract_list_items(document, field)
    } else {
        MATCHERS.find_by_class(document, field).into_iter().collect()
    }
}
