//! schema.org microdata (`itemscope` / `itemprop`).

use log::debug;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::element_text;

static ITEMSCOPE: Lazy<Selector> = Lazy::new(|| Selector::parse("[itemscope]").unwrap());

fn find_recipe_container(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&ITEMSCOPE).find(|element| {
        element.value().attr("itemtype").is_some_and(|itemtype| {
            itemtype.contains("schema.org/Recipe") || itemtype.contains("data-vocabulary.org/Recipe")
        })
    })
}

fn itemprop_value(element: ElementRef) -> String {
    let value = element.value();
    value
        .attr("content")
        .or_else(|| value.attr("datetime"))
        .or_else(|| value.attr("src"))
        .map(|attr| attr.trim().to_string())
        .unwrap_or_else(|| element_text(element))
}

/// Values of `itemprop` inside the Recipe item, in document order.
///
/// Properties outside a Recipe item are ignored: global `name` or
/// `description` properties usually belong to the site or an author bio.
/// Properties of nested items are only reached through a dotted path such
/// as `nutrition.calories`.
pub fn values(document: &Html, path: &str) -> Vec<String> {
    let Some(container) = find_recipe_container(document) else {
        return Vec::new();
    };

    let mut scopes = vec![container];
    let mut props = path.split('.').peekable();
    while let Some(prop) = props.next() {
        let Ok(selector) = Selector::parse(&format!("[itemprop='{prop}']")) else {
            debug!("Unusable itemprop name: {prop}");
            return Vec::new();
        };

        let found: Vec<ElementRef> = scopes
            .iter()
            .flat_map(|scope| {
                scope.select(&selector).filter(move |element| {
                    owning_item(*element).is_some_and(|item| item.id() == scope.id())
                })
            })
            .collect();

        if props.peek().is_none() {
            return found
                .into_iter()
                .map(itemprop_value)
                .filter(|value| !value.is_empty())
                .collect();
        }
        scopes = found
            .into_iter()
            .filter(|element| element.value().attr("itemscope").is_some())
            .collect();
    }
    Vec::new()
}

/// Nearest enclosing `itemscope`; the element's own scope is not counted.
fn owning_item(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().attr("itemscope").is_some())
}
