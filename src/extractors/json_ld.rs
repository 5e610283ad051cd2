//! Embedded JSON-LD (`<script type="application/ld+json">`).

use log::debug;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::text::decode_html_symbols;

static JSON_LD_SCRIPT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: Option<String>,
    #[serde(rename = "contentUrl")]
    content_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageType {
    None,
    String(String),
    // before Object: serde also builds a struct from a sequence
    MultipleStrings(Vec<String>),
    MultipleObjects(Vec<ImageObject>),
    Object(ImageObject),
}

impl ImageObject {
    fn into_url(self) -> Option<String> {
        self.url.or(self.content_url)
    }
}

impl From<ImageType> for Vec<String> {
    fn from(image: ImageType) -> Self {
        match image {
            ImageType::None => vec![],
            ImageType::String(url) => vec![url],
            ImageType::Object(object) => object.into_url().into_iter().collect(),
            ImageType::MultipleStrings(urls) => urls,
            ImageType::MultipleObjects(objects) => {
                objects.into_iter().filter_map(ImageObject::into_url).collect()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecipeInstructionObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<String>),
    HowTo(Vec<HowTo>),
    NestedSections(Vec<Vec<HowTo>>),
    MultipleObject(Vec<RecipeInstructionObject>),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type")]
enum HowTo {
    HowToStep(HowToStep),
    HowToSection(HowToSection),
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<HowToStep>,
}

impl HowToStep {
    fn into_text(self) -> Option<String> {
        // prefer text over name
        self.text.or(self.name).or(self.description)
    }
}

impl HowTo {
    fn into_texts(self) -> Vec<String> {
        match self {
            HowTo::HowToStep(step) => step.into_text().into_iter().collect(),
            HowTo::HowToSection(section) => section
                .item_list_element
                .into_iter()
                .filter_map(HowToStep::into_text)
                .collect(),
        }
    }
}

impl From<RecipeInstructions> for Vec<String> {
    fn from(instructions: RecipeInstructions) -> Self {
        match instructions {
            RecipeInstructions::String(text) => vec![text],
            RecipeInstructions::Multiple(steps) => steps,
            RecipeInstructions::HowTo(steps) => {
                steps.into_iter().flat_map(HowTo::into_texts).collect()
            }
            RecipeInstructions::NestedSections(sections) => sections
                .into_iter()
                .flatten()
                .flat_map(HowTo::into_texts)
                .collect(),
            RecipeInstructions::MultipleObject(steps) => {
                steps.into_iter().map(|step| step.text).collect()
            }
        }
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn locate_recipe(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items
            .iter()
            .find(|item| is_recipe_type(item) || item.get("recipeInstructions").is_some())
            .or_else(|| items.iter().find_map(locate_recipe)),
        Value::Object(_) if is_recipe_type(value) => Some(value),
        Value::Object(_) => value
            .get("@graph")
            .and_then(locate_recipe)
            .or_else(|| value.get("mainEntity").and_then(locate_recipe)),
        _ => None,
    }
}

fn parse_script(raw: &str, index: usize) -> Option<Value> {
    let cleaned = sanitize_json(raw);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Failed to parse JSON-LD {index}: {e}");
            None
        }
    }
}

/// The first JSON-LD Recipe node in the document: a root object, an
/// element of a root array, or an entry of `@graph`.
pub fn find_recipe(document: &Html) -> Option<Value> {
    let scripts: Vec<_> = document.select(&JSON_LD_SCRIPT).collect();
    debug!("Found {} JSON-LD script tags", scripts.len());

    for (index, script) in scripts.iter().enumerate() {
        let Some(json_ld) = parse_script(&script.inner_html(), index) else {
            continue;
        };
        if let Some(recipe) = locate_recipe(&json_ld) {
            debug!("Found Recipe in JSON-LD script {index}");
            return Some(recipe.clone());
        }
    }

    debug!("No Recipe found in any JSON-LD script");
    None
}

fn lookup<'a>(root: &'a Value, path: &str) -> Vec<&'a Value> {
    path.split('.').fold(vec![root], |current, key| {
        current
            .into_iter()
            .flat_map(|value| match value {
                Value::Array(items) => items.iter().filter_map(|item| item.get(key)).collect(),
                _ => value.get(key).into_iter().collect::<Vec<_>>(),
            })
            .collect()
    })
}

fn flatten(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Number(number) => vec![number.to_string()],
        Value::Array(items) => items.iter().flat_map(flatten).collect(),
        Value::Object(_) => ["text", "name", "url", "contentUrl", "@value"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(|text| vec![text.to_string()])
            .unwrap_or_default(),
        Value::Null | Value::Bool(_) => vec![],
    }
}

fn typed_or_flat<T>(value: &Value) -> Vec<String>
where
    T: for<'de> Deserialize<'de>,
    Vec<String>: From<T>,
{
    match T::deserialize(value) {
        Ok(typed) => typed.into(),
        Err(_) => flatten(value),
    }
}

/// Strings found at a dotted path below `node`, HTML entities decoded.
///
/// Lists are flattened, `HowToStep`/`HowToSection` instructions become their
/// step texts, `ImageObject`s their URLs.
pub fn values(node: &Value, path: &str) -> Vec<String> {
    let key = path.rsplit('.').next().unwrap_or(path);

    lookup(node, path)
        .into_iter()
        .flat_map(|value| match key {
            "recipeInstructions" => typed_or_flat::<RecipeInstructions>(value),
            "image" | "thumbnailUrl" => typed_or_flat::<ImageType>(value),
            _ => flatten(value),
        })
        .map(|text| decode_html_symbols(&text))
        .filter(|text| !text.trim().is_empty())
        .collect()
}

/// [`values`] over every JSON-LD block matched by `selector`, not only the
/// Recipe node (e.g. `wp-parsely-metadata`).
pub fn script_values(document: &Html, selector: &Selector, path: &str) -> Vec<String> {
    document
        .select(selector)
        .enumerate()
        .filter_map(|(index, script)| parse_script(&script.inner_html(), index))
        .flat_map(|root| values(&root, path))
        .collect()
}

/// Minify embedded JSON, repairing the mistakes CMS templates commonly make:
/// missing commas between members, duplicate or trailing commas, stray
/// HTML comments.
fn sanitize_json(json_str: &str) -> String {
    let json_str = json_str.trim().replace("<!--", "").replace("-->", "");

    let mut minified = String::with_capacity(json_str.len());
    let mut in_string = false;
    let mut prev_char = None;
    let mut depth = 0;
    let chars: Vec<char> = json_str.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '"' if prev_char != Some('\\') => {
                in_string = !in_string;
                if !in_string {
                    // closing quote directly followed by another member
                    let next_char = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                    if !matches!(prev_char, Some(',') | Some('[') | Some('{'))
                        && matches!(next_char, Some('"' | '[' | '{'))
                    {
                        minified.push('"');
                        minified.push(',');
                        prev_char = Some(',');
                        continue;
                    }
                }
                minified.push(c);
            }
            '\n' | '\r' | '\t' if in_string => {
                // raw control characters are invalid inside JSON strings
                minified.push(' ');
            }
            '[' | '{' if !in_string => {
                depth += 1;
                minified.push(c);
            }
            ']' | '}' if !in_string => {
                depth -= 1;
                minified.push(c);
                let next_char = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if depth > 0 && matches!(next_char, Some('"')) {
                    minified.push(',');
                    prev_char = Some(',');
                    continue;
                }
            }
            ',' if !in_string => {
                if prev_char != Some(',') {
                    minified.push(c);
                }
            }
            _ => {
                if in_string || !c.is_whitespace() {
                    minified.push(c);
                }
            }
        }
        prev_char = Some(c);
    }

    minified.replace(",]", "]").replace(",}", "}")
}
