use std::collections::HashMap;

use log::debug;
use regex::Regex;
use scraper::{ElementRef, Selector};

use super::{
    element_text, html_class, json_ld, microdata, FieldSpec, Merge, ParsingContext,
    RecipeFieldExtractor, Source,
};
use crate::duration::{format_iso_duration, format_minutes, is_iso_duration, minutes_in};
use crate::error::ExtractError;
use crate::ingredients::{IngredientParser, WordOrder};
use crate::model::Ingredient;
use crate::sites::{self, SiteProfile};
use crate::text::{clean_text, dedup_preserving_order, non_empty, normalize_time_text};

fn meta_selector(name: &str) -> String {
    format!(r#"meta[name="{name}"], meta[property="{name}"]"#)
}

/// The extraction engine, driven entirely by one site's [`SiteProfile`].
///
/// Every selector and pattern in the profile is compiled up front, so a bad
/// table fails here rather than during extraction.
#[derive(Debug)]
pub struct SiteExtractor {
    profile: &'static SiteProfile,
    parser: IngredientParser,
    selectors: HashMap<String, Selector>,
    patterns: HashMap<&'static str, Regex>,
}

impl SiteExtractor {
    pub fn new(profile: &'static SiteProfile) -> Result<Self, ExtractError> {
        let mut extractor = SiteExtractor {
            profile,
            parser: IngredientParser::new(&profile.grammar)?,
            selectors: HashMap::new(),
            patterns: HashMap::new(),
        };

        for spec in profile.fields() {
            for rewrite in spec.rewrites {
                extractor.compile_pattern(rewrite.pattern)?;
            }
            for source in spec.sources {
                extractor.register(source)?;
            }
        }

        debug!(
            "Built extractor for {} ({} selectors, {} patterns)",
            profile.key,
            extractor.selectors.len(),
            extractor.patterns.len()
        );
        Ok(extractor)
    }

    /// Extractor for a registered site key.
    pub fn for_site(key: &str) -> Result<Self, ExtractError> {
        let profile = sites::profile(key).ok_or_else(|| ExtractError::UnknownSite(key.to_string()))?;
        Self::new(profile)
    }

    pub fn profile(&self) -> &'static SiteProfile {
        self.profile
    }

    pub fn ingredient_parser(&self) -> &IngredientParser {
        &self.parser
    }

    fn compile_selector(&mut self, selector: &str) -> Result<(), ExtractError> {
        if !self.selectors.contains_key(selector) {
            let parsed = Selector::parse(selector).map_err(|e| ExtractError::Selector {
                selector: selector.to_string(),
                message: e.to_string(),
            })?;
            self.selectors.insert(selector.to_string(), parsed);
        }
        Ok(())
    }

    fn compile_pattern(&mut self, pattern: &'static str) -> Result<(), ExtractError> {
        if !self.patterns.contains_key(pattern) {
            self.patterns.insert(pattern, Regex::new(pattern)?);
        }
        Ok(())
    }

    fn register(&mut self, source: &'static Source) -> Result<(), ExtractError> {
        match *source {
            Source::JsonLd(_) | Source::Microdata(_) | Source::RecipeCard(_) => Ok(()),
            Source::JsonLdScript { selector, .. }
            | Source::Css(selector)
            | Source::CssAttr { selector, .. }
            | Source::Attrs { selector, .. } => self.compile_selector(selector),
            Source::Meta(name) => self.compile_selector(&meta_selector(name)),
            Source::Title => self.compile_selector("title"),
            Source::Prose {
                container, split, ..
            } => {
                self.compile_selector(container)?;
                // an empty pattern keeps the block whole
                if split.is_empty() {
                    return Ok(());
                }
                self.compile_pattern(split)
            }
            Source::Rows { item, name, amount } => {
                self.compile_selector(item)?;
                self.compile_selector(name)?;
                self.compile_selector(amount)
            }
            Source::Pattern { inner, pattern, .. } | Source::Split { inner, pattern } => {
                self.compile_pattern(pattern)?;
                self.register(inner)
            }
        }
    }

    fn select<'a>(
        &'a self,
        context: &'a ParsingContext,
        selector: &str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.selectors
            .get(selector)
            .into_iter()
            .flat_map(move |selector| context.document.select(selector))
    }

    /// Raw, uncleaned values of one source.
    fn raw_values(&self, source: &Source, context: &ParsingContext) -> Vec<String> {
        match *source {
            Source::JsonLd(path) => context
                .recipe_json_ld()
                .map(|node| json_ld::values(node, path))
                .unwrap_or_default(),
            Source::JsonLdScript { selector, path } => self
                .selectors
                .get(selector)
                .map(|selector| json_ld::script_values(&context.document, selector, path))
                .unwrap_or_default(),
            Source::Microdata(prop) => microdata::values(&context.document, prop),
            Source::RecipeCard(field) => html_class::values(&context.document, field),
            Source::Css(selector) => self.select(context, selector).map(element_text).collect(),
            Source::CssAttr { selector, attr } => self
                .select(context, selector)
                .filter_map(|element| element.value().attr(attr).map(str::to_string))
                .collect(),
            Source::Attrs { selector, attrs } => self
                .select(context, selector)
                .map(|element| {
                    attrs
                        .iter()
                        .filter_map(|attr| element.value().attr(attr))
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
            Source::Meta(name) => self
                .select(context, &meta_selector(name))
                .filter_map(|element| element.value().attr("content").map(str::to_string))
                .collect(),
            Source::Title => self.select(context, "title").map(element_text).collect(),
            Source::Prose {
                container,
                marker,
                split,
            } => self.prose(context, container, marker, split),
            Source::Rows { item, name, amount } => self.rows(context, item, name, amount),
            Source::Pattern {
                inner,
                pattern,
                template,
            } => {
                let Some(regex) = self.patterns.get(pattern) else {
                    return Vec::new();
                };
                self.raw_values(inner, context)
                    .iter()
                    .filter_map(|text| {
                        let captures = regex.captures(text)?;
                        let mut expanded = String::new();
                        captures.expand(template, &mut expanded);
                        Some(expanded)
                    })
                    .collect()
            }
            Source::Split { inner, pattern } => {
                let Some(regex) = self.patterns.get(pattern) else {
                    return Vec::new();
                };
                self.raw_values(inner, context)
                    .iter()
                    .flat_map(|text| regex.split(text).map(str::to_string))
                    .collect()
            }
        }
    }

    fn prose(
        &self,
        context: &ParsingContext,
        container: &str,
        marker: &str,
        split: &'static str,
    ) -> Vec<String> {
        let marker = marker.to_lowercase();
        let Some(heading) = self
            .select(context, container)
            .find(|element| element_text(*element).to_lowercase().contains(&marker))
        else {
            return Vec::new();
        };

        let Some(block) = heading.next_siblings().find_map(ElementRef::wrap) else {
            return Vec::new();
        };

        let items: Vec<String> = block
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "li")
            .map(element_text)
            .collect();
        if !items.is_empty() {
            return items;
        }

        let text = element_text(block);
        match self.patterns.get(split) {
            Some(splitter) => splitter.split(&text).map(str::to_string).collect(),
            None => vec![text],
        }
    }

    fn rows(&self, context: &ParsingContext, item: &str, name: &str, amount: &str) -> Vec<String> {
        let (Some(name_selector), Some(amount_selector)) =
            (self.selectors.get(name), self.selectors.get(amount))
        else {
            return Vec::new();
        };

        self.select(context, item)
            .filter_map(|row| {
                let name = row.select(name_selector).map(element_text).find(|t| !t.is_empty())?;
                let amount = row
                    .select(amount_selector)
                    .map(element_text)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(match self.parser.grammar().order {
                    WordOrder::AmountFirst => format!("{amount} {name}"),
                    WordOrder::NameFirst => format!("{name} {amount}"),
                })
            })
            .collect()
    }

    fn cleaned_values(&self, spec: &FieldSpec, source: &Source, context: &ParsingContext) -> Vec<String> {
        self.raw_values(source, context)
            .iter()
            .filter_map(|raw| {
                let mut text = clean_text(raw);
                for rewrite in spec.rewrites {
                    if let Some(regex) = self.patterns.get(rewrite.pattern) {
                        text = regex.replace_all(&text, rewrite.replacement).into_owned();
                    }
                }
                non_empty(&text)
            })
            .collect()
    }

    /// Cleaned values of a field, following its merge rule.
    pub fn field_values(&self, spec: &FieldSpec, context: &ParsingContext) -> Vec<String> {
        match spec.merge {
            Merge::First => spec
                .sources
                .iter()
                .map(|source| self.cleaned_values(spec, source, context))
                .find(|values| !values.is_empty())
                .unwrap_or_default(),
            Merge::All => spec
                .sources
                .iter()
                .flat_map(|source| self.cleaned_values(spec, source, context))
                .collect(),
        }
    }

    fn first(&self, spec: &FieldSpec, context: &ParsingContext) -> Option<String> {
        self.field_values(spec, context).into_iter().next()
    }

    fn joined(&self, spec: &FieldSpec, context: &ParsingContext, separator: &str) -> Option<String> {
        let values = dedup_preserving_order(self.field_values(spec, context));
        non_empty(&values.join(separator))
    }

    fn format_time(&self, raw: &str) -> Option<String> {
        if is_iso_duration(raw) {
            format_iso_duration(raw, self.profile.duration)
        } else {
            non_empty(&normalize_time_text(raw))
        }
    }

    fn time(&self, spec: &FieldSpec, context: &ParsingContext) -> Option<String> {
        self.field_values(spec, context)
            .iter()
            .find_map(|raw| self.format_time(raw))
    }
}

impl RecipeFieldExtractor for SiteExtractor {
    fn dish_name(&self, context: &ParsingContext) -> Option<String> {
        self.first(&self.profile.dish_name, context)
    }

    fn description(&self, context: &ParsingContext) -> Option<String> {
        self.first(&self.profile.description, context)
    }

    fn ingredients(&self, context: &ParsingContext) -> Option<Vec<Ingredient>> {
        let lines = self.field_values(&self.profile.ingredients, context);
        let ingredients = self.parser.parse_lines(lines);
        debug!("{}: {} ingredients", context.source, ingredients.len());
        (!ingredients.is_empty()).then_some(ingredients)
    }

    fn instructions(&self, context: &ParsingContext) -> Option<String> {
        let mut steps = self.field_values(&self.profile.instructions, context);
        if self.profile.numbered_steps {
            steps = steps
                .iter()
                .enumerate()
                .map(|(index, step)| format!("{}. {step}", index + 1))
                .collect();
        }
        // steps are already clean; re-cleaning would flatten a "\n" separator
        let joined = steps.join(self.profile.instruction_separator);
        (!joined.trim().is_empty()).then_some(joined)
    }

    fn category(&self, context: &ParsingContext) -> Option<String> {
        self.joined(&self.profile.category, context, ", ")
    }

    fn prep_time(&self, context: &ParsingContext) -> Option<String> {
        self.time(&self.profile.prep_time, context)
    }

    fn cook_time(&self, context: &ParsingContext) -> Option<String> {
        self.time(&self.profile.cook_time, context)
    }

    fn total_time(&self, context: &ParsingContext) -> Option<String> {
        self.time(&self.profile.total_time, context).or_else(|| {
            if !self.profile.total_from_parts {
                return None;
            }
            let prep = minutes_in(&self.prep_time(context)?)?;
            let cook = minutes_in(&self.cook_time(context)?)?;
            format_minutes(prep + cook, self.profile.duration)
        })
    }

    fn notes(&self, context: &ParsingContext) -> Option<String> {
        self.joined(&self.profile.notes, context, " ")
    }

    fn tags(&self, context: &ParsingContext) -> Option<String> {
        let tags = self
            .field_values(&self.profile.tags, context)
            .iter()
            .flat_map(|value| value.split([',', ';']))
            .filter_map(non_empty)
            .collect();
        non_empty(&dedup_preserving_order(tags).join(", "))
    }

    fn image_urls(&self, context: &ParsingContext) -> Option<String> {
        self.joined(&self.profile.image_urls, context, ",")
    }

    fn nutrition_info(&self, context: &ParsingContext) -> Option<String> {
        self.joined(&self.profile.nutrition_info, context, ", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{CardField, Rewrite};
    use crate::ingredients::IngredientGrammar;
    use crate::model::Amount;

    static TEST_SITE: SiteProfile = SiteProfile {
        key: "test_site",
        dish_name: FieldSpec::first(&[Source::JsonLd("name"), Source::Meta("og:title")])
            .rewritten(&[Rewrite {
                pattern: r"\s*\|\s*Test Kitchen$",
                replacement: "",
            }]),
        image_urls: FieldSpec::all(&[Source::Meta("og:image"), Source::JsonLd("image")]),
        notes: FieldSpec::first(&[Source::Pattern {
            inner: &Source::JsonLdScript {
                selector: "script.page-metadata",
                path: "articleBody",
            },
            pattern: r"(?s)Tip:\s+(.+?)(?:\n\n|\z)",
            template: "$1",
        }]),
        total_from_parts: true,
        ..SiteProfile::GENERIC
    };

    const PAGE: &str = r#"
        <html><head>
        <title>Ignored</title>
        <meta property="og:title" content="Pancakes | Test Kitchen">
        <meta property="og:image" content="https://example.com/a.jpg">
        <script type="application/ld+json">
        {
            "@type": "Recipe",
            "image": ["https://example.com/a.jpg", "https://example.com/b.jpg"],
            "recipeIngredient": ["2 cups flour", "1 egg", ""],
            "recipeInstructions": [{"@type": "HowToStep", "text": "Mix."}, {"@type": "HowToStep", "text": "Fry."}],
            "prepTime": "PT10M",
            "cookTime": "PT1H5M",
            "keywords": "breakfast, quick, breakfast"
        }
        </script>
        <script type="application/ld+json" class="page-metadata">
        {"articleBody": "Stack them high.\n\nTip: Rest the batter.\n\nEnjoy."}
        </script>
        </head><body></body></html>
    "#;

    fn extract(profile: &'static SiteProfile) -> crate::model::RecipeRecord {
        let extractor = SiteExtractor::new(profile).unwrap();
        extractor.extract_all(&ParsingContext::new("page.html", PAGE))
    }

    #[test]
    fn test_fallback_and_rewrite() {
        let record = extract(&TEST_SITE);
        assert_eq!(record.dish_name.as_deref(), Some("Pancakes"));
    }

    #[test]
    fn test_merged_images_are_deduplicated() {
        let record = extract(&TEST_SITE);
        assert_eq!(
            record.image_urls.as_deref(),
            Some("https://example.com/a.jpg,https://example.com/b.jpg")
        );
    }

    #[test]
    fn test_ingredients_and_instructions() {
        let record = extract(&TEST_SITE);
        let ingredients = record.ingredients.unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "flour");
        assert_eq!(ingredients[0].amount, Some(Amount::Number(2.0)));
        assert_eq!(ingredients[0].unit.as_deref(), Some("cups"));
        assert_eq!(record.instructions.as_deref(), Some("Mix. Fry."));
    }

    #[test]
    fn test_times_and_total_from_parts() {
        let record = extract(&TEST_SITE);
        assert_eq!(record.prep_time.as_deref(), Some("10 minutes"));
        assert_eq!(record.cook_time.as_deref(), Some("1 hour 5 minutes"));
        assert_eq!(record.total_time.as_deref(), Some("1 hour 15 minutes"));

        let generic = extract(&sites::generic::PROFILE);
        assert_eq!(generic.total_time, None);
    }

    #[test]
    fn test_tags_and_pattern_notes() {
        let record = extract(&TEST_SITE);
        assert_eq!(record.tags.as_deref(), Some("breakfast, quick"));
        assert_eq!(record.notes.as_deref(), Some("Rest the batter."));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let record = extract(&TEST_SITE);
        assert_eq!(record.description, None);
        assert_eq!(record.category, None);
        assert_eq!(record.nutrition_info, None);
    }

    #[test]
    fn test_invalid_tables_fail_on_construction() {
        static BAD_PATTERN: SiteProfile = SiteProfile {
            key: "bad_pattern",
            dish_name: FieldSpec::first(&[Source::Title]).rewritten(&[Rewrite {
                pattern: "(unclosed",
                replacement: "",
            }]),
            ..SiteProfile::GENERIC
        };
        static BAD_SELECTOR: SiteProfile = SiteProfile {
            key: "bad_selector",
            notes: FieldSpec::first(&[Source::Css("div[")]),
            ..SiteProfile::GENERIC
        };

        assert!(matches!(
            SiteExtractor::new(&BAD_PATTERN),
            Err(ExtractError::Pattern(_))
        ));
        assert!(matches!(
            SiteExtractor::new(&BAD_SELECTOR),
            Err(ExtractError::Selector { .. })
        ));
    }

    #[test]
    fn test_recipe_card_source() {
        static CARD_SITE: SiteProfile = SiteProfile {
            key: "card_site",
            prep_time: FieldSpec::first(&[Source::RecipeCard(CardField::PrepTime)]),
            ..SiteProfile::GENERIC
        };
        let html = r#"<span class="wprm-recipe-prep_time">15<span>minutes</span></span>"#;
        let extractor = SiteExtractor::new(&CARD_SITE).unwrap();
        let context = ParsingContext::new("card.html", html);
        assert_eq!(extractor.prep_time(&context).as_deref(), Some("15 minutes"));
    }

    static MARKUP_SITE: SiteProfile = SiteProfile {
        key: "markup_site",
        ingredients: FieldSpec::first(&[Source::Rows {
            item: "li.row",
            name: ".name",
            amount: ".qty, .unit",
        }]),
        instructions: FieldSpec::first(&[Source::Css("ol.steps li")]),
        notes: FieldSpec::first(&[Source::Prose {
            container: "h2",
            marker: "tips",
            split: r";\s*",
        }]),
        tags: FieldSpec::first(&[Source::Split {
            inner: &Source::Pattern {
                inner: &Source::Css("p.footer"),
                pattern: r"Tags:\s*(.+)$",
                template: "$1",
            },
            pattern: r"\s*/\s*",
        }]),
        description: FieldSpec::first(&[Source::Attrs {
            selector: "div.summary",
            attrs: &["data-lead", "data-missing", "data-rest"],
        }]),
        numbered_steps: true,
        ..SiteProfile::GENERIC
    };

    const MARKUP_PAGE: &str = r#"
        <html><body>
        <div class="summary" data-lead="Crisp." data-rest=" Quick. "></div>
        <ul>
            <li class="row"><span class="qty">2</span> <span class="unit">cups</span> <span class="name">flour</span></li>
            <li class="row"><span class="name">salt</span></li>
            <li class="row"><span class="qty">3</span></li>
        </ul>
        <ol class="steps"><li>Mix.</li><li>Bake.</li></ol>
        <h2>Chef's Tips</h2>
        <p>Use cold butter; chill the dough</p>
        <p class="footer">Tags: baking / bread</p>
        </body></html>
    "#;

    #[test]
    fn test_markup_sources() {
        let extractor = SiteExtractor::new(&MARKUP_SITE).unwrap();
        let record = extractor.extract_all(&ParsingContext::new("markup.html", MARKUP_PAGE));

        let ingredients = record.ingredients.unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "flour");
        assert_eq!(ingredients[0].unit.as_deref(), Some("cups"));
        assert_eq!(ingredients[1], Ingredient::named("salt"));

        assert_eq!(record.instructions.as_deref(), Some("1. Mix. 2. Bake."));
        assert_eq!(record.notes.as_deref(), Some("Use cold butter chill the dough"));
        assert_eq!(record.tags.as_deref(), Some("baking, bread"));
        assert_eq!(record.description.as_deref(), Some("Crisp. Quick."));
    }

    #[test]
    fn test_instruction_separator_is_kept() {
        static LINES_SITE: SiteProfile = SiteProfile {
            key: "lines_site",
            instructions: FieldSpec::first(&[Source::Css("ol.steps li")]),
            instruction_separator: "\n",
            numbered_steps: true,
            ..SiteProfile::GENERIC
        };

        let extractor = SiteExtractor::new(&LINES_SITE).unwrap();
        let context = ParsingContext::new("lines.html", MARKUP_PAGE);
        assert_eq!(
            extractor.instructions(&context).as_deref(),
            Some("1. Mix.\n2. Bake.")
        );
    }

    #[test]
    fn test_rows_follow_word_order() {
        const NAME_FIRST: IngredientGrammar = IngredientGrammar {
            order: WordOrder::NameFirst,
            units: &["大さじ", "g"],
            ..IngredientGrammar::BASIC
        };
        static NAME_FIRST_SITE: SiteProfile = SiteProfile {
            key: "name_first_site",
            ingredients: FieldSpec::first(&[Source::Rows {
                item: "li.row",
                name: ".name",
                amount: ".qty",
            }]),
            grammar: NAME_FIRST,
            ..SiteProfile::GENERIC
        };

        let html = r#"<ul><li class="row"><span class="name">砂糖</span><span class="qty">大さじ1</span></li></ul>"#;
        let extractor = SiteExtractor::new(&NAME_FIRST_SITE).unwrap();
        let ingredients = extractor
            .ingredients(&ParsingContext::new("rows.html", html))
            .unwrap();
        assert_eq!(ingredients[0].name, "砂糖");
        assert_eq!(ingredients[0].amount, Some(Amount::Number(1.0)));
        assert_eq!(ingredients[0].unit.as_deref(), Some("大さじ"));
    }
}
