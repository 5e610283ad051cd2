//! Per-site data tables.
//!
//! A site is described entirely by a [`SiteProfile`]: where each field lives
//! in its markup and how its ingredient lines are written. The extraction
//! engine itself lives in [`crate::extractors`].

use crate::duration::DurationStyle;
use crate::extractors::{CardField, FieldSpec, Source};
use crate::ingredients::IngredientGrammar;

pub mod afkarjadida_com;
pub mod apetit_bg;
pub mod chefkoch_de;
pub mod cooktail_co_kr;
pub mod coop_se;
pub mod eatthis_com;
pub mod generic;
pub mod kurashiru_com;
pub mod kwestiasmaku_com;
pub mod misya_info;
pub mod povarenok_ru;
pub mod ptitchef_com;
pub mod recipetineats_com;
pub mod tendakot_co_il;
pub mod vmgonline_lt;

/// Everything the engine needs to know about one site.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    /// Registry key, also the name of the site's input directory.
    pub key: &'static str,
    /// ISO 639-1 code of the site's content.
    pub language: &'static str,
    pub dish_name: FieldSpec,
    pub description: FieldSpec,
    pub ingredients: FieldSpec,
    pub instructions: FieldSpec,
    pub category: FieldSpec,
    pub prep_time: FieldSpec,
    pub cook_time: FieldSpec,
    pub total_time: FieldSpec,
    pub notes: FieldSpec,
    pub tags: FieldSpec,
    pub image_urls: FieldSpec,
    pub nutrition_info: FieldSpec,
    pub grammar: IngredientGrammar,
    pub duration: DurationStyle,
    /// Sum prep and cook time when the page states no total.
    pub total_from_parts: bool,
    pub instruction_separator: &'static str,
    /// Prefix every step with `1. `, `2. `, ...
    pub numbered_steps: bool,
}

impl SiteProfile {
    /// schema.org defaults: JSON-LD, then microdata, then recipe-card
    /// classes, then page metadata.
    pub const GENERIC: SiteProfile = SiteProfile {
        key: "generic",
        language: "en",
        dish_name: FieldSpec::first(&[
            Source::JsonLd("name"),
            Source::Microdata("name"),
            Source::RecipeCard(CardField::Title),
            Source::Meta("og:title"),
            Source::Css("h1"),
            Source::Title,
        ]),
        description: FieldSpec::first(&[
            Source::JsonLd("description"),
            Source::Microdata("description"),
            Source::RecipeCard(CardField::Description),
            Source::Meta("description"),
            Source::Meta("og:description"),
        ]),
        ingredients: FieldSpec::first(&[
            Source::JsonLd("recipeIngredient"),
            Source::JsonLd("ingredients"),
            Source::Microdata("recipeIngredient"),
            Source::Microdata("ingredients"),
            Source::RecipeCard(CardField::Ingredients),
        ]),
        instructions: FieldSpec::first(&[
            Source::JsonLd("recipeInstructions"),
            Source::Microdata("recipeInstructions"),
            Source::RecipeCard(CardField::Instructions),
        ]),
        category: FieldSpec::first(&[
            Source::JsonLd("recipeCategory"),
            Source::Microdata("recipeCategory"),
            Source::RecipeCard(CardField::Category),
        ]),
        prep_time: FieldSpec::first(&[
            Source::JsonLd("prepTime"),
            Source::Microdata("prepTime"),
            Source::RecipeCard(CardField::PrepTime),
        ]),
        cook_time: FieldSpec::first(&[
            Source::JsonLd("cookTime"),
            Source::Microdata("cookTime"),
            Source::RecipeCard(CardField::CookTime),
        ]),
        total_time: FieldSpec::first(&[
            Source::JsonLd("totalTime"),
            Source::Microdata("totalTime"),
            Source::RecipeCard(CardField::TotalTime),
        ]),
        notes: FieldSpec::first(&[Source::RecipeCard(CardField::Notes)]),
        tags: FieldSpec::first(&[
            Source::JsonLd("keywords"),
            Source::Microdata("keywords"),
            Source::Meta("keywords"),
        ]),
        image_urls: FieldSpec::first(&[
            Source::JsonLd("image"),
            Source::Microdata("image"),
            Source::Meta("og:image"),
        ]),
        nutrition_info: FieldSpec::first(&[
            Source::JsonLd("nutrition.calories"),
            Source::Microdata("nutrition.calories"),
            Source::RecipeCard(CardField::Nutrition),
        ]),
        grammar: IngredientGrammar::BASIC,
        duration: DurationStyle::Human,
        total_from_parts: false,
        instruction_separator: " ",
        numbered_steps: false,
    };

    /// The twelve field specs, in record order.
    pub fn fields(&self) -> [&FieldSpec; 12] {
        [
            &self.dish_name,
            &self.description,
            &self.ingredients,
            &self.instructions,
            &self.category,
            &self.prep_time,
            &self.cook_time,
            &self.total_time,
            &self.notes,
            &self.tags,
            &self.image_urls,
            &self.nutrition_info,
        ]
    }
}

static REGISTRY: &[&SiteProfile] = &[
    &generic::PROFILE,
    &vmgonline_lt::PROFILE,
    &eatthis_com::PROFILE,
    &recipetineats_com::PROFILE,
    &apetit_bg::PROFILE,
    &tendakot_co_il::PROFILE,
    &afkarjadida_com::PROFILE,
    &kurashiru_com::PROFILE,
    &cooktail_co_kr::PROFILE,
    &kwestiasmaku_com::PROFILE,
    &coop_se::PROFILE,
    &misya_info::PROFILE,
    &ptitchef_com::PROFILE,
    &povarenok_ru::PROFILE,
    &chefkoch_de::PROFILE,
];

/// Profile registered under `key`.
pub fn profile(key: &str) -> Option<&'static SiteProfile> {
    REGISTRY.iter().copied().find(|profile| profile.key == key)
}

pub fn all() -> &'static [&'static SiteProfile] {
    REGISTRY
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|profile| profile.key)
}
