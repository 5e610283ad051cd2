pub mod batch;
pub mod config;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod ingredients;
pub mod model;
pub mod sites;
pub mod text;

use std::path::Path;

use log::debug;

pub use crate::batch::{process_directory, BatchSummary};
pub use crate::config::{load_config, ExtractConfig};
pub use crate::error::ExtractError;
pub use crate::extractors::{ParsingContext, RecipeFieldExtractor, SiteExtractor};
pub use crate::model::{Amount, Ingredient, RecipeRecord};

/// Extract a record from one page of a registered site.
///
/// `source` only labels log messages.
pub fn extract_html(site: &str, html: &str, source: &str) -> Result<RecipeRecord, ExtractError> {
    let extractor = SiteExtractor::for_site(site)?;
    let context = ParsingContext::new(source, html);
    let record = extractor.extract_all(&context);
    debug!("{:#?}", record);
    Ok(record)
}

/// Extract a record from a saved page on disk.
pub fn extract_file(site: &str, path: impl AsRef<Path>) -> Result<RecipeRecord, ExtractError> {
    let extractor = SiteExtractor::for_site(site)?;
    batch::extract_path(&extractor, path.as_ref())
}
