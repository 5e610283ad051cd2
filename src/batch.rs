//! Directory processing: every `*.html` page in a site directory becomes a
//! `<stem>_extracted.json` record.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::ExtractError;
use crate::extractors::{ParsingContext, RecipeFieldExtractor, SiteExtractor};
use crate::model::RecipeRecord;

/// Outcome of one [`process_directory`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records written, in input order.
    pub written: Vec<PathBuf>,
    /// Inputs that could not be read or whose record could not be written.
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// `*.html` files directly inside `dir`, sorted by name.
pub fn html_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !dir.is_dir() {
        return Err(ExtractError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ExtractError::io(dir, e))? {
        let path = entry.map_err(|e| ExtractError::io(dir, e))?.path();
        let is_html = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Where the record for `input` is written.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}_extracted.json"))
}

/// Extract one page from disk.
pub fn extract_path(extractor: &SiteExtractor, path: &Path) -> Result<RecipeRecord, ExtractError> {
    let html = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
    let context = ParsingContext::new(path.display().to_string(), &html);
    Ok(extractor.extract_all(&context))
}

fn write_record(record: &RecipeRecord, path: &Path) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json).map_err(|e| ExtractError::io(path, e))
}

fn process_file(
    extractor: &SiteExtractor,
    input: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, ExtractError> {
    let record = extract_path(extractor, input)?;
    let output = output_path(input, output_dir);
    write_record(&record, &output)?;
    debug!("Wrote {}", output.display());
    Ok(output)
}

/// Run `extractor` over every `*.html` file in `dir`.
///
/// A file that fails is logged and counted; the rest of the batch still runs.
/// Records go next to their input unless `output_dir` is given.
pub fn process_directory(
    extractor: &SiteExtractor,
    dir: &Path,
    output_dir: Option<&Path>,
) -> Result<BatchSummary, ExtractError> {
    let files = html_files(dir)?;
    if let Some(output_dir) = output_dir {
        fs::create_dir_all(output_dir).map_err(|e| ExtractError::io(output_dir, e))?;
    }

    let mut summary = BatchSummary::default();
    for input in files {
        match process_file(extractor, &input, output_dir) {
            Ok(output) => summary.written.push(output),
            Err(e) => {
                warn!("Failed to process {}: {e}", input.display());
                summary.failed.push(input);
            }
        }
    }

    info!(
        "{}: processed {} files from {} ({} failed)",
        extractor.profile().key,
        summary.processed(),
        dir.display(),
        summary.failed.len()
    );
    Ok(summary)
}
