use log::{error, info};
use std::env;

use recipe_extractors::{batch, sites, ExtractConfig, ExtractError, SiteExtractor};

fn run_site(config: &ExtractConfig, site: &str) -> Result<(), ExtractError> {
    let extractor = SiteExtractor::for_site(site)?;
    let dir = config.site_dir(site);
    if !dir.is_dir() {
        println!("Directory not found: {}", dir.display());
        return Ok(());
    }

    let summary = batch::process_directory(&extractor, &dir, config.output_dir.as_deref())?;
    info!(
        "{site}: {} written, {} failed",
        summary.written.len(),
        summary.failed.len()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ExtractConfig::load()?;

    // Sites named on the command line, else the configured list, else all
    let mut requested: Vec<String> = env::args().skip(1).collect();
    if requested.is_empty() {
        requested = config.sites.clone();
    }
    if requested.is_empty() {
        requested = sites::keys()
            .filter(|key| *key != "generic")
            .map(str::to_string)
            .collect();
    }

    for site in &requested {
        if let Err(e) = run_site(&config, site) {
            error!("{e}");
            eprintln!("{site}: {e}");
        }
    }

    Ok(())
}
