use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the `recipe-extract` binary.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory holding one subdirectory of saved pages per site
    #[serde(default = "default_input_root")]
    pub input_root: PathBuf,
    /// Where records are written; next to each input when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Sites processed when none are named on the command line
    #[serde(default)]
    pub sites: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_root: default_input_root(),
            output_dir: None,
            sites: Vec::new(),
        }
    }
}

fn default_input_root() -> PathBuf {
    PathBuf::from("preprocessed")
}

impl ExtractConfig {
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Input directory of one site.
    pub fn site_dir(&self, site: &str) -> PathBuf {
        self.input_root.join(site)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_EXTRACT__ prefix
/// 2. recipe-extract.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_EXTRACT__OUTPUT_DIR
pub fn load_config() -> Result<ExtractConfig, ConfigError> {
    load_config_from("recipe-extract")
}

/// Same as [`load_config`] with a different settings file (extension optional).
pub fn load_config_from(file: &str) -> Result<ExtractConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_EXTRACT")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("sites")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
