use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Top-level settings for the parser and the image collaborator
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub parser: ParseOptions,
    #[serde(default)]
    pub images: ImageOptions,
}

/// Options that change how recipe text is parsed and rendered
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Read a leading `---` delimited block as metadata
    #[serde(default = "default_true")]
    pub front_matter: bool,
    /// Strip `[- ... -]` block comments
    #[serde(default = "default_true")]
    pub block_comments: bool,
    /// Render ingredients in steps as `name (amount unit)` instead of `name`
    #[serde(default)]
    pub ingredient_amounts: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            front_matter: true,
            block_comments: true,
            ingredient_amounts: false,
        }
    }
}

/// Options for matching sibling image files to a recipe
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    /// Accepted image extensions in order of preference, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec![
        "jpg".to_string(),
        "jpeg".to_string(),
        "png".to_string(),
        "gif".to_string(),
    ]
}

impl Settings {
    /// Load settings from `config.toml` in the current directory and the environment
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKLANG__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKLANG__PARSER__INGREDIENT_AMOUNTS
    pub fn load() -> Result<Self, ConfigError> {
        load_settings(None)
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_settings(Some(path))
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: COOKLANG__IMAGES__EXTENSIONS
        .add_source(
            Environment::with_prefix("COOKLANG")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("images.extensions")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
