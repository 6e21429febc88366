pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod parser;

use std::path::Path;

use log::debug;
use tokio::fs;

pub use config::{ImageOptions, ParseOptions, Settings};
pub use error::{LoadError, Result};
pub use images::{attach_images, attach_images_from_dir, attach_images_with_options};
pub use model::{Cookware, Ingredient, Recipe, Timer};
pub use parser::{parse, parse_with_options, Token};

/// Reads a recipe file, parses it and attaches sibling images
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), cooklang_parse::LoadError> {
/// let recipe = cooklang_parse::load_recipe("recipes/soup.cook").await?;
/// println!("{} steps", recipe.method.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_recipe(path: impl AsRef<Path>) -> Result<Recipe> {
    load_recipe_with_settings(path, &Settings::default()).await
}

/// Same as [`load_recipe`] with explicit parser and image settings
pub async fn load_recipe_with_settings(
    path: impl AsRef<Path>,
    settings: &Settings,
) -> Result<Recipe> {
    let path = path.as_ref();
    debug!("Loading recipe from {}", path.display());

    let text = fs::read_to_string(path).await?;
    let mut recipe = parse_with_options(&text, &settings.parser);
    attach_images_from_dir(&mut recipe, path, &settings.images).await?;

    Ok(recipe)
}
