//! Matches sibling image files to a recipe document.
//!
//! For a recipe named `soup.cook` the base name is `soup`:
//! - `soup.jpg` (or any accepted extension) is the main image
//! - `soup.2.png` is the image for method step 2
//!
//! This runs after parsing and only fills [`Recipe::image`] and
//! [`Recipe::method_images`].

use crate::config::ImageOptions;
use crate::error::{LoadError, Result};
use crate::model::Recipe;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a sibling file name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Main,
    Step(usize),
}

/// Candidate ordering: preferred extension first, then file name
type Rank = (usize, String);

/// Returns the base name used for image matching, e.g. `soup` for `soup.cook`.
pub fn base_name(recipe_path: &Path) -> Option<&str> {
    recipe_path.file_stem().and_then(|stem| stem.to_str())
}

/// Classifies a file name against a recipe base name.
///
/// Returns the slot and the preference index of its extension.
pub fn classify(
    file_name: &str,
    base: &str,
    options: &ImageOptions,
) -> Option<(ImageSlot, usize)> {
    let rest = file_name.strip_prefix(base)?.strip_prefix('.')?;

    let (slot, extension) = match rest.split_once('.') {
        Some((step, extension)) => (ImageSlot::Step(step_number(step)?), extension),
        None => (ImageSlot::Main, rest),
    };

    let preference = options
        .extensions
        .iter()
        .position(|accepted| accepted.eq_ignore_ascii_case(extension))?;

    Some((slot, preference))
}

fn step_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|n| *n > 0)
}

/// Attaches images from a list of sibling paths using the default extensions.
pub fn attach_images<I, P>(recipe: &mut Recipe, base: &str, siblings: I)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    attach_images_with_options(recipe, base, siblings, &ImageOptions::default());
}

/// Attaches images from a list of sibling paths.
///
/// When several files match the same slot, the one whose extension comes
/// first in [`ImageOptions::extensions`] wins, then the smallest file name.
/// Slots without a match are left untouched.
pub fn attach_images_with_options<I, P>(
    recipe: &mut Recipe,
    base: &str,
    siblings: I,
    options: &ImageOptions,
) where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut main: Option<(Rank, PathBuf)> = None;
    let mut steps: BTreeMap<usize, (Rank, PathBuf)> = BTreeMap::new();

    for sibling in siblings {
        let path = sibling.as_ref();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some((slot, preference)) = classify(file_name, base, options) else {
            continue;
        };
        trace!("Image candidate {:?} for {:?}", file_name, slot);

        let rank = (preference, file_name.to_string());
        match slot {
            ImageSlot::Main => main = Some(keep_best(main.take(), rank, path)),
            ImageSlot::Step(number) => {
                let best = keep_best(steps.remove(&number), rank, path);
                steps.insert(number, best);
            }
        }
    }

    if let Some((_, path)) = main {
        debug!("Main image for {:?}: {}", base, path.display());
        recipe.image = Some(path);
    }
    for (number, (_, path)) in steps {
        debug!("Step {} image for {:?}: {}", number, base, path.display());
        recipe.method_images.insert(number, path);
    }
}

fn keep_best(current: Option<(Rank, PathBuf)>, rank: Rank, path: &Path) -> (Rank, PathBuf) {
    match current {
        Some(current) if current.0 <= rank => current,
        _ => (rank, path.to_path_buf()),
    }
}

/// Attaches images found next to `recipe_path` in its directory.
///
/// # Errors
/// Returns an error if the path has no usable file name or the directory
/// cannot be listed.
pub async fn attach_images_from_dir(
    recipe: &mut Recipe,
    recipe_path: &Path,
    options: &ImageOptions,
) -> Result<()> {
    let base = base_name(recipe_path)
        .ok_or_else(|| LoadError::InvalidPath(recipe_path.display().to_string()))?;

    let dir = match recipe_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut siblings = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        siblings.push(entry.path());
    }

    attach_images_with_options(recipe, base, siblings, options);
    Ok(())
}
