//! Cooklang markup parser.
//!
//! Parsing is total: every input produces a [`Recipe`]. Markup that cannot be
//! recognized is kept as literal step text, so documents that are being typed
//! character by character always render something.
//!
//! The pipeline runs in this order:
//! 1. an optional `---` front matter block is read as metadata
//! 2. `--` and `[- ... -]` comments are removed in a single pass
//! 3. each remaining line is either read as a `>>` metadata line, treated as a
//!    step break when blank, or tokenized into the current step

pub mod comments;
pub mod metadata;
pub mod render;
pub mod token;

pub use render::Renderer;
pub use token::{tokenize, Token};

use crate::config::ParseOptions;
use crate::model::Recipe;
use log::debug;

/// Parses recipe text with the default options.
pub fn parse(text: &str) -> Recipe {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses recipe text into a fresh [`Recipe`].
///
/// `image` and `method_images` are always left empty.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Recipe {
    let mut renderer = Renderer::new(options);

    let front_matter = if options.front_matter {
        metadata::split_front_matter(text)
    } else {
        None
    };

    let body = match front_matter {
        Some((entries, body)) => {
            for entry in entries {
                renderer.push(entry);
            }
            body
        }
        None => text,
    };

    let body = comments::strip_comments(body, options.block_comments);

    for line in body.lines() {
        if metadata::is_directive(line) {
            if let Some(entry) = metadata::parse_directive(line) {
                renderer.push(entry);
            }
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            renderer.finish_step();
        } else {
            renderer.push_line(line, tokenize(line));
        }
    }

    let recipe = renderer.finish();
    debug!(
        "Parsed recipe: {} ingredients, {} steps, {} metadata entries",
        recipe.ingredients.len(),
        recipe.method.len(),
        recipe.metadata.len()
    );
    recipe
}
