use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A parsed recipe document.
///
/// Built fresh by every parse call. `image` and `method_images` are never
/// touched by the parser; they are filled in afterwards by
/// [`attach_images`](crate::images::attach_images).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Every ingredient mention in order of appearance, duplicates included
    pub ingredients: Vec<Ingredient>,
    /// Every cookware mention in order of appearance
    pub cookware: Vec<Cookware>,
    /// Every timer mention in order of appearance
    pub timers: Vec<Timer>,
    /// Rendered step text; `method[0]` is step 1
    pub method: Vec<String>,
    /// Main image, attached externally
    pub image: Option<PathBuf>,
    /// Step images keyed by 1-based step number, attached externally
    pub method_images: BTreeMap<usize, PathBuf>,
    /// Sorted by key so serialized output is stable
    pub metadata: BTreeMap<String, String>,
}

impl Recipe {
    /// Returns the rendered text of a 1-based step number.
    pub fn step(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.method.get(index))
            .map(String::as_str)
    }

    /// Returns the image attached to a 1-based step number, if any.
    pub fn step_image(&self, number: usize) -> Option<&PathBuf> {
        self.method_images.get(&number)
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.method.is_empty() && self.metadata.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Numeric, fractional, or free text like "a pinch"
    pub amount: Option<String>,
    /// Always `None` when `amount` is `None`
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Option<String>, unit: Option<String>) -> Self {
        let amount = amount.filter(|a| !a.is_empty());
        let unit = if amount.is_some() {
            unit.filter(|u| !u.is_empty())
        } else {
            None
        };

        Self {
            name: name.into(),
            amount,
            unit,
        }
    }

    /// Amount and unit as a readable phrase, e.g. `"2 tbsp"`.
    pub fn quantity(&self) -> Option<String> {
        match (&self.amount, &self.unit) {
            (Some(amount), Some(unit)) => Some(format!("{} {}", amount, unit)),
            (Some(amount), None) => Some(amount.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cookware {
    pub name: String,
    /// Raw brace content such as the `2` in `#pot{2}`; never rendered
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timer {
    /// Optional label from `~name{...}`
    pub name: Option<String>,
    pub duration: Option<String>,
    pub unit: Option<String>,
}

impl Timer {
    /// The text a step shows in place of the timer token.
    pub fn phrase(&self) -> String {
        match (&self.duration, &self.unit, &self.name) {
            (Some(duration), Some(unit), _) => format!("{} {}", duration, unit),
            (Some(duration), None, _) => duration.clone(),
            (None, _, Some(name)) => name.clone(),
            (None, _, None) => String::new(),
        }
    }
}
