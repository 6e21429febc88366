use super::token::Token;
use crate::config::ParseOptions;
use crate::model::{Ingredient, Recipe};

/// Accumulates tokens into a [`Recipe`], one step at a time.
pub struct Renderer<'a> {
    options: &'a ParseOptions,
    recipe: Recipe,
    step: String,
    source: String,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            recipe: Recipe::default(),
            step: String::new(),
            source: String::new(),
        }
    }

    /// Appends one source line of the current step. Lines are joined by a space.
    pub fn push_line(&mut self, source: &str, tokens: Vec<Token>) {
        if !self.step.is_empty() {
            self.step.push(' ');
        }
        if !self.source.is_empty() {
            self.source.push(' ');
        }
        self.source.push_str(source);
        for token in tokens {
            self.push(token);
        }
    }

    pub fn push(&mut self, token: Token) {
        match token {
            Token::Text(text) => self.step.push_str(&text),
            Token::Ingredient(ingredient) => {
                let display = self.ingredient_display(&ingredient);
                self.step.push_str(&display);
                self.recipe.ingredients.push(ingredient);
            }
            Token::Cookware(cookware) => {
                self.step.push_str(&cookware.name);
                self.recipe.cookware.push(cookware);
            }
            Token::Timer(timer) => {
                self.step.push_str(&timer.phrase());
                self.recipe.timers.push(timer);
            }
            Token::Metadata { key, value } => {
                self.recipe.metadata.insert(key, value);
            }
        }
    }

    /// Closes the current step.
    ///
    /// Every block with source text becomes a step, so step numbers follow the
    /// source. A block whose markup renders to nothing keeps its source text.
    pub fn finish_step(&mut self) {
        let step = std::mem::take(&mut self.step);
        let source = std::mem::take(&mut self.source);
        let source = source.trim();
        if source.is_empty() {
            return;
        }

        let step = match step.trim() {
            "" => source,
            rendered => rendered,
        };
        self.recipe.method.push(step.to_string());
    }

    pub fn finish(mut self) -> Recipe {
        self.finish_step();
        self.recipe
    }

    fn ingredient_display(&self, ingredient: &Ingredient) -> String {
        match ingredient.quantity() {
            Some(quantity) if self.options.ingredient_amounts => {
                format!("{} ({})", ingredient.name, quantity)
            }
            _ => ingredient.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timer;

    #[test]
    fn test_lines_join_into_one_step() {
        let options = ParseOptions::default();
        let mut renderer = Renderer::new(&options);
        renderer.push_line("Boil", vec![Token::Text("Boil".to_string())]);
        renderer.push_line("the water.", vec![Token::Text("the water.".to_string())]);

        let recipe = renderer.finish();
        assert_eq!(recipe.method, vec!["Boil the water."]);
    }

    #[test]
    fn test_metadata_does_not_touch_step_text() {
        let options = ParseOptions::default();
        let mut renderer = Renderer::new(&options);
        renderer.push(Token::Metadata {
            key: "servings".to_string(),
            value: "4".to_string(),
        });
        renderer.finish_step();

        let recipe = renderer.finish();
        assert!(recipe.method.is_empty());
        assert_eq!(recipe.metadata.get("servings").unwrap(), "4");
    }

    #[test]
    fn test_empty_rendered_step_keeps_source_text() {
        let options = ParseOptions::default();
        let mut renderer = Renderer::new(&options);
        renderer.push_line("~{}", vec![Token::Timer(Timer {
            name: None,
            duration: None,
            unit: None,
        })]);

        let recipe = renderer.finish();
        assert_eq!(recipe.method, vec!["~{}"]);
        assert_eq!(recipe.timers.len(), 1);
    }

    #[test]
    fn test_ingredient_amounts_option() {
        let options = ParseOptions {
            ingredient_amounts: true,
            ..Default::default()
        };
        let mut renderer = Renderer::new(&options);
        renderer.push_line("@olive oil{2%tbsp} and @salt", vec![
            Token::Ingredient(Ingredient::new(
                "olive oil",
                Some("2".to_string()),
                Some("tbsp".to_string()),
            )),
            Token::Text(" and ".to_string()),
            Token::Ingredient(Ingredient::new("salt", None, None)),
        ]);

        let recipe = renderer.finish();
        assert_eq!(recipe.method, vec!["olive oil (2 tbsp) and salt"]);
    }
}
