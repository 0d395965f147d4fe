use super::RecipeSource;
use crate::codec;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;

/// In-memory source for testing.
///
/// Keeps the serialized text rather than the recipes themselves so loads go
/// through the same parser as the file source.
#[derive(Debug, Default)]
pub struct InMemorySource {
    text: String,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the stored text, as if another program edited the file.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl RecipeSource for InMemorySource {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        if self.simulate_read_error {
            return Err(RecipeError::Io(std::io::Error::other(
                "Simulated read error",
            )));
        }
        codec::parse_str(&self.text)
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        if self.simulate_write_error {
            return Err(RecipeError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.text = codec::to_string(recipes);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://recipes".to_string()
    }
}
