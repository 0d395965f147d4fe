use crate::error::{RecipeError, Result};
use std::fmt;
use std::str::FromStr;

/// One row of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ingredient {
    pub amount: String,
    pub measure: String,
    pub name: String,
}

impl Ingredient {
    pub fn new(
        amount: impl Into<String>,
        measure: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            measure: measure.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.amount, self.measure, self.name)
    }
}

/// Parses the `amount;measure;name` row used both on disk and on the command line.
impl FromStr for Ingredient {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(';').collect();
        match fields.as_slice() {
            [amount, measure, name] => Ok(Ingredient::new(*amount, *measure, *name)),
            _ => Err(RecipeError::InvalidRecipe(format!(
                "expected 3 fields separated by ';', found {} in \"{}\"",
                fields.len(),
                s
            ))),
        }
    }
}

/// A named dish. The name is the identity: two recipes with the same name are
/// the same recipe as far as the book is concerned.
///
/// Field order matters for the derived `Ord`: recipes sort by name first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Recipe {
    name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecipeError::InvalidRecipe(
                "recipe name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// True when `other` refers to the same recipe, regardless of contents.
    pub fn is_same_recipe(&self, other: &Recipe) -> bool {
        self.name == other.name
    }
}
