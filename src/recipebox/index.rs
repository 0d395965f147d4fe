//! # Display Indexes
//!
//! The book addresses recipes by zero-based position. Users see and type
//! one-based numbers, so the command layer converts at the boundary:
//! `DisplayIndex(1)` is position 0.
//!
//! A user selects recipes either by number or by name. Input that is not a
//! number at all is treated as a single name, so `view Apple pie` works without
//! quoting.

use crate::model::Recipe;
use std::fmt;
use std::str::FromStr;

/// A one-based, user-facing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// Zero-based position in the book. `None` for `0`, which is never valid.
    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(DisplayIndex)
            .map_err(|_| format!("Invalid index format: {}", s))
    }
}

/// A user input to select a recipe, either by its index or by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSelector {
    Index(DisplayIndex),
    Name(String),
}

impl fmt::Display for RecipeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSelector::Index(idx) => write!(f, "{}", idx),
            RecipeSelector::Name(n) => write!(f, "\"{}\"", n),
        }
    }
}

/// Parses raw inputs into selectors.
///
/// If every input is a number they are all indexes; otherwise the inputs are
/// joined with spaces into one name.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<RecipeSelector> {
    let all_indexes: Result<Vec<DisplayIndex>, _> = inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect();

    if let Ok(indexes) = all_indexes {
        return indexes.into_iter().map(RecipeSelector::Index).collect();
    }

    let name = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    vec![RecipeSelector::Name(name)]
}

#[derive(Debug, Clone)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub index: DisplayIndex,
}

/// Pairs recipes with their one-based display index, in book order.
pub fn index_recipes(recipes: Vec<Recipe>) -> Vec<DisplayRecipe> {
    recipes
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            recipe,
            index: DisplayIndex(i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_indexes() {
        let selectors = parse_selectors(&["1", "3"]);
        assert_eq!(
            selectors,
            vec![
                RecipeSelector::Index(DisplayIndex(1)),
                RecipeSelector::Index(DisplayIndex(3))
            ]
        );
    }

    #[test]
    fn words_become_one_name() {
        let selectors = parse_selectors(&["Apple", "pie"]);
        assert_eq!(selectors, vec![RecipeSelector::Name("Apple pie".into())]);
    }

    #[test]
    fn mixed_input_is_a_name() {
        let selectors = parse_selectors(&["Day", "2", "soup"]);
        assert_eq!(selectors, vec![RecipeSelector::Name("Day 2 soup".into())]);
    }

    #[test]
    fn zero_has_no_position() {
        assert_eq!(DisplayIndex(0).position(), None);
        assert_eq!(DisplayIndex(1).position(), Some(0));
    }

    #[test]
    fn indexes_are_one_based() {
        let indexed = index_recipes(vec![
            Recipe::new("A").unwrap(),
            Recipe::new("B").unwrap(),
        ]);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[1].recipe.name(), "B");
        assert_eq!(indexed[1].index, DisplayIndex(2));
    }
}
