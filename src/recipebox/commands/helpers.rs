use crate::book::RecipeBook;
use crate::error::{RecipeError, Result};
use crate::index::{index_recipes, DisplayIndex, DisplayRecipe, RecipeSelector};
use crate::store::RecipeSource;

pub fn indexed_recipes<S: RecipeSource>(book: &RecipeBook<S>) -> Vec<DisplayRecipe> {
    index_recipes(book.get_all())
}

/// Resolves each selector to a copy of the recipe it names.
///
/// Fails on the first selector that matches nothing; no partial result is
/// returned.
pub fn recipes_by_selectors<S: RecipeSource>(
    book: &RecipeBook<S>,
    selectors: &[RecipeSelector],
) -> Result<Vec<DisplayRecipe>> {
    selectors
        .iter()
        .map(|selector| match selector {
            RecipeSelector::Index(idx) => {
                let position = idx
                    .position()
                    .filter(|p| *p < book.len())
                    .ok_or_else(|| {
                        RecipeError::Api(format!(
                            "Recipe {} not found (there are {} recipes)",
                            idx,
                            book.len()
                        ))
                    })?;
                let recipe = book.get_at(position)?;
                Ok(DisplayRecipe {
                    recipe,
                    index: *idx,
                })
            }
            RecipeSelector::Name(name) => {
                let position = book
                    .find(name)
                    .ok_or_else(|| RecipeError::RecipeNotFound(name.clone()))?;
                Ok(DisplayRecipe {
                    recipe: book.get_at(position)?,
                    index: DisplayIndex(position + 1),
                })
            }
        })
        .collect()
}
