use crate::book::RecipeBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Recipe;
use crate::store::RecipeSource;

use super::helpers::indexed_recipes;

/// Lists every recipe, or those whose name or ingredients contain `search`
/// (case-insensitive). Indexes always refer to the full list.
pub fn run<S: RecipeSource>(book: &RecipeBook<S>, search: Option<&str>) -> Result<CmdResult> {
    let recipes = indexed_recipes(book);
    let listed = match search {
        Some(term) => {
            let term = term.to_lowercase();
            recipes
                .into_iter()
                .filter(|dr| matches_term(&dr.recipe, &term))
                .collect()
        }
        None => recipes,
    };
    Ok(CmdResult::default().with_listed_recipes(listed))
}

fn matches_term(recipe: &Recipe, term: &str) -> bool {
    recipe.name().to_lowercase().contains(term)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(term))
}
