use crate::book::RecipeBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeSource;

use super::helpers::recipes_by_selectors;

pub fn run<S: RecipeSource>(
    book: &RecipeBook<S>,
    selectors: &[RecipeSelector],
) -> Result<CmdResult> {
    let recipes = recipes_by_selectors(book, selectors)?;
    Ok(CmdResult::default().with_listed_recipes(recipes))
}
