use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeSource;

use super::helpers::recipes_by_selectors;

/// Deletes the selected recipes and saves.
///
/// Every selector is resolved before anything is removed, then recipes are
/// removed by position from the back so one removal cannot shift the next.
/// Of two recipes sharing a name, the selected position is the one that goes.
pub fn run<S: RecipeSource>(
    book: &mut RecipeBook<S>,
    selectors: &[RecipeSelector],
) -> Result<CmdResult> {
    let mut resolved = recipes_by_selectors(book, selectors)?;
    resolved.sort_by(|a, b| b.index.cmp(&a.index));
    resolved.dedup_by_key(|dr| dr.index);

    for dr in &resolved {
        if let Some(position) = dr.index.position() {
            book.delete_at(position)?;
        }
    }

    let mut result = CmdResult::default();
    for dr in resolved.into_iter().rev() {
        result.add_message(CmdMessage::success(format!(
            "Recipe deleted ({}): {}",
            dr.index,
            dr.recipe.name()
        )));
        result.affected_recipes.push(dr.recipe);
    }

    book.save()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::index::DisplayIndex;
    use crate::store::memory::InMemorySource;

    fn book() -> RecipeBook<InMemorySource> {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nAle\n[Recept]\nBun\n[Recept]\nCake\n",
        ));
        book.load().unwrap();
        assert_eq!(book.len(), 3);
        book
    }

    #[test]
    fn deletes_several_indexes_without_shifting() {
        let mut book = book();
        let result = run(
            &mut book,
            &[
                RecipeSelector::Index(DisplayIndex(1)),
                RecipeSelector::Index(DisplayIndex(2)),
            ],
        )
        .unwrap();

        assert_eq!(result.affected_recipes.len(), 2);
        assert_eq!(result.affected_recipes[0].name(), "Ale");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get_at(0).unwrap().name(), "Cake");
        assert_eq!(
            book.source().text(),
            "[Recept]\nCake\n[Ingredienser]\n[Instruktioner]\n"
        );
    }

    #[test]
    fn deletes_by_name() {
        let mut book = book();
        run(&mut book, &[RecipeSelector::Name("Bun".into())]).unwrap();
        assert_eq!(book.find("Bun"), None);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn repeated_selector_deletes_once() {
        let mut book = book();
        let result = run(
            &mut book,
            &[
                RecipeSelector::Index(DisplayIndex(2)),
                RecipeSelector::Name("Bun".into()),
            ],
        )
        .unwrap();
        assert_eq!(result.affected_recipes.len(), 1);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn index_removes_that_position_among_duplicate_names() {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nSoup\n[Instruktioner]\nBoil\n[Recept]\nSoup\n[Instruktioner]\nStir\n",
        ));
        book.load().unwrap();

        run(&mut book, &[RecipeSelector::Index(DisplayIndex(2))]).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.get_at(0).unwrap().instructions, vec!["Boil"]);
    }

    #[test]
    fn out_of_range_deletes_nothing() {
        let mut book = book();
        let err = run(
            &mut book,
            &[
                RecipeSelector::Index(DisplayIndex(1)),
                RecipeSelector::Index(DisplayIndex(4)),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, RecipeError::Api(_)));
        assert_eq!(book.len(), 3);
        assert!(!book.is_dirty());
    }
}
