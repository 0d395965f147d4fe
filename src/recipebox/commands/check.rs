use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecipeSource;
use std::collections::BTreeMap;

/// Re-reads the recipe file and reports on its contents.
///
/// A format error is returned as-is so the caller sees the offending line.
pub fn run<S: RecipeSource>(book: &mut RecipeBook<S>) -> Result<CmdResult> {
    book.load()?;
    let recipes = book.get_all();
    let mut result = CmdResult::default();

    let ingredients: usize = recipes.iter().map(|r| r.ingredients.len()).sum();
    let steps: usize = recipes.iter().map(|r| r.instructions.len()).sum();
    result.add_message(CmdMessage::success(format!(
        "{} is valid: {} recipes, {} ingredients, {} steps",
        book.source().location(),
        recipes.len(),
        ingredients,
        steps
    )));

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for recipe in &recipes {
        *counts.entry(recipe.name()).or_default() += 1;
    }
    for (name, count) in counts.iter().filter(|(_, c)| **c > 1) {
        result.add_message(CmdMessage::warning(format!(
            "\"{}\" appears {} times; only the first can be selected by name",
            name, count
        )));
    }

    for recipe in recipes.iter().filter(|r| r.instructions.is_empty()) {
        result.add_message(CmdMessage::info(format!(
            "\"{}\" has no instructions",
            recipe.name()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RecipeError;
    use crate::store::memory::InMemorySource;

    #[test]
    fn reports_totals() {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nPancakes\n[Ingredienser]\n2;dl;flour\n1;st;egg\n[Instruktioner]\nMix\nFry\n",
        ));
        let result = run(&mut book).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0]
            .content
            .contains("1 recipes, 2 ingredients, 2 steps"));
    }

    #[test]
    fn warns_about_duplicates_and_empty_instructions() {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nSoup\n[Instruktioner]\nBoil\n[Recept]\nSoup\n[Instruktioner]\nStir\n[Recept]\nToast\n",
        ));
        let result = run(&mut book).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning) && m.content.contains("2 times")));
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Info) && m.content.contains("Toast")));
    }

    #[test]
    fn surfaces_format_errors() {
        let mut book = RecipeBook::new(InMemorySource::with_text("Soup\n"));
        assert!(matches!(run(&mut book), Err(RecipeError::Format { .. })));
    }
}
