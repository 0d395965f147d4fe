use crate::book::RecipeBook;
use crate::codec;
use crate::commands::{CmdMessage, CmdResult, NewRecipe};
use crate::error::{RecipeError, Result};
use crate::model::{Ingredient, Recipe};
use crate::store::RecipeSource;

/// Builds a recipe from user input, adds it to the book and saves.
///
/// The book itself does not enforce unique names, but a duplicate would make
/// name-based selection ambiguous, so it is refused here. Names and steps the
/// reader could not get back out of the file are refused as well.
pub fn run<S: RecipeSource>(book: &mut RecipeBook<S>, input: NewRecipe) -> Result<CmdResult> {
    let name = input.name.trim().to_string();
    if book.find(&name).is_some() {
        return Err(RecipeError::Api(format!(
            "A recipe named \"{}\" already exists",
            name
        )));
    }

    if let Some(reason) = codec::unreadable_reason(&name) {
        return Err(RecipeError::InvalidRecipe(format!(
            "name \"{}\" {}",
            name, reason
        )));
    }
    let mut recipe = Recipe::new(name)?;

    recipe.ingredients = input
        .ingredients
        .iter()
        .map(|row| {
            if row.contains(['\n', '\r']) {
                return Err(RecipeError::InvalidRecipe(format!(
                    "ingredient \"{}\" contains a line break",
                    row
                )));
            }
            row.parse::<Ingredient>()
        })
        .collect::<Result<Vec<_>>>()?;

    recipe.instructions = input
        .instructions
        .into_iter()
        .filter(|step| !step.trim().is_empty())
        .collect();
    if let Some((step, reason)) = recipe
        .instructions
        .iter()
        .find_map(|step| codec::unreadable_reason(step).map(|reason| (step, reason)))
    {
        return Err(RecipeError::InvalidRecipe(format!(
            "step \"{}\" {}",
            step, reason
        )));
    }

    book.add(recipe.clone());
    book.save()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe added: {} ({} ingredients, {} steps)",
        recipe.name(),
        recipe.ingredients.len(),
        recipe.instructions.len()
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemorySource;

    fn pancakes() -> NewRecipe {
        NewRecipe {
            name: "Pancakes".into(),
            ingredients: vec!["2;dl;flour".into(), "1;st;egg".into()],
            instructions: vec!["Mix".into(), "Fry".into()],
        }
    }

    #[test]
    fn adds_and_saves() {
        let mut book = RecipeBook::new(InMemorySource::new());
        let result = run(&mut book, pancakes()).unwrap();

        assert_eq!(result.affected_recipes.len(), 1);
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.source().text(),
            "[Recept]\nPancakes\n[Ingredienser]\n2;dl;flour\n1;st;egg\n[Instruktioner]\nMix\nFry\n"
        );
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut book = RecipeBook::new(InMemorySource::new());
        run(&mut book, pancakes()).unwrap();
        assert!(matches!(
            run(&mut book, pancakes()),
            Err(RecipeError::Api(_))
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn rejects_bad_ingredient_without_touching_book() {
        let mut book = RecipeBook::new(InMemorySource::new());
        let mut input = pancakes();
        input.ingredients.push("2;cups".into());

        assert!(matches!(
            run(&mut book, input),
            Err(RecipeError::InvalidRecipe(_))
        ));
        assert!(book.is_empty());
        assert_eq!(book.source().text(), "");
    }

    fn assert_rejected(input: NewRecipe) {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nAlpha\n[Instruktioner]\nStir\n",
        ));
        book.load().unwrap();

        assert!(matches!(
            run(&mut book, input),
            Err(RecipeError::InvalidRecipe(_))
        ));
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.source().text(),
            "[Recept]\nAlpha\n[Instruktioner]\nStir\n"
        );
    }

    #[test]
    fn rejects_one_character_name() {
        assert_rejected(NewRecipe {
            name: "X".into(),
            ingredients: vec!["2;dl;milk".into()],
            instructions: vec!["Heat".into()],
        });
    }

    #[test]
    fn rejects_marker_as_name() {
        assert_rejected(NewRecipe {
            name: "[Ingredienser]".into(),
            ..NewRecipe::default()
        });
    }

    #[test]
    fn rejects_name_with_line_break() {
        assert_rejected(NewRecipe {
            name: "Hot\nChocolate".into(),
            ..NewRecipe::default()
        });
    }

    #[test]
    fn rejects_one_character_step() {
        let mut input = pancakes();
        input.instructions.push("X".into());
        assert_rejected(input);
    }

    #[test]
    fn rejects_marker_as_step() {
        let mut input = pancakes();
        input.instructions.push("[Recept]".into());
        assert_rejected(input);
    }

    #[test]
    fn rejects_step_with_line_break() {
        let mut input = pancakes();
        input.instructions.push("Mix\r\nFry".into());
        assert_rejected(input);
    }

    #[test]
    fn rejects_ingredient_with_line_break() {
        let mut input = pancakes();
        input.ingredients.push("1;tsp;salt\n[Recept]".into());
        assert_rejected(input);
    }

    #[test]
    fn added_recipe_reads_back_intact() {
        let mut book = RecipeBook::new(InMemorySource::with_text(
            "[Recept]\nAlpha\n[Instruktioner]\nStir\n",
        ));
        book.load().unwrap();
        run(&mut book, pancakes()).unwrap();

        book.load().unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get_at(0).unwrap().instructions, vec!["Stir"]);
        assert_eq!(book.get_at(1).unwrap().instructions, vec!["Mix", "Fry"]);
    }

    #[test]
    fn rejects_blank_name() {
        let mut book = RecipeBook::new(InMemorySource::new());
        let input = NewRecipe {
            name: "   ".into(),
            ..NewRecipe::default()
        };
        assert!(matches!(
            run(&mut book, input),
            Err(RecipeError::InvalidRecipe(_))
        ));
    }
}
