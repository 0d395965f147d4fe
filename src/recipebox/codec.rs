//! # Recipe Text Format
//!
//! Recipes live in a single line-oriented text file. Three literal marker lines
//! switch the reader between sections; every other line is interpreted by the
//! section it appears in:
//!
//! ```text
//! [Recept]
//! Pancakes
//! [Ingredienser]
//! 2;dl;flour
//! 1;st;egg
//! [Instruktioner]
//! Mix
//! Fry
//! [Recept]
//! ...
//! ```
//!
//! Lines of one character or less are ignored wherever they appear. Ingredient
//! rows are `amount;measure;name` and must have exactly three fields.
//!
//! Reading is all-or-nothing: the first malformed line aborts the parse with a
//! [`RecipeError::Format`] carrying its line number.

use crate::error::{RecipeError, Result};
use crate::model::{Ingredient, Recipe};
use log::debug;
use std::io::{BufRead, Write};

pub const RECIPE_MARKER: &str = "[Recept]";
pub const INGREDIENTS_MARKER: &str = "[Ingredienser]";
pub const INSTRUCTIONS_MARKER: &str = "[Instruktioner]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Indefinite,
    NewRecipe,
    Ingredients,
    Instructions,
}

impl Mode {
    fn for_marker(line: &str) -> Option<Mode> {
        match line {
            RECIPE_MARKER => Some(Mode::NewRecipe),
            INGREDIENTS_MARKER => Some(Mode::Ingredients),
            INSTRUCTIONS_MARKER => Some(Mode::Instructions),
            _ => None,
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().count() <= 1
}

/// Why `text` would not survive a write followed by a read as a single
/// content line, or `None` if it would.
pub fn unreadable_reason(text: &str) -> Option<&'static str> {
    if text.contains(['\n', '\r']) {
        Some("contains a line break")
    } else if is_blank(text) {
        Some("is one character or less and would be skipped when read back")
    } else if Mode::for_marker(text).is_some() {
        Some("is a section marker")
    } else {
        None
    }
}

/// Reads every recipe from `reader`, sorted by name.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Recipe>> {
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut mode = Mode::Indefinite;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        if is_blank(&line) {
            continue;
        }
        if let Some(next) = Mode::for_marker(&line) {
            mode = next;
            continue;
        }

        match mode {
            Mode::Indefinite => {
                return Err(RecipeError::format(line_no, "no known section found"));
            }
            Mode::NewRecipe => {
                let recipe =
                    Recipe::new(line).map_err(|e| RecipeError::format(line_no, e.to_string()))?;
                recipes.push(recipe);
            }
            Mode::Ingredients => {
                let ingredient = parse_ingredient(&line, line_no)?;
                current_recipe(&mut recipes, line_no)?
                    .ingredients
                    .push(ingredient);
            }
            Mode::Instructions => {
                current_recipe(&mut recipes, line_no)?
                    .instructions
                    .push(line);
            }
        }
    }

    recipes.sort_by(|a, b| a.name().cmp(b.name()));
    debug!("parsed {} recipes", recipes.len());
    Ok(recipes)
}

pub fn parse_str(input: &str) -> Result<Vec<Recipe>> {
    parse(input.as_bytes())
}

fn parse_ingredient(line: &str, line_no: usize) -> Result<Ingredient> {
    let fields: Vec<&str> = line.split(';').collect();
    match fields.as_slice() {
        [amount, measure, name] => Ok(Ingredient::new(*amount, *measure, *name)),
        _ => Err(RecipeError::format(
            line_no,
            format!(
                "ingredient row needs 3 ';'-separated fields, found {}: \"{}\"",
                fields.len(),
                line
            ),
        )),
    }
}

fn current_recipe(recipes: &mut [Recipe], line_no: usize) -> Result<&mut Recipe> {
    recipes
        .last_mut()
        .ok_or_else(|| RecipeError::format(line_no, "no recipe to attach this line to"))
}

/// Writes `recipes` in the given order. Nothing follows the last recipe.
pub fn write<W: Write>(mut writer: W, recipes: &[Recipe]) -> Result<()> {
    for recipe in recipes {
        writeln!(writer, "{}", RECIPE_MARKER)?;
        writeln!(writer, "{}", recipe.name())?;
        writeln!(writer, "{}", INGREDIENTS_MARKER)?;
        for ingredient in &recipe.ingredients {
            writeln!(writer, "{}", ingredient)?;
        }
        writeln!(writer, "{}", INSTRUCTIONS_MARKER)?;
        for step in &recipe.instructions {
            writeln!(writer, "{}", step)?;
        }
    }
    writer.flush()?;
    debug!("wrote {} recipes", recipes.len());
    Ok(())
}

pub fn to_string(recipes: &[Recipe]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write(&mut buf, recipes);
    String::from_utf8_lossy(&buf).into_owned()
}
