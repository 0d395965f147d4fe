//! # Rendering Module
//!
//! Turns command results into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without a terminal; `print_*` functions
//! write straight to stdout.
//!
//! Width calculations use display width rather than byte length so names with
//! accents (and the odd emoji) line up.

use colored::Colorize;
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::config::RecipeConfig;
use recipebox::index::DisplayRecipe;
use recipebox::model::Recipe;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fallback line width when stdout is not a terminal.
pub const LINE_WIDTH: usize = 80;
const SUMMARY_WIDTH: usize = 26;
const RULE: &str = "--------------------------------";

pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn summary(recipe: &Recipe) -> String {
    format!(
        "{} ingredients, {} steps",
        recipe.ingredients.len(),
        recipe.instructions.len()
    )
}

/// One line per recipe: index, name, and a right-aligned summary.
pub fn render_recipe_list(recipes: &[DisplayRecipe], line_width: usize) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n".to_string();
    }

    let idx_width = recipes
        .iter()
        .map(|dr| format!("{}.", dr.index).width())
        .max()
        .unwrap_or(2);

    let mut out = String::new();
    for dr in recipes {
        let idx_str = format!("{:>width$} ", format!("{}.", dr.index), width = idx_width);
        let fixed = 2 + idx_str.width() + 1 + SUMMARY_WIDTH;
        let available = line_width.saturating_sub(fixed).max(8);

        let name = truncate_to_width(dr.recipe.name(), available);
        let padding = " ".repeat(available.saturating_sub(name.width()));
        let summary = format!("{:>width$}", summary(&dr.recipe), width = SUMMARY_WIDTH);

        out.push_str(&format!(
            "  {}{}{} {}\n",
            idx_str.yellow(),
            name,
            padding,
            summary.dimmed()
        ));
    }
    out
}

/// Full recipes, separated by a blank line.
pub fn render_full_recipes(recipes: &[DisplayRecipe]) -> String {
    let mut out = String::new();
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dr.index).yellow(),
            dr.recipe.name().bold()
        ));
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&render_ingredients(&dr.recipe));
        out.push('\n');
        out.push_str(&render_instructions(&dr.recipe));
    }
    out
}

fn render_ingredients(recipe: &Recipe) -> String {
    let mut out = format!("{}\n", "Ingredients".underline());
    if recipe.ingredients.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
        return out;
    }

    let amount_width = recipe
        .ingredients
        .iter()
        .map(|i| i.amount.width())
        .max()
        .unwrap_or(0);
    let measure_width = recipe
        .ingredients
        .iter()
        .map(|i| i.measure.width())
        .max()
        .unwrap_or(0);

    for ing in &recipe.ingredients {
        let amount = pad_left(&ing.amount, amount_width);
        let measure = pad_right(&ing.measure, measure_width);
        let line = format!("  {} {}  {}", amount, measure, ing.name);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn render_instructions(recipe: &Recipe) -> String {
    let mut out = format!("{}\n", "Instructions".underline());
    if recipe.instructions.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
        return out;
    }
    for (n, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", format!("{}.", n + 1).dimmed(), step));
    }
    out
}

pub fn render_config(config: &RecipeConfig) -> String {
    format!("recipe-file = {}\n", config.recipe_file.display())
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
