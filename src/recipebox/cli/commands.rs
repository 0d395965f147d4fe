//! # CLI Layer
//!
//! One possible client of the recipebox library. This is the only place that
//! knows about the terminal, environment variables, and process exit codes.
//!
//! Every invocation is a short session: build the context, load the book, run
//! one command (mutating commands save before returning), print the result.

use super::render::{
    print_messages, render_config, render_full_recipes, render_recipe_list, terminal_width,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use log::{info, warn};
use recipebox::api::{ConfigAction, NewRecipe, RecipeApi};
use recipebox::config::RecipeConfig;
use recipebox::error::{RecipeError, Result};
use recipebox::store::fs::FileSource;
use std::path::PathBuf;

/// Overrides the data directory (config and default recipe file location).
pub const HOME_ENV: &str = "RECIPEBOX_HOME";
/// Overrides the recipe file, like `--file`.
pub const FILE_ENV: &str = "RECIPEBOX_FILE";

struct AppContext {
    api: RecipeApi<FileSource>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::View { selectors }) => handle_view(&mut ctx, selectors),
        Some(Commands::Add {
            name,
            ingredients,
            steps,
        }) => handle_add(&mut ctx, name, ingredients, steps),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Check) => handle_check(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "recipebox", "recipebox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;

    let recipe_file = match (&cli.file, std::env::var_os(FILE_ENV)) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => {
            let config = RecipeConfig::load(&data_dir).unwrap_or_else(|e| {
                warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
                RecipeConfig::default()
            });
            config.recipe_path(&data_dir)
        }
    };

    let mut api = RecipeApi::new(FileSource::new(recipe_file), data_dir);
    api.subscribe(|event| info!("recipe book {}", event));

    Ok(AppContext { api })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.list_recipes(search.as_deref())?;
    print!(
        "{}",
        render_recipe_list(&result.listed_recipes, terminal_width())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.view_recipes(&selectors)?;
    print!("{}", render_full_recipes(&result.listed_recipes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: Vec<String>,
    ingredients: Vec<String>,
    steps: Vec<String>,
) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.add_recipe(NewRecipe {
        name: name.join(" "),
        ingredients,
        instructions: steps,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.delete_recipes(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.location());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
