use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version)]
#[command(about = "Keep your recipes in one plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recipe file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Only show recipes whose name or ingredients contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one or more recipes in full
    #[command(alias = "v")]
    View {
        /// Recipe numbers (e.g. 1 3) or a recipe name
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Add a recipe
    #[command(alias = "n")]
    Add {
        /// Name of the recipe
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Ingredient as amount;measure;name (repeatable)
        #[arg(short = 'i', long = "ingredient", value_name = "ROW")]
        ingredients: Vec<String>,

        /// Instruction step, in cooking order (repeatable)
        #[arg(short = 's', long = "step", value_name = "TEXT")]
        steps: Vec<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Recipe numbers (e.g. 1 3) or a recipe name
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Validate the recipe file and summarize its contents
    Check,

    /// Print the path of the recipe file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., recipe-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
