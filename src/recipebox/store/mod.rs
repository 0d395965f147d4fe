//! # Storage Layer
//!
//! The [`RecipeSource`] trait is the seam between the in-memory book and
//! wherever the recipe text lives. The book never touches the filesystem
//! itself; it asks its source for a whole collection and hands a whole
//! collection back.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: Production storage, a single text file whose path is
//!   fixed at construction. Saving truncates and rewrites the file.
//! - [`memory::InMemorySource`]: Holds the serialized text in memory for tests,
//!   and can simulate read and write failures.
//!
//! Both go through [`crate::codec`], so the in-memory source exercises the
//! exact same format as the file.

use crate::error::Result;
use crate::model::Recipe;

pub mod fs;
pub mod memory;

pub trait RecipeSource {
    /// Read the full collection, sorted by name.
    fn load_recipes(&self) -> Result<Vec<Recipe>>;

    /// Replace the stored collection with `recipes`, in the given order.
    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()>;

    /// Human-readable location of the data (a path for file sources).
    fn location(&self) -> String;
}
