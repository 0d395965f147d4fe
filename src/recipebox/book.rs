//! # Recipe Book
//!
//! [`RecipeBook`] owns the in-memory collection. It is the only place that
//! mutates recipes; everything else gets clones.
//!
//! ## Dirty Flag
//!
//! - `load` replaces the whole collection and clears the flag.
//! - `add`, `delete` and `delete_at` set it.
//! - `save` also *sets* it. This mirrors the long-standing behaviour of the
//!   recipe file tool and is pinned by `save_leaves_book_marked_dirty`; change
//!   both together if it is ever corrected.
//!
//! ## Change Notifications
//!
//! Callers register callbacks with [`RecipeBook::subscribe`]. After every
//! successful mutation each callback is invoked exactly once, synchronously,
//! before the mutating call returns. Failed operations notify nobody and leave
//! the collection as it was.

use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use crate::store::RecipeSource;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// What changed in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    Loaded { count: usize },
    Saved { count: usize },
    Added { name: String },
    Deleted { name: String },
}

impl fmt::Display for BookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookEvent::Loaded { count } => write!(f, "loaded {} recipes", count),
            BookEvent::Saved { count } => write!(f, "saved {} recipes", count),
            BookEvent::Added { name } => write!(f, "added \"{}\"", name),
            BookEvent::Deleted { name } => write!(f, "deleted \"{}\"", name),
        }
    }
}

/// Handle returned by [`RecipeBook::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&BookEvent)>;

pub struct RecipeBook<S: RecipeSource> {
    source: S,
    recipes: Vec<Recipe>,
    dirty: bool,
    subscribers: BTreeMap<SubscriptionId, Callback>,
    next_subscription: u64,
}

impl<S: RecipeSource> RecipeBook<S> {
    /// Creates an empty, clean book. Nothing is read until [`load`](Self::load).
    pub fn new(source: S) -> Self {
        Self {
            source,
            recipes: Vec::new(),
            dirty: false,
            subscribers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    pub fn get_at(&self, index: usize) -> Result<Recipe> {
        self.recipes
            .get(index)
            .cloned()
            .ok_or(RecipeError::IndexOutOfRange {
                index,
                len: self.recipes.len(),
            })
    }

    /// Position of the recipe called `name`, if any.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.name() == name)
    }

    /// Appends `recipe`. Names are not checked for uniqueness here.
    pub fn add(&mut self, recipe: Recipe) {
        let name = recipe.name().to_string();
        self.recipes.push(recipe);
        self.dirty = true;
        self.notify(&BookEvent::Added { name });
    }

    /// Removes the stored recipe with the same name as `recipe`.
    pub fn delete(&mut self, recipe: &Recipe) -> Result<()> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.is_same_recipe(recipe))
            .ok_or_else(|| RecipeError::RecipeNotFound(recipe.name().to_string()))?;
        self.remove(index);
        Ok(())
    }

    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        if index >= self.recipes.len() {
            return Err(RecipeError::IndexOutOfRange {
                index,
                len: self.recipes.len(),
            });
        }
        self.remove(index);
        Ok(())
    }

    fn remove(&mut self, index: usize) {
        let removed = self.recipes.remove(index);
        self.dirty = true;
        self.notify(&BookEvent::Deleted {
            name: removed.name().to_string(),
        });
    }

    /// Replaces the collection with what the source holds.
    pub fn load(&mut self) -> Result<()> {
        let recipes = self.source.load_recipes()?;
        debug!(
            "replacing {} recipes with {} from {}",
            self.recipes.len(),
            recipes.len(),
            self.source.location()
        );
        self.recipes = recipes;
        self.dirty = false;
        let count = self.recipes.len();
        self.notify(&BookEvent::Loaded { count });
        Ok(())
    }

    /// Writes the collection, in its current order, to the source.
    pub fn save(&mut self) -> Result<()> {
        self.source.save_recipes(&self.recipes)?;
        self.dirty = true;
        let count = self.recipes.len();
        self.notify(&BookEvent::Saved { count });
        Ok(())
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BookEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    fn notify(&mut self, event: &BookEvent) {
        debug!("book changed: {}", event);
        for callback in self.subscribers.values_mut() {
            callback(event);
        }
    }
}
