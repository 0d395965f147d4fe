//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the [`RecipeBook`], turns raw user input into selectors and
//! returns structured [`CmdResult`]s. No printing happens from here inward.
//!
//! `RecipeApi<S: RecipeSource>` is generic over the storage backend:
//! - Production: `RecipeApi<FileSource>`
//! - Testing: `RecipeApi<InMemorySource>`
//!
//! Nothing is read on construction; call [`RecipeApi::load`] before queries.

use crate::book::{BookEvent, RecipeBook, SubscriptionId};
use crate::commands;
use crate::error::Result;
use crate::index::parse_selectors;
use crate::store::RecipeSource;
use std::path::PathBuf;

pub struct RecipeApi<S: RecipeSource> {
    book: RecipeBook<S>,
    config_dir: PathBuf,
}

impl<S: RecipeSource> RecipeApi<S> {
    pub fn new(source: S, config_dir: PathBuf) -> Self {
        Self {
            book: RecipeBook::new(source),
            config_dir,
        }
    }

    pub fn load(&mut self) -> Result<()> {
        self.book.load()
    }

    pub fn list_recipes(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.book, search)
    }

    pub fn view_recipes<I: AsRef<str>>(&self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs);
        commands::view::run(&self.book, &selectors)
    }

    pub fn add_recipe(&mut self, input: NewRecipe) -> Result<CmdResult> {
        commands::add::run(&mut self.book, input)
    }

    pub fn delete_recipes<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs);
        commands::delete::run(&mut self.book, &selectors)
    }

    pub fn check(&mut self) -> Result<CmdResult> {
        commands::check::run(&mut self.book)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BookEvent) + 'static,
    {
        self.book.subscribe(callback)
    }

    pub fn location(&self) -> String {
        self.book.source().location()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewRecipe};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::store::memory::InMemorySource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api() -> RecipeApi<InMemorySource> {
        let source = InMemorySource::with_text(
            "[Recept]\nWaffles\n[Recept]\nApple pie\n[Recept]\nPancakes\n",
        );
        let mut api = RecipeApi::new(source, PathBuf::from("/nonexistent"));
        api.load().unwrap();
        api
    }

    #[test]
    fn view_by_number_or_words() {
        let api = api();
        let by_index = api.view_recipes(&["2"]).unwrap();
        assert_eq!(by_index.listed_recipes[0].recipe.name(), "Pancakes");

        let by_name = api.view_recipes(&["Apple", "pie"]).unwrap();
        assert_eq!(by_name.listed_recipes[0].recipe.name(), "Apple pie");
    }

    #[test]
    fn delete_dispatches_and_notifies() {
        let mut api = api();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        api.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        api.delete_recipes(&["3"]).unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                BookEvent::Deleted {
                    name: "Waffles".into()
                },
                BookEvent::Saved { count: 2 }
            ]
        );
        assert_eq!(api.list_recipes(None).unwrap().listed_recipes.len(), 2);
    }

    #[test]
    fn add_dispatches() {
        let mut api = api();
        api.add_recipe(NewRecipe {
            name: "Toast".into(),
            ingredients: vec!["1;slice;bread".into()],
            instructions: vec!["Toast it".into()],
        })
        .unwrap();
        assert_eq!(api.list_recipes(Some("bread")).unwrap().listed_recipes.len(), 1);
    }

    #[test]
    fn view_unknown_index_fails() {
        let api = api();
        assert!(matches!(
            api.view_recipes(&["9"]),
            Err(RecipeError::Api(_))
        ));
    }
}
