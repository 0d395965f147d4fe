use super::RecipeSource;
use crate::codec;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RecipeError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecipeSource for FileSource {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        // A file that was never saved is an empty collection, not an error.
        if !self.path.exists() {
            debug!("{} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(RecipeError::Io)?;
        let recipes = codec::parse(BufReader::new(file))?;
        info!("loaded {} recipes from {}", recipes.len(), self.path.display());
        Ok(recipes)
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.ensure_parent_dir()?;
        let file = File::create(&self.path).map_err(RecipeError::Io)?;
        codec::write(BufWriter::new(file), recipes)?;
        info!("saved {} recipes to {}", recipes.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
