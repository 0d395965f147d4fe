use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECIPE_FILE: &str = "recipes.txt";

/// Configuration for recipebox, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Recipe file; relative paths are resolved against the data directory
    #[serde(default = "default_recipe_file")]
    pub recipe_file: PathBuf,
}

fn default_recipe_file() -> PathBuf {
    PathBuf::from(DEFAULT_RECIPE_FILE)
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            recipe_file: default_recipe_file(),
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    /// Absolute location of the recipe file for a given data directory.
    pub fn recipe_path(&self, data_dir: &Path) -> PathBuf {
        if self.recipe_file.is_absolute() {
            self.recipe_file.clone()
        } else {
            data_dir.join(&self.recipe_file)
        }
    }
}
