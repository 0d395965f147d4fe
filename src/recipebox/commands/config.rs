use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use crate::store::fs::FileSource;
use crate::store::RecipeSource;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Settings that `config` can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RecipeFile,
}

impl FromStr for ConfigKey {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "recipe-file" => Ok(ConfigKey::RecipeFile),
            _ => Err(RecipeError::Api(format!(
                "Unknown config key: {} (known keys: recipe-file)",
                s
            ))),
        }
    }
}

impl ConfigKey {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::RecipeFile => "recipe-file",
        }
    }

    fn value(&self, config: &RecipeConfig) -> String {
        match self {
            ConfigKey::RecipeFile => config.recipe_file.display().to_string(),
        }
    }

    /// Validates `value` and stores it, returning a note for the user.
    fn apply(&self, config: &mut RecipeConfig, config_dir: &Path, value: &str) -> Result<String> {
        match self {
            ConfigKey::RecipeFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(RecipeError::Api("recipe-file cannot be empty".to_string()));
                }
                let candidate = RecipeConfig {
                    recipe_file: PathBuf::from(value),
                };
                let path = candidate.recipe_path(config_dir);
                if path.is_dir() {
                    return Err(RecipeError::Api(format!(
                        "{} is a directory, not a recipe file",
                        path.display()
                    )));
                }

                // An existing file has to be readable before we point at it.
                let note = if path.exists() {
                    let count = FileSource::new(path).load_recipes()?.len();
                    format!("{} recipes", count)
                } else {
                    "new file".to_string()
                };
                *config = candidate;
                Ok(note)
            }
        }
    }
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RecipeConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let key: ConfigKey = key.parse()?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(key.value(&config)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let key: ConfigKey = key.parse()?;
            let note = key.apply(&mut config, config_dir, &value)?;
            config.save(config_dir)?;

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "{} set to {} ({})",
                key.name(),
                key.value(&config),
                note
            )));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("recipe-file".into(), "book.txt".into()),
        )
        .unwrap();
        assert_eq!(
            result.messages[0].content,
            "recipe-file set to book.txt (new file)"
        );

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(
            shown.config.unwrap().recipe_file,
            PathBuf::from("book.txt")
        );

        let key = run(dir.path(), ConfigAction::ShowKey("recipe-file".into())).unwrap();
        assert_eq!(key.messages[0].content, "book.txt");
    }

    #[test]
    fn existing_file_is_counted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mine.txt"), "[Recept]\nSoup\n[Recept]\nBread\n").unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("recipe-file".into(), "mine.txt".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.ends_with("(2 recipes)"));
    }

    #[test]
    fn unreadable_file_is_refused() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.txt"), "Soup\n").unwrap();

        let err = run(
            dir.path(),
            ConfigAction::Set("recipe-file".into(), "broken.txt".into()),
        )
        .unwrap_err();
        assert!(matches!(err, RecipeError::Format { line: 1, .. }));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn empty_value_and_directory_are_refused() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        for value in ["  ", "sub"] {
            let err = run(
                dir.path(),
                ConfigAction::Set("recipe-file".into(), value.into()),
            )
            .unwrap_err();
            assert!(matches!(err, RecipeError::Api(_)));
        }
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).is_err());
        assert!(run(dir.path(), ConfigAction::ShowKey("colour".into())).is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
