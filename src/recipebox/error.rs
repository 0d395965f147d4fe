use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("Index {index} is out of range (collection holds {len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RecipeError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        RecipeError::Format {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
