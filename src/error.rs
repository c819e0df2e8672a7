use crate::types::scoring::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("missing category in assessment results: {0}")]
    MissingCategory(Category),

    #[error("rating out of range for {category}.{key}: {value} (expected 0-10)")]
    RatingOutOfRange {
        category: Category,
        key: String,
        value: f64,
    },

    #[error("rating is not a finite number for {category}.{key}")]
    InvalidRating { category: Category, key: String },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("responses parse error: {0}")]
    ResponsesParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssessError {
    /// Errors caused by the caller's assessment data rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AssessError::MissingCategory(_)
                | AssessError::RatingOutOfRange { .. }
                | AssessError::InvalidRating { .. }
                | AssessError::ResponsesParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssessError>;
