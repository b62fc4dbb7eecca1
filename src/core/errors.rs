use thiserror::Error;

use super::models::WordType;

pub const NOT_FOUND_MESSAGE: &str = "Could not find a definition for this word.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Word count {0} is not one of the offered choices")]
    InvalidWordCount(usize),

    #[error("Word list for {0:?} is empty")]
    EmptyWordList(WordType),

    #[error("No definition found for \"{0}\"")]
    DefinitionNotFound(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{0}")]
    Custom(String),
}

impl WizardError {
    /// Text shown in the definition panel when a lookup fails.
    pub fn user_message(&self) -> String {
        match self {
            WizardError::DefinitionNotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            other => {
                let text = other.to_string();
                if text.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    text
                }
            }
        }
    }
}

impl From<std::io::Error> for WizardError {
    fn from(error: std::io::Error) -> Self {
        WizardError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WizardError {
    fn from(error: reqwest::Error) -> Self {
        WizardError::Reqwest(Box::new(error))
    }
}
