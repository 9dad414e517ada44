//! Error types for qmc-pos

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// qmc-pos errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("At least one variable is required")]
    NoVariables,

    #[error("Too many variables: {count} given, at most {max} supported")]
    TooManyVariables { count: usize, max: usize },

    #[error("Invalid variable name '{0}': variables must be single letters")]
    InvalidVariableName(char),

    #[error("Duplicate variable name '{0}'")]
    DuplicateVariable(char),

    #[error("Minterm {value} is out of range for a domain of {domain} values")]
    MintermOutOfRange { value: u32, domain: u32 },

    /// The greedy cover ran out of prime implicants before every maxterm was
    /// covered. Indicates a defect in the combination stage.
    #[error("Internal inconsistency: no prime implicant covers {uncovered:?}")]
    CoverageExhausted { uncovered: Vec<u32> },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for errors raised while validating the caller's input, before
    /// any minimization stage runs.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::NoVariables
                | Error::TooManyVariables { .. }
                | Error::InvalidVariableName(_)
                | Error::DuplicateVariable(_)
                | Error::MintermOutOfRange { .. }
        )
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
