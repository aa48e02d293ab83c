use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Interpolation errors
    #[error("UNTERMINATED_DELIMITER: '{delimiter}' opened at offset {offset} is never closed")]
    UnterminatedDelimiter { delimiter: char, offset: usize },

    #[error("INCLUDE_READ_FAILED: cannot read '{}': {source}", .path.display())]
    IncludeReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("INCLUDE_LIMIT_EXCEEDED: more than {limit} file inclusions (cyclic include?)")]
    IncludeLimitExceeded { limit: usize },

    // Template document errors
    #[error("TEMPLATE_PARSE_FAILED: {0}")]
    TemplateParseFailed(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::TemplateParseFailed(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
