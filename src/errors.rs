//! Shared error types for classlens

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for classlens operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed interactive command
    #[error("Invalid command \"{input}\": {message}")]
    CommandParse {
        input: String,
        message: String,
        offset: usize,
    },

    /// Missing or invalid batch arguments, or an unusable config file
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A source file that could not be turned into a compilation unit
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// The tree-sitter grammar could not be loaded into a parser
    #[error("Parser setup failed: {0}")]
    ParserSetup(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a command parse error pointing at a byte offset of the input
    pub fn command_parse(input: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self::CommandParse {
            input: input.into(),
            message: message.into(),
            offset,
        }
    }

    /// Create a parse error for a source file
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
