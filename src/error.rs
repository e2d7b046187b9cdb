use stylemap::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error in {path}: {source}")]
    Syntax {
        path: String,
        #[source]
        source: SyntaxError,
    },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
