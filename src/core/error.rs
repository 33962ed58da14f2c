use plotters::drawing::DrawingAreaErrorKind;
use std::fmt;

/// Error types for bookviz operations
#[derive(Debug)]
pub enum BookVizError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Input CSV does not exist
    MissingInput(String),

    /// CSV reading error
    Csv(csv::Error),

    /// Chart drawing or encoding error
    Render(String),

    /// JSON serialization error (dashboard chart configs)
    Serialization(serde_json::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for BookVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookVizError::Io(err) => write!(f, "IO error: {err}"),
            BookVizError::MissingInput(path) => write!(f, "Input file not found: {path}"),
            BookVizError::Csv(err) => write!(f, "CSV error: {err}"),
            BookVizError::Render(msg) => write!(f, "Rendering error: {msg}"),
            BookVizError::Serialization(err) => write!(f, "Serialization error: {err}"),
            BookVizError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BookVizError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for BookVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookVizError::Io(err) => Some(err),
            BookVizError::Csv(err) => Some(err),
            BookVizError::Serialization(err) => Some(err),
            BookVizError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BookVizError {
    fn from(err: std::io::Error) -> Self {
        BookVizError::Io(err)
    }
}

impl From<csv::Error> for BookVizError {
    fn from(err: csv::Error) -> Self {
        BookVizError::Csv(err)
    }
}

impl From<serde_json::Error> for BookVizError {
    fn from(err: serde_json::Error) -> Self {
        BookVizError::Serialization(err)
    }
}

impl From<toml::de::Error> for BookVizError {
    fn from(err: toml::de::Error) -> Self {
        BookVizError::TomlParsing(err)
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for BookVizError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        BookVizError::Render(err.to_string())
    }
}

/// Type alias for Results using BookVizError
pub type Result<T> = std::result::Result<T, BookVizError>;
