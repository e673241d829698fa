/// Error types for loading translation data from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File or directory could not be read
    Io(String),
    /// File contents are not valid JSON
    Parse(String),
    /// JSON parsed but does not have the expected shape
    Shape(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "Read error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::Shape(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
