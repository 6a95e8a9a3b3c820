use thiserror::Error;

/// Result type for figpack-refs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for figpack-refs operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Code search API errors
    #[error("Search error: {0}")]
    Search(String),

    /// Repository scan errors
    #[error("Scan error for {repo}: {message}")]
    Scan { repo: String, message: String },

    /// Output serialization or write errors
    #[error("Output error: {0}")]
    Output(String),

    /// The git executable could not be located or run
    #[error("`{binary}` is required but not found in PATH: {message}")]
    GitUnavailable { binary: String, message: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a search error
    pub fn search(msg: impl Into<String>) -> Self {
        Self::Search(msg.into())
    }

    /// Creates a scan error
    pub fn scan(repo: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scan {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Creates an output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Creates a git-unavailable error
    pub fn git_unavailable(binary: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitUnavailable {
            binary: binary.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Adds context to any error
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}
