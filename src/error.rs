use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can stop the dialog from starting or running.
///
/// Filesystem errors while listing a directory are not represented here:
/// the navigator recovers from them locally.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from the terminal or filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The drawing surface cannot fit a single entry row.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Configuration could not be applied.
    #[error("Config error: {0}")]
    Config(String),
}
