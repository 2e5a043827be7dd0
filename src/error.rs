use thiserror::Error;

/// Failure taxonomy for shell and filesystem operations.
///
/// The `Display` text is exactly what the user sees in the terminal; the
/// shell prepends `Error: ` when it appends a failure to history. Every
/// variant is non-fatal and leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("File '{0}' already exists.")]
    FileAlreadyExists(String),
    #[error("Directory '{0}' already exists.")]
    DirectoryAlreadyExists(String),
    #[error("a {noun} is required. Usage: {usage}")]
    MissingArgument {
        noun: &'static str,
        usage: &'static str,
    },
    #[error("command not found: {0}")]
    UnknownCommand(String),
}
