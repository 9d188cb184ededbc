use thiserror::Error;

/// Errors that end an interactive session
///
/// Domain failures never show up here; they are reported to the user and
/// the session carries on.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,
}

pub type CliResult<T> = Result<T, CliError>;
